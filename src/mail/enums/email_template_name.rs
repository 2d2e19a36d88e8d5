use std::{collections::HashMap, fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

lazy_static! {
    /// Every registered name keyed by itself.
    pub static ref TEMPLATE_NAMES: HashMap<&'static str, EmailTemplateName> =
        EmailTemplateName::all()
            .iter()
            .map(|name| (name.value(), *name))
            .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailTemplateName {
    SignUpV1,
    SignInV1,
    OrgInvitationV1,
}

impl EmailTemplateName {
    const ALL: [EmailTemplateName; 3] = [Self::SignUpV1, Self::SignInV1, Self::OrgInvitationV1];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::SignUpV1 => "signUpV1",
            Self::SignInV1 => "signInV1",
            Self::OrgInvitationV1 => "orgInvitationV1",
        }
    }

    /// Declaration order.
    pub fn all() -> &'static [EmailTemplateName] {
        &Self::ALL
    }

    pub fn from_value(value: &str) -> Option<EmailTemplateName> {
        TEMPLATE_NAMES.get(value).copied()
    }
}

pub fn list_template_names() -> &'static [EmailTemplateName] {
    EmailTemplateName::all()
}

/// Exact, case-sensitive match against the registered names.
pub fn is_valid_template_name(candidate: &str) -> bool {
    TEMPLATE_NAMES.contains_key(candidate)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTemplateName(pub String);

impl fmt::Display for UnknownTemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown email template name: {:?}", self.0)
    }
}

impl std::error::Error for UnknownTemplateName {}

impl FromStr for EmailTemplateName {
    type Err = UnknownTemplateName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_value(s).ok_or_else(|| UnknownTemplateName(s.to_string()))
    }
}

impl fmt::Display for EmailTemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl Serialize for EmailTemplateName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for EmailTemplateName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn lists_names_in_declaration_order() {
        let names: Vec<&str> = list_template_names().iter().map(|n| n.value()).collect();
        assert_eq!(names, vec!["signUpV1", "signInV1", "orgInvitationV1"]);
    }

    #[test]
    fn names_are_unique() {
        let unique: HashSet<_> = list_template_names().iter().collect();
        assert_eq!(unique.len(), list_template_names().len());
        assert_eq!(TEMPLATE_NAMES.len(), list_template_names().len());
    }

    #[test]
    fn mapping_is_identity() {
        for (key, name) in TEMPLATE_NAMES.iter() {
            assert_eq!(*key, name.value());
        }
    }

    #[test]
    fn rejects_near_misses() {
        for candidate in ["", " ", "SignUpV1", "signupv1", " signInV1", "signInV1 ", "orgInvitationV2"] {
            assert!(!is_valid_template_name(candidate), "{:?}", candidate);
        }
        assert!(is_valid_template_name("orgInvitationV1"));
    }

    #[test]
    fn parse_error_names_the_candidate() {
        let err = "signUpV2".parse::<EmailTemplateName>().unwrap_err();
        assert_eq!(err, UnknownTemplateName("signUpV2".to_string()));
        assert!(err.to_string().contains("signUpV2"));
    }
}
