pub mod dtos;
pub mod enums;
pub mod errors;
pub mod service;
pub mod templates;
