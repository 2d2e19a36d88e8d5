pub mod envy;
pub mod logging;
pub mod models;
