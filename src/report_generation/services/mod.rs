/// Domain services
pub mod run_validator;

pub use run_validator::{RunValidator, REQUIRED_RECIPE};
