//! Validation trait definition

/// Checks a configuration structure, describing the first problem found
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
