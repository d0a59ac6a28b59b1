//! Section trait and range checks for config values

pub use crate::error::ValidationError;

/// A table of `config.toml` that checks and merges itself
pub trait ConfigSection: Default {
    /// `Ok` when every value is usable, otherwise one error per bad field
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Overwrites `self` with the values of `other`
    fn merge(&mut self, other: Self);

    /// The TOML table name, e.g. `catalog`
    fn section_name(&self) -> &'static str;
}

pub struct Validator;

impl Validator {
    /// Inclusive range check that records the rejected value
    pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if (min..=max).contains(&value) {
            return Ok(());
        }
        Err(ValidationError::with_value(
            field,
            format!("must be between {} and {}", min, max),
            value,
        ))
    }

    /// Keeps only the failures
    pub fn collect_errors<I>(results: I) -> Result<(), Vec<ValidationError>>
    where
        I: IntoIterator<Item = Result<(), ValidationError>>,
    {
        let errors: Vec<_> = results.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
