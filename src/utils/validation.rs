use crate::utils::error::{RegistryError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::InvalidSeed {
            field: field_name.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(RegistryError::InvalidSeed {
            field: field_name.to_string(),
            reason: "value must be positive".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_keys<'a, I>(field_name: &str, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(RegistryError::InvalidSeed {
                field: field_name.to_string(),
                reason: format!("duplicate key: {}", key),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_rejects_whitespace() {
        assert!(validate_non_empty("code", "   ").is_err());
        assert!(validate_non_empty("code", "CS101").is_ok());
    }

    #[test]
    fn test_positive_rejects_zero() {
        assert!(validate_positive("capacity", 0).is_err());
        assert!(validate_positive("capacity", 1).is_ok());
    }

    #[test]
    fn test_unique_keys_rejects_duplicates() {
        assert!(validate_unique_keys("codes", ["CS101", "MATH101"]).is_ok());
        let err = validate_unique_keys("codes", ["CS101", "CS101"]).unwrap_err();
        assert!(err.to_string().contains("CS101"));
    }
}
