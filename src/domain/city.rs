// City query domain model
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("city name is required")]
    EmptyCity,

    #[error("city name is not valid UTF-8 once decoded")]
    MalformedCity,
}

/// A city name that is known to be non-empty after trimming.
///
/// Services only accept this type, so an unvalidated path parameter can
/// never reach an upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let city = CityQuery::parse("  New York \t").unwrap();
        assert_eq!(city.as_str(), "New York");
        assert_eq!(city.to_string(), "New York");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        for raw in ["", " ", "\t\n", "   "] {
            assert_eq!(CityQuery::parse(raw), Err(ValidationError::EmptyCity));
        }
    }
}
