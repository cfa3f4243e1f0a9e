//! City name value object
//!
//! A trimmed, non-empty city name as accepted by the weather upstream.
//!
//! # Examples
//!
//! ```
//! use domain::CityName;
//!
//! let city = CityName::new("London").unwrap();
//! assert_eq!(city.as_str(), "London");
//!
//! // Surrounding whitespace is trimmed
//! let city = CityName::new("  Paris  ").unwrap();
//! assert_eq!(city.as_str(), "Paris");
//!
//! // Blank names are rejected
//! assert!(CityName::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

const MAX_CITY_NAME_LEN: usize = 120;

/// A validated city name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityName {
    value: String,
}

impl CityName {
    /// Create a new city name, trimming whitespace and validating
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or unreasonably long.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let value = name.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::InvalidCityName(
                "city name must not be blank".to_string(),
            ));
        }
        if value.len() > MAX_CITY_NAME_LEN {
            return Err(DomainError::InvalidCityName(format!(
                "city name exceeds {MAX_CITY_NAME_LEN} characters"
            )));
        }
        Ok(Self { value })
    }

    /// Get the city name as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
