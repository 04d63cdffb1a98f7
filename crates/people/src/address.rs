use facet::Facet;
use serde::{Deserialize, Serialize};

use deepcopy_core::{CopyResult, DeepClone, ValueObject};

/// Postal address owned by exactly one [`User`](crate::User).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Facet)]
#[serde(rename_all = "camelCase")]
#[facet(rename_all = "camelCase")]
pub struct Address {
    street: String,
    city: String,
    country: String,
}

impl Address {
    pub fn new(street: impl Into<String>, city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// Copy constructor: a new `Address` with freshly allocated field values.
    pub fn from_existing(source: &Address) -> Self {
        Self {
            street: String::from(source.street.as_str()),
            city: String::from(source.city.as_str()),
            country: String::from(source.country.as_str()),
        }
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn set_street(&mut self, street: impl Into<String>) {
        self.street = street.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }
}

impl ValueObject for Address {}

impl DeepClone for Address {
    fn deep_clone(&self) -> CopyResult<Self> {
        Ok(Self::new(
            self.street.clone(),
            self.city.clone(),
            self.country.clone(),
        ))
    }
}
