use facet::Facet;
use serde::{Deserialize, Serialize};

use deepcopy_core::{CopyResult, DeepClone, ValueObject};

use crate::address::Address;

/// A person who exclusively owns their [`Address`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Facet)]
#[serde(rename_all = "camelCase")]
#[facet(rename_all = "camelCase")]
pub struct User {
    first_name: String,
    last_name: String,
    address: Address,
}

impl User {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, address: Address) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address,
        }
    }

    /// Copy constructor.
    ///
    /// Names are copied by value; the address goes through
    /// [`Address::from_existing`], so the result owns a new `Address`.
    pub fn from_existing(source: &User) -> Self {
        Self {
            first_name: String::from(source.first_name.as_str()),
            last_name: String::from(source.last_name.as_str()),
            address: Address::from_existing(&source.address),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut Address {
        &mut self.address
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }
}

impl ValueObject for User {}

impl DeepClone for User {
    fn deep_clone(&self) -> CopyResult<Self> {
        // A new Address, never a handle to ours.
        let address = self.address.deep_clone()?;
        Ok(Self::new(self.first_name.clone(), self.last_name.clone(), address))
    }
}
