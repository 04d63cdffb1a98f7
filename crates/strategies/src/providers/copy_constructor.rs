use deepcopy_core::CopyResult;
use deepcopy_people::User;

use crate::strategy::{CopyProvider, CopyStrategy};

/// Copies through [`User::from_existing`]. Cannot fail.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyConstructor;

impl CopyProvider for CopyConstructor {
    fn strategy(&self) -> CopyStrategy {
        CopyStrategy::CopyConstructor
    }

    fn copy(&self, source: &User) -> CopyResult<User> {
        Ok(User::from_existing(source))
    }
}
