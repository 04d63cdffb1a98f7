use deepcopy_core::{CopyResult, DeepClone};
use deepcopy_people::User;

use crate::strategy::{CopyProvider, CopyStrategy};

/// Copies through the [`DeepClone`] capability declared by `User`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CloneCapability;

impl CloneCapability {
    /// Clone any graph that declares the capability.
    ///
    /// Fails with `CopyError::CloneUnsupported` for types that left
    /// `deep_clone` at its default.
    pub fn duplicate<T: DeepClone>(&self, source: &T) -> CopyResult<T> {
        source.deep_clone()
    }
}

impl CopyProvider for CloneCapability {
    fn strategy(&self) -> CopyStrategy {
        CopyStrategy::CloneCapability
    }

    fn copy(&self, source: &User) -> CopyResult<User> {
        self.duplicate(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepcopy_core::CopyError;

    struct Handle;

    impl DeepClone for Handle {}

    #[test]
    fn undeclared_capability_fails_without_copying() {
        let err = CloneCapability.duplicate(&Handle).err().unwrap();
        assert!(matches!(err, CopyError::CloneUnsupported { type_name } if type_name.ends_with("Handle")));
    }
}
