use serde::Serialize;
use serde::de::DeserializeOwned;

use deepcopy_core::{CopyError, CopyResult};
use deepcopy_people::User;

use crate::strategy::{CopyProvider, CopyStrategy};

/// Copies by encoding the graph to postcard bytes and decoding a fresh one.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryRoundTrip;

impl BinaryRoundTrip {
    /// Round-trip any serde-representable graph.
    pub fn round_trip<T>(&self, source: &T) -> CopyResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let bytes = self.encode(source)?;
        self.decode(&bytes)
    }

    pub fn encode<T: Serialize + ?Sized>(&self, source: &T) -> CopyResult<Vec<u8>> {
        let bytes = postcard::to_allocvec(source).map_err(|e| CopyError::serialization(e.to_string()))?;
        tracing::trace!(len = bytes.len(), "encoded binary image");
        Ok(bytes)
    }

    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> CopyResult<T> {
        postcard::from_bytes(bytes).map_err(|e| CopyError::serialization(e.to_string()))
    }
}

impl CopyProvider for BinaryRoundTrip {
    fn strategy(&self) -> CopyStrategy {
        CopyStrategy::BinaryRoundTrip
    }

    fn copy(&self, source: &User) -> CopyResult<User> {
        self.round_trip(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepcopy_people::Address;

    use std::collections::HashMap;

    fn prime_minister() -> User {
        User::new(
            "Prime",
            "Minister",
            Address::new("Downing St 10", "London", "England"),
        )
    }

    #[test]
    fn truncated_image_is_a_serialization_error() {
        let bytes = BinaryRoundTrip.encode(&prime_minister()).unwrap();
        let err = BinaryRoundTrip
            .decode::<User>(&bytes[..bytes.len() / 2])
            .unwrap_err();

        assert!(matches!(err, CopyError::Serialization(_)));
    }

    #[test]
    fn unrepresentable_graph_is_a_serialization_error() {
        // postcard needs a known length up front; an iterator-backed map
        // without one cannot be represented.
        struct Unsized(HashMap<String, String>);

        impl Serialize for Unsized {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_map(self.0.iter().filter(|_| true))
            }
        }

        let graph = Unsized(HashMap::from([("k".to_string(), "v".to_string())]));
        let err = BinaryRoundTrip.encode(&graph).unwrap_err();

        assert!(matches!(err, CopyError::Serialization(_)));
    }
}
