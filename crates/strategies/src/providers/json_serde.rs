use deepcopy_core::{CopyError, CopyResult};
use deepcopy_people::User;

use crate::strategy::{CopyProvider, CopyStrategy};

const ENCODER: &str = "serde_json";

/// Copies through JSON text using serde data binding.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerdeJsonRoundTrip;

impl SerdeJsonRoundTrip {
    pub fn encode(&self, source: &User) -> CopyResult<String> {
        serde_json::to_string(source).map_err(|e| CopyError::encoding(ENCODER, e.to_string()))
    }

    pub fn decode(&self, text: &str) -> CopyResult<User> {
        serde_json::from_str(text).map_err(|e| CopyError::decoding(ENCODER, e.to_string()))
    }
}

impl CopyProvider for SerdeJsonRoundTrip {
    fn strategy(&self) -> CopyStrategy {
        CopyStrategy::SerdeJsonRoundTrip
    }

    fn copy(&self, source: &User) -> CopyResult<User> {
        let text = self.encode(source)?;
        tracing::trace!(len = text.len(), encoder = ENCODER, "encoded user");
        self.decode(&text)
    }
}
