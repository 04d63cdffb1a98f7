use deepcopy_core::{CopyError, CopyResult};
use deepcopy_people::User;

use crate::strategy::{CopyProvider, CopyStrategy};

const ENCODER: &str = "facet-json";

/// Copies through JSON text using facet reflection; serde is not involved.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacetJsonRoundTrip;

impl FacetJsonRoundTrip {
    pub fn encode(&self, source: &User) -> CopyResult<String> {
        facet_json::to_string(source).map_err(|e| CopyError::encoding(ENCODER, e.to_string()))
    }

    pub fn decode(&self, text: &str) -> CopyResult<User> {
        facet_json::from_str::<User>(text).map_err(|e| CopyError::decoding(ENCODER, e.to_string()))
    }
}

impl CopyProvider for FacetJsonRoundTrip {
    fn strategy(&self) -> CopyStrategy {
        CopyStrategy::FacetJsonRoundTrip
    }

    fn copy(&self, source: &User) -> CopyResult<User> {
        let text = self.encode(source)?;
        tracing::trace!(len = text.len(), encoder = ENCODER, "encoded user");
        self.decode(&text)
    }
}
