use thiserror::Error;

/// Failure taxonomy for the pipeline. Every variant is fatal; the tool does
/// no retries and no partial recovery.
#[derive(Debug, Error)]
pub enum HelperError {
    /// No line in the listing contained the marker signature.
    #[error("marker `{marker}` not found in {path}")]
    MarkerNotFound { marker: String, path: String },

    /// The matched line's leading field is not a valid hex address.
    #[error("malformed address field `{field}` in listing line `{line}`")]
    MalformedAddress { field: String, line: String },

    /// The parsed address sits below the load base, so the translation would
    /// go negative. The memory map and the listing disagree.
    #[error("address {address:#x} is below load base {load_base:#x}")]
    AddressBelowLoadBase { address: u64, load_base: u64 },
}

impl HelperError {
    /// Distinct exit status per failure class, so the surrounding build
    /// system can tell a missing marker from a corrupt listing.
    pub fn exit_code(&self) -> u8 {
        match self {
            HelperError::MarkerNotFound { .. } => 2,
            HelperError::MalformedAddress { .. } => 3,
            HelperError::AddressBelowLoadBase { .. } => 4,
        }
    }
}
