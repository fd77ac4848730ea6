#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Lookup of #{index} in an empty list")]
    Empty { index: usize },

    #[error("Index out of range: #{index} (len: {len})")]
    OutOfRange { index: usize, len: usize },
}
