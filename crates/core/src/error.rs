/// Errors produced by the pure domain logic.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A value was not in the expected textual format (version string,
    /// properties line, checksum line).
    #[error("Parse failure: {0}")]
    Parse(String),
}
