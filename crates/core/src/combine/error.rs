use thiserror::Error;

/// Errors from the batch parse/combine path.
///
/// Unlike fetch failures on the streaming path, a parse failure here is
/// terminal for the whole combine call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombineError {
    /// The input text is not structurally valid iCalendar data.
    #[error("invalid calendar data: {0}")]
    Parse(String),
}
