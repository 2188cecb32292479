use thiserror::Error;

/// Errors returned by the window queries.
///
/// All validation happens before any processing, so a query either fails
/// with one of these or returns a complete result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("the window is empty")]
    EmptyWindow,

    #[error("a k-way merge needs at least one source")]
    EmptySources,
}

impl WindowError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WindowError>;

/// Window sizes must lie in `1..=len`. An empty input is accepted for any
/// positive window and yields an empty answer.
pub(crate) fn check_window(w: usize, len: usize) -> Result<()> {
    if w == 0 {
        return Err(WindowError::invalid("window", "must be at least 1"));
    }
    if len > 0 && w > len {
        return Err(WindowError::invalid(
            "window",
            format!("{w} exceeds the sequence length {len}"),
        ));
    }
    Ok(())
}
