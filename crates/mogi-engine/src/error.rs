use std::fmt;

/// Error returned by fallible engine operations.
///
/// Degenerate drawing input (zero-length lines, non-positive radii, empty
/// rects) is never reported here; those calls are silently skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Backend, window or GPU setup failed.
    Initialization(String),
    /// A font or image could not be opened, read, decoded, packed or uploaded.
    ResourceLoad(String),
    /// A CPU-side buffer (atlas bitmap, image pixels) could not be reserved.
    Allocation(String),
}

impl EngineError {
    pub(crate) fn resource(msg: impl Into<String>) -> Self {
        Self::ResourceLoad(msg.into())
    }

    pub(crate) fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialization(msg) => write!(f, "initialization failed: {msg}"),
            Self::ResourceLoad(msg) => write!(f, "resource load failed: {msg}"),
            Self::Allocation(msg) => write!(f, "allocation failed: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        Self::Initialization(format!("{err:#}"))
    }
}

/// Reserves a zeroed byte buffer without aborting on allocation failure.
pub(crate) fn try_zeroed(len: usize, what: &str) -> Result<Vec<u8>, EngineError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| EngineError::allocation(format!("{what} ({len} bytes): {e}")))?;
    buf.resize(len, 0);
    Ok(buf)
}
