use thiserror::Error;

/// Errors raised while building login links or probing the backend.
///
/// None of these ever surface in the UI; probe failures resolve to
/// "available" so a flaky check never hides a working login option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    #[error("Invalid provider: {0}")]
    InvalidProvider(String),
    #[error("Browser API unavailable: {0}")]
    Browser(String),
    #[error("Probe transport failure: {0}")]
    ProbeTransport(String),
}

impl SignInError {
    pub fn browser(msg: impl Into<String>) -> Self {
        Self::Browser(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::ProbeTransport(msg.into())
    }
}
