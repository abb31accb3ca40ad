//! Platform fault type
//!
//! Mirrors the failure kinds a platform codec call can raise. None of these
//! escape the resolver: they are downgraded to "codec unavailable".

/// Fault raised by a platform codec primitive
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
  #[error("No codec registered under name: {0}")]
  NameNotFound(String),

  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("Illegal state: {0}")]
  IllegalState(String),

  #[error("Permission denied: {0}")]
  Security(String),

  #[error("I/O error: {0}")]
  Io(String),

  #[error("Codec fault: {0}")]
  Codec(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;
