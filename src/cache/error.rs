use thiserror::Error;

/// Errors returned by [`CacheRegistry`](super::CacheRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is already registered with a different value type.
    #[error("cache '{name}' holds {existing}, requested as {requested}")]
    TypeMismatch {
        name: String,
        existing: &'static str,
        requested: &'static str,
    },
}
