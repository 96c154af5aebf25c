//! Error extension utilities
//!
//! Attaches context to foreign errors while converting them to the domain
//! [`Error`].

use lakeguard_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```
/// use lakeguard_infrastructure::error_ext::ErrorContext;
///
/// let parsed: lakeguard_domain::Result<u32> = "forty".parse::<u32>().context("Bad count");
/// assert!(parsed.unwrap_err().to_string().contains("Bad count"));
/// ```
pub trait ErrorContext<T> {
    /// Convert the error to a configuration error carrying `context`
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Same as [`ErrorContext::context`], building the context lazily
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{}: {err}", f()),
            source: Some(Box::new(err)),
        })
    }
}
