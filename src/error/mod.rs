//! Error module for Mauka Autocomplete.
//!
//! This module provides the error handling framework for the crate: explicit
//! error types per concern, aggregated into [`AutocompleteError`], plus an
//! [`ErrorReporter`] seam used where failures are degraded instead of
//! propagated.
//!
//! The trie itself never fails; every error here originates in the catalog,
//! configuration or terminal front end.

use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing_error::SpanTrace;

pub mod catalog;
pub mod config;

pub use catalog::{CatalogError, CatalogResult};
pub use config::ConfigError;

/// Result type alias used throughout Mauka Autocomplete.
pub type AutocompleteResult<T> = Result<T, AutocompleteError>;

/// Core error enum for Mauka Autocomplete.
#[derive(Error, Debug)]
pub enum AutocompleteError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors occurring while reading the country catalog.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// IO errors from the terminal or the file system.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: AutocompleteError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,

    /// Span trace captured at the point of failure, if requested.
    pub trace: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<E, S>(error: E, component: S) -> Self
    where
        E: Into<AutocompleteError>,
        S: Into<String>,
    {
        Self {
            error: error.into(),
            component: component.into(),
            details: None,
            trace: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Captures the current tracing span stack into the context.
    ///
    /// The trace is only populated when the subscriber has a
    /// [`tracing_error::ErrorLayer`] installed.
    pub fn with_span_trace(mut self) -> Self {
        let trace = SpanTrace::capture().to_string();
        if !trace.is_empty() {
            self.trace = Some(trace);
        }
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            trace = context.trace.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}
