//! # Scene Tagger
//!
//! Shapes metadata-provider scene matches for review and submission.
//!
//! ## Architecture
//! The library is a set of pure transformations; fetching records and
//! presenting them belong to the caller:
//! - `core` - Path parsing, record normalization, duration ranking, field filtering
//! - `config` - User preferences
//! - `error` - Typed error types

pub mod config;
pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use config::TaggerConfig;
pub use error::{Result, TaggerError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. `RUST_LOG` takes
/// precedence; otherwise `verbose` selects debug output over warnings only.
pub fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
