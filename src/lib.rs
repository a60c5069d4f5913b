//! Conventional Commits helper library
//!
//! Provides an interactive, step-wise form for building Conventional Commits
//! messages and a validator for the commit header grammar.
pub mod commit;
pub mod config;
pub mod error;
pub mod file_check;
pub mod form;
pub mod git;
pub mod message;
pub mod render;
pub mod style;
pub mod terminal;
pub mod text_input;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::HelperConfig;
pub use error::{CommitHelperError, HeaderError, Result};
pub use form::{Form, FormEvent, FormOutcome};
pub use types::{CommitFields, CommitType, ParsedHeader};
pub use validation::validate_header;
