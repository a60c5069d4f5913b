use thiserror::Error;

use crate::types::CommitType;

/// Reasons a commit header fails the Conventional Commits grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
   #[error("Commit message cannot be empty.")]
   EmptyMessage,

   #[error("Invalid commit message format.")]
   MalformedHeader,

   #[error("Invalid commit type '{0}'. Choose from: {types}", types = CommitType::VALID_TYPES.join(", "))]
   UnknownType(String),

   #[error("Subject must have a leading space after the colon.")]
   MissingSubjectSpace,

   #[error("Subject cannot be empty.")]
   EmptySubject,
}

#[derive(Debug, Error)]
pub enum CommitHelperError {
   #[error("Failed to read commit message file {path}: {source}")]
   FileUnreadable {
      path:   String,
      #[source]
      source: std::io::Error,
   },

   #[error("{0}")]
   InvalidHeader(#[from] HeaderError),

   #[error("Git command failed: {0}")]
   GitError(String),

   #[error("Could not get git author info: {0}")]
   AuthorUnresolvable(String),

   #[error("interactive mode cancelled by user")]
   UserCancelled,

   #[error("Interactive mode needs a terminal on stderr")]
   NotATerminal,

   #[error("IO error: {0}")]
   IoError(#[from] std::io::Error),

   #[error("JSON error: {0}")]
   JsonError(#[from] serde_json::Error),

   #[error("Config error: {0}")]
   ConfigError(String),
}

pub type Result<T> = std::result::Result<T, CommitHelperError>;
