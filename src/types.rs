use std::{fmt, path::PathBuf};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::error::HeaderError;

// === Type registry ===

/// Commit type drawn from the fixed Conventional Commits registry
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CommitType(String);

impl CommitType {
   pub const VALID_TYPES: &'static [&'static str] = &[
      "feat", "fix", "build", "chore", "ci", "docs", "style", "refactor", "perf", "test", "revert",
   ];

   /// Create new `CommitType`, rejecting anything outside the registry.
   ///
   /// Matching is exact and case-sensitive: `Feat` is not `feat`.
   pub fn new(s: impl Into<String>) -> Result<Self, HeaderError> {
      let s = s.into();
      if !Self::is_allowed(&s) {
         return Err(HeaderError::UnknownType(s));
      }
      Ok(Self(s))
   }

   pub fn is_allowed(candidate: &str) -> bool {
      Self::VALID_TYPES.contains(&candidate)
   }

   /// Returns inner string slice
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// Membership test against the type registry.
pub fn is_allowed_type(candidate: &str) -> bool {
   CommitType::is_allowed(candidate)
}

impl fmt::Display for CommitType {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

impl fmt::Debug for CommitType {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_tuple("CommitType").field(&self.0).finish()
   }
}

impl Serialize for CommitType {
   fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
   where
      S: serde::Serializer,
   {
      serializer.serialize_str(&self.0)
   }
}

impl<'de> Deserialize<'de> for CommitType {
   fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
   where
      D: serde::Deserializer<'de>,
   {
      let s = String::deserialize(deserializer)?;
      Self::new(s).map_err(serde::de::Error::custom)
   }
}

// === Commit data ===

/// Field values collected by the interactive form.
///
/// Empty `scope`/`body` mean "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitFields {
   #[serde(rename = "type")]
   pub commit_type: String,
   pub scope:       String,
   pub subject:     String,
   pub body:        String,
}

/// Components extracted from a valid commit header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedHeader {
   #[serde(rename = "type")]
   pub commit_type: CommitType,
   pub scope:       Option<String>,
   pub breaking:    bool,
   pub subject:     String,
}

/// Position in the interactive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormStep {
   Type,
   Scope,
   Subject,
   Body,
   Confirm,
}

impl FormStep {
   /// Steps that own a text input, in entry order.
   pub const INPUTS: [Self; 4] = [Self::Type, Self::Scope, Self::Subject, Self::Body];

   pub const fn index(self) -> usize {
      match self {
         Self::Type => 0,
         Self::Scope => 1,
         Self::Subject => 2,
         Self::Body => 3,
         Self::Confirm => 4,
      }
   }

   /// Next step; `Confirm` is the ceiling.
   pub const fn next(self) -> Self {
      match self {
         Self::Type => Self::Scope,
         Self::Scope => Self::Subject,
         Self::Subject => Self::Body,
         Self::Body | Self::Confirm => Self::Confirm,
      }
   }

   /// Previous step; `Type` is the floor.
   pub const fn prev(self) -> Self {
      match self {
         Self::Type | Self::Scope => Self::Type,
         Self::Subject => Self::Scope,
         Self::Body => Self::Subject,
         Self::Confirm => Self::Body,
      }
   }

   pub const fn label(self) -> &'static str {
      match self {
         Self::Type => "Type",
         Self::Scope => "Scope",
         Self::Subject => "Subject",
         Self::Body => "Body",
         Self::Confirm => "Confirm",
      }
   }
}

// CLI Args
#[derive(Parser, Debug)]
#[command(
   author,
   version,
   about = "Build Conventional Commits interactively and validate commit messages",
   long_about = None
)]
pub struct Args {
   #[command(subcommand)]
   pub command: Option<Command>,

   /// Commit message file to validate (shorthand for `validate <FILE>`)
   pub file: Option<PathBuf>,

   /// Path to config file (default: ~/.config/commit-helper/config.toml)
   #[arg(long, global = true)]
   pub config: Option<PathBuf>,

   /// Directory to run git commands in
   #[arg(long, default_value = ".", global = true)]
   pub dir: String,

   /// Print parsed structures as JSON on stderr
   #[arg(long, short = 'v', global = true)]
   pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
   /// Run the interactive commit builder and create the commit
   #[command(visible_alias = "interactive")]
   Commit {
      /// Print the message instead of staging and committing
      #[arg(long)]
      dry_run: bool,

      /// GPG sign the commit (equivalent to git commit -S)
      #[arg(long, short = 'S')]
      sign: bool,
   },

   /// Validate the first line of a commit message file
   Validate {
      /// Path to the commit message file (e.g. .git/COMMIT_EDITMSG)
      file: PathBuf,

      /// Print the parsed header as JSON on success
      #[arg(long)]
      json: bool,
   },
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_registry_contains_all_types() {
      for t in [
         "feat", "fix", "build", "chore", "ci", "docs", "style", "refactor", "perf", "test", "revert",
      ] {
         assert!(is_allowed_type(t), "Type '{t}' should be allowed");
      }
      assert_eq!(CommitType::VALID_TYPES.len(), 11);
   }

   #[test]
   fn test_registry_is_case_sensitive() {
      assert!(!is_allowed_type("Feat"));
      assert!(!is_allowed_type("FIX"));
      assert!(!is_allowed_type(" feat"));
      assert!(!is_allowed_type(""));
      assert!(matches!(CommitType::new("Feat"), Err(HeaderError::UnknownType(t)) if t == "Feat"));
   }

   #[test]
   fn test_commit_type_serializes_as_plain_string() {
      let t = CommitType::new("perf").unwrap();
      assert_eq!(serde_json::to_string(&t).unwrap(), "\"perf\"");
      let back: CommitType = serde_json::from_str("\"perf\"").unwrap();
      assert_eq!(back, t);
      assert!(serde_json::from_str::<CommitType>("\"bogus\"").is_err());
   }

   #[test]
   fn test_form_step_navigation_is_clamped() {
      assert_eq!(FormStep::Type.prev(), FormStep::Type);
      assert_eq!(FormStep::Confirm.next(), FormStep::Confirm);
      assert_eq!(FormStep::Body.next(), FormStep::Confirm);
      assert_eq!(FormStep::Subject.prev(), FormStep::Scope);
      for (i, step) in FormStep::INPUTS.iter().enumerate() {
         assert_eq!(step.index(), i);
      }
   }

   #[test]
   fn test_args_parse_subcommands() {
      let args = Args::try_parse_from(["ch", "validate", "msg.txt", "--json"]).unwrap();
      assert!(matches!(
         args.command,
         Some(Command::Validate { ref file, json: true }) if file == &PathBuf::from("msg.txt")
      ));

      let args = Args::try_parse_from(["ch", "interactive"]).unwrap();
      assert!(matches!(args.command, Some(Command::Commit { dry_run: false, sign: false })));

      let args = Args::try_parse_from(["ch", "COMMIT_EDITMSG"]).unwrap();
      assert!(args.command.is_none());
      assert_eq!(args.file, Some(PathBuf::from("COMMIT_EDITMSG")));

      let args = Args::try_parse_from(["ch"]).unwrap();
      assert!(args.command.is_none() && args.file.is_none());
      assert_eq!(args.dir, ".");
   }
}
