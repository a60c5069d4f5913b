//! Conventional Commits header grammar.
//!
//! `header = type [ "(" scope ")" ] [ "!" ] ":" " " subject`
//!
//! `type` and `scope` are runs of ASCII word characters. The same checks back
//! both the standalone file validation and the per-step checks of the
//! interactive form.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
   error::HeaderError,
   types::{CommitType, ParsedHeader},
};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
   Regex::new(
      r"^(?P<type>[0-9A-Za-z_]+)(?:\((?P<scope>[0-9A-Za-z_]+)\))?(?P<breaking>!)?:(?P<subject>.+)$",
   )
   .expect("header pattern is a valid regex")
});

/// Characters allowed in `type` and `scope` tokens.
pub const fn is_word_char(c: char) -> bool {
   c.is_ascii_alphanumeric() || c == '_'
}

/// First line of a commit message file, as git writes it.
pub fn first_line(message: &str) -> &str {
   message.split('\n').next().unwrap_or("")
}

/// Type-step check: the candidate must be a registry member.
pub fn check_type(candidate: &str) -> Result<CommitType, HeaderError> {
   CommitType::new(candidate)
}

/// Subject-step check: the subject must not be blank.
pub fn check_subject(subject: &str) -> Result<&str, HeaderError> {
   let trimmed = subject.trim();
   if trimmed.is_empty() {
      return Err(HeaderError::EmptySubject);
   }
   Ok(trimmed)
}

/// Validate a commit header line and extract its parts.
pub fn validate_header(line: &str) -> Result<ParsedHeader, HeaderError> {
   let line = line.trim();
   if line.is_empty() {
      return Err(HeaderError::EmptyMessage);
   }

   let caps = HEADER_RE
      .captures(line)
      .ok_or(HeaderError::MalformedHeader)?;

   let commit_type = check_type(&caps["type"])?;

   let raw_subject = &caps["subject"];
   if !raw_subject.starts_with(' ') {
      return Err(HeaderError::MissingSubjectSpace);
   }
   let subject = check_subject(raw_subject)?;

   Ok(ParsedHeader {
      commit_type,
      scope: caps.name("scope").map(|m| m.as_str().to_string()),
      breaking: caps.name("breaking").is_some(),
      subject: subject.to_string(),
   })
}
