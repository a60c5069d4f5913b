//! Standalone validation of a commit message file, as used from a
//! `commit-msg` hook.

use std::{fs, path::Path};

use crate::{
   error::{CommitHelperError, HeaderError, Result},
   render::{render_guidelines, render_header_error},
   style::{Palette, Stream, term_width},
   types::ParsedHeader,
   validation::{first_line, validate_header},
};

/// Read `path` and validate the first line of its contents. Bytes that are
/// not UTF-8 (e.g. a Latin-1 body) are decoded lossily.
pub fn check_message_file(path: &Path) -> Result<ParsedHeader> {
   let bytes = fs::read(path).map_err(|source| CommitHelperError::FileUnreadable {
      path: path.display().to_string(),
      source,
   })?;
   let contents = String::from_utf8_lossy(&bytes);
   Ok(validate_header(first_line(&contents))?)
}

/// Error report for a rejected header: the error, the allowed types where
/// relevant, then the guidelines block.
pub fn describe_failure(err: &HeaderError, palette: Palette, width: usize) -> String {
   format!("{}\n\n{}", render_header_error(err, palette), render_guidelines(palette, width))
}

/// Entry point for `ch validate`. A rejected header is reported here and
/// returned as `InvalidHeader` so the caller only has to set the exit code.
pub fn run_validation_mode(path: &Path, json: bool, verbose: bool, palette: Palette) -> Result<()> {
   let header = match check_message_file(path) {
      Ok(header) => header,
      Err(CommitHelperError::InvalidHeader(err)) => {
         eprintln!("{}", describe_failure(&err, palette, term_width().min(80)));
         return Err(err.into());
      },
      Err(e) => return Err(e),
   };

   if json {
      println!("{}", serde_json::to_string_pretty(&header)?);
   } else {
      let out = Palette::detect(Stream::Stdout);
      println!("{}", out.success("[SUCCESS] Commit message is valid."));
      if verbose {
         eprintln!("{}", serde_json::to_string_pretty(&header)?);
      }
   }
   Ok(())
}

#[cfg(test)]
mod tests {
   use tempfile::NamedTempFile;

   use super::*;

   fn message_file(contents: &str) -> NamedTempFile {
      let file = NamedTempFile::new().unwrap();
      fs::write(file.path(), contents).unwrap();
      file
   }

   #[test]
   fn test_valid_file_with_body() {
      let file = message_file("feat(api): add endpoint\n\nLonger body text.\n");
      let header = check_message_file(file.path()).unwrap();
      assert_eq!(header.commit_type.as_str(), "feat");
      assert_eq!(header.scope.as_deref(), Some("api"));
      assert_eq!(header.subject, "add endpoint");
   }

   #[test]
   fn test_crlf_line_endings() {
      let file = message_file("fix: handle windows files\r\n\r\nbody\r\n");
      let header = check_message_file(file.path()).unwrap();
      assert_eq!(header.subject, "handle windows files");
   }

   #[test]
   fn test_only_first_line_is_checked() {
      let file = message_file("chore: bump deps\nnot a header at all");
      assert!(check_message_file(file.path()).is_ok());

      let file = message_file("bump deps\nfeat: looks valid but is line two");
      let err = check_message_file(file.path()).unwrap_err();
      assert!(matches!(err, CommitHelperError::InvalidHeader(HeaderError::MalformedHeader)));
   }

   #[test]
   fn test_non_utf8_body_is_accepted() {
      let file = NamedTempFile::new().unwrap();
      fs::write(file.path(), b"feat: add caf\xe9 support\n\nBody in latin-1: \xe9\n").unwrap();
      let header = check_message_file(file.path()).unwrap();
      assert_eq!(header.commit_type.as_str(), "feat");
      assert_eq!(header.subject, "add caf\u{FFFD} support");
   }

   #[test]
   fn test_empty_file() {
      let file = message_file("");
      let err = check_message_file(file.path()).unwrap_err();
      assert!(matches!(err, CommitHelperError::InvalidHeader(HeaderError::EmptyMessage)));
   }

   #[test]
   fn test_unknown_type() {
      let file = message_file("feature: add x");
      let err = check_message_file(file.path()).unwrap_err();
      assert!(matches!(
         err,
         CommitHelperError::InvalidHeader(HeaderError::UnknownType(ref t)) if t == "feature"
      ));
   }

   #[test]
   fn test_missing_file_is_unreadable() {
      let dir = tempfile::TempDir::new().unwrap();
      let path = dir.path().join("COMMIT_EDITMSG");
      let err = check_message_file(&path).unwrap_err();
      let CommitHelperError::FileUnreadable { path: reported, .. } = &err else {
         panic!("expected FileUnreadable, got {err:?}");
      };
      assert!(reported.ends_with("COMMIT_EDITMSG"));
   }

   #[test]
   fn test_failure_report_includes_guidelines() {
      let out = describe_failure(&HeaderError::UnknownType("wip".into()), Palette::PLAIN, 80);
      assert!(out.starts_with("[ERROR] Invalid commit type: 'wip'"));
      assert!(out.contains("Allowed types are:"));
      assert!(out.contains("Conventional Commits Guidelines"));
      assert!(out.contains("https://www.conventionalcommits.org"));

      let out = describe_failure(&HeaderError::MissingSubjectSpace, Palette::PLAIN, 80);
      assert!(out.starts_with("[ERROR] Subject must have a leading space after the colon."));
   }
}
