//! Interactive commit mode.
//!
//! Runs the form, then hands the confirmed message to a [`CommitBackend`]:
//! stage everything, resolve the author (falling back to the configured
//! placeholder identity), commit and report the short hash.

use std::time::Duration;

use crate::{
   config::HelperConfig,
   error::{CommitHelperError, Result},
   form::{FieldLimits, Form, FormOutcome},
   git::{Author, CommitBackend, CommitOptions},
   style::{Palette, Stream, icons},
   terminal,
};

/// Per-invocation switches for commit mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitRequest {
   pub dry_run: bool,
   pub sign:    bool,
   pub verbose: bool,
}

/// What the commit flow ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitReport {
   Committed { short_hash: String, author: Author },
   /// Nothing staged after `git add -A`; not an error.
   NoChanges,
   /// `--dry-run`: the message that would have been committed.
   DryRun(String),
}

/// Author from the repository config, or the configured fallback. The flag
/// is true when the fallback was used.
fn author_or_fallback<B: CommitBackend>(
   backend: &mut B,
   config: &HelperConfig,
   palette: Palette,
) -> (Author, bool) {
   match backend.resolve_author() {
      Ok(author) => (author, false),
      Err(e) => {
         let fallback =
            Author::new(&config.fallback_author_name, &config.fallback_author_email);
         palette.warn(&format!("{e}. Using fallback author {fallback}"));
         (fallback, true)
      },
   }
}

/// Stage, commit and report. The backend is not touched on a dry run.
pub fn finish_commit<B: CommitBackend>(
   backend: &mut B,
   message: &str,
   config: &HelperConfig,
   request: CommitRequest,
   palette: Palette,
) -> Result<CommitReport> {
   if request.dry_run {
      return Ok(CommitReport::DryRun(message.to_string()));
   }

   palette.print_info("Staging files...");
   backend.stage_all()?;
   if !backend.has_staged_changes()? {
      return Ok(CommitReport::NoChanges);
   }

   let (author, fallback) = author_or_fallback(backend, config, palette);

   palette.print_info("Creating commit...");
   let options = CommitOptions {
      sign:                request.sign || config.gpg_sign,
      author_as_committer: fallback,
   };
   let short_hash = backend.commit(message, &author, options)?;
   Ok(CommitReport::Committed { short_hash, author })
}

/// Act on the form's final outcome. Anything but a confirmation is a
/// cancellation and never reaches the backend.
pub fn complete_session<B: CommitBackend>(
   outcome: &FormOutcome,
   backend: &mut B,
   config: &HelperConfig,
   request: CommitRequest,
   palette: Palette,
) -> Result<CommitReport> {
   match outcome {
      FormOutcome::Confirmed(message) => finish_commit(backend, message, config, request, palette),
      FormOutcome::Cancelled | FormOutcome::Pending => Err(CommitHelperError::UserCancelled),
   }
}

/// Human-readable summary for stdout.
pub fn describe_report(report: &CommitReport, palette: Palette) -> String {
   match report {
      CommitReport::Committed { short_hash, author } => format!(
         "{} Commit successful! {} {}",
         palette.success(icons::SUCCESS),
         palette.bold(short_hash),
         palette.dim(&format!("({author})"))
      ),
      CommitReport::NoChanges => palette.warning("No changes to commit."),
      CommitReport::DryRun(message) => {
         format!("{}\n{message}", palette.dim("DRY RUN - would commit:"))
      },
   }
}

/// Entry point for `ch commit`.
pub fn run_commit_mode<B: CommitBackend>(
   backend: &mut B,
   config: &HelperConfig,
   request: CommitRequest,
   palette: Palette,
) -> Result<()> {
   let mut form = Form::new(FieldLimits::from(config));
   let outcome = terminal::run_form(
      &mut form,
      palette,
      Duration::from_millis(config.blink_interval_ms),
   )?;

   if request.verbose {
      eprintln!("{}", serde_json::to_string_pretty(form.fields())?);
   }

   let report = complete_session(&outcome, backend, config, request, palette)?;
   println!("{}", describe_report(&report, Palette::detect(Stream::Stdout)));
   Ok(())
}
