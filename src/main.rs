use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use commit_helper::{
   commit::{CommitRequest, run_commit_mode},
   config::HelperConfig,
   error::{CommitHelperError, Result},
   file_check::run_validation_mode,
   git::GitCli,
   style::{Palette, Stream, icons},
   types::{Args, Command},
};

/// What a command line resolves to once shorthands are expanded.
#[derive(Debug, PartialEq, Eq)]
enum Action {
   Commit { dry_run: bool, sign: bool },
   Validate { file: PathBuf, json: bool },
}

/// Bare `ch` builds a commit, `ch <FILE>` validates it.
fn resolve_action(args: &Args) -> Action {
   match (&args.command, &args.file) {
      (Some(Command::Commit { dry_run, sign }), _) => {
         Action::Commit { dry_run: *dry_run, sign: *sign }
      },
      (Some(Command::Validate { file, json }), _) => {
         Action::Validate { file: file.clone(), json: *json }
      },
      (None, Some(file)) => Action::Validate { file: file.clone(), json: false },
      (None, None) => Action::Commit { dry_run: false, sign: false },
   }
}

/// Load config from args or default
fn load_config_from_args(args: &Args) -> Result<HelperConfig> {
   if let Some(ref config_path) = args.config {
      HelperConfig::from_file(config_path)
   } else {
      HelperConfig::load()
   }
}

fn verbose_enabled(args: &Args) -> bool {
   args.verbose || std::env::var_os("COMMIT_HELPER_VERBOSE").is_some()
}

fn run(args: &Args, palette: Palette) -> Result<()> {
   let verbose = verbose_enabled(args);

   match resolve_action(args) {
      // Validation needs no config, so a broken config file cannot block a hook
      Action::Validate { file, json } => run_validation_mode(&file, json, verbose, palette),
      Action::Commit { dry_run, sign } => {
         let config = load_config_from_args(args)?;
         let mut backend = GitCli::new(&args.dir);
         run_commit_mode(&mut backend, &config, CommitRequest { dry_run, sign, verbose }, palette)
      },
   }
}

/// Exit code for a command line clap rejected. Usage errors fail with 1
/// like every other failure; `--help` and `--version` succeed.
fn parse_error_exit_code(err: &clap::Error) -> ExitCode {
   if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn main() -> ExitCode {
   let args = match Args::try_parse() {
      Ok(args) => args,
      Err(e) => {
         e.print().ok();
         return parse_error_exit_code(&e);
      },
   };
   let palette = Palette::detect(Stream::Stderr);

   match run(&args, palette) {
      Ok(()) => ExitCode::SUCCESS,
      // Already reported, or an expected way to leave
      Err(CommitHelperError::UserCancelled | CommitHelperError::InvalidHeader(_)) => {
         ExitCode::FAILURE
      },
      Err(e) => {
         eprintln!("{} {}", palette.error(icons::ERROR), palette.error(&format!("[ERROR] {e}")));
         ExitCode::FAILURE
      },
   }
}
