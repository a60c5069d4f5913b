use std::{
   fmt,
   path::{Path, PathBuf},
   process::{Command, Output},
};

use crate::error::{CommitHelperError, Result};

/// Name and email written into the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
   pub name:  String,
   pub email: String,
}

impl Author {
   pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
      Self { name: name.into(), email: email.into() }
   }
}

impl fmt::Display for Author {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{} <{}>", self.name, self.email)
   }
}

/// How the commit should be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitOptions {
   /// GPG sign (`git commit -S`)
   pub sign: bool,

   /// Also pass the author as committer identity, for repositories where
   /// git has no identity configured at all
   pub author_as_committer: bool,
}

/// The version-control collaborator used by the commit flow.
pub trait CommitBackend {
   /// Stage every working-tree change.
   fn stage_all(&mut self) -> Result<()>;

   /// Whether the index differs from HEAD.
   fn has_staged_changes(&mut self) -> Result<bool>;

   /// Author identity from the repository configuration.
   fn resolve_author(&mut self) -> Result<Author>;

   /// Create the commit and return its short hash.
   fn commit(&mut self, message: &str, author: &Author, options: CommitOptions) -> Result<String>;
}

/// [`CommitBackend`] that shells out to the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCli {
   dir: PathBuf,
}

impl GitCli {
   pub fn new(dir: impl AsRef<Path>) -> Self {
      Self { dir: dir.as_ref().to_path_buf() }
   }

   fn git(&self) -> Command {
      let mut cmd = Command::new("git");
      cmd.current_dir(&self.dir);
      cmd
   }

   fn run(&self, cmd: &mut Command, what: &str) -> Result<Output> {
      cmd.output()
         .map_err(|e| CommitHelperError::GitError(format!("Failed to run git {what}: {e}")))
   }

   fn config_value(&self, key: &str) -> Result<String> {
      let output = self.run(self.git().args(["config", key]), "config")?;
      let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
      // git config exits 1 for an unset key
      if !output.status.success() || value.is_empty() {
         return Err(CommitHelperError::AuthorUnresolvable(format!("{key} is not set")));
      }
      Ok(value)
   }
}

impl CommitBackend for GitCli {
   fn stage_all(&mut self) -> Result<()> {
      let output = self.run(self.git().args(["add", "-A"]), "add")?;
      if !output.status.success() {
         let stderr = String::from_utf8_lossy(&output.stderr);
         return Err(CommitHelperError::GitError(format!("git add -A failed: {stderr}")));
      }
      Ok(())
   }

   fn has_staged_changes(&mut self) -> Result<bool> {
      let output = self.run(self.git().args(["diff", "--cached", "--quiet"]), "diff")?;
      // --quiet: 0 = no differences, 1 = differences, anything else = failure
      match output.status.code() {
         Some(0) => Ok(false),
         Some(1) => Ok(true),
         _ => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(CommitHelperError::GitError(format!("git diff --cached failed: {stderr}")))
         },
      }
   }

   fn resolve_author(&mut self) -> Result<Author> {
      let name = self.config_value("user.name")?;
      let email = self.config_value("user.email")?;
      Ok(Author { name, email })
   }

   fn commit(&mut self, message: &str, author: &Author, options: CommitOptions) -> Result<String> {
      let mut cmd = self.git();
      cmd.arg("commit");
      if options.sign {
         cmd.arg("-S");
      }
      cmd.arg(format!("--author={author}")).args(["-m", message]);
      if options.author_as_committer {
         cmd.env("GIT_COMMITTER_NAME", &author.name)
            .env("GIT_COMMITTER_EMAIL", &author.email);
      }

      let output = self.run(&mut cmd, "commit")?;
      if !output.status.success() {
         let stderr = String::from_utf8_lossy(&output.stderr);
         let stdout = String::from_utf8_lossy(&output.stdout);
         return Err(CommitHelperError::GitError(format!(
            "Git commit failed:\nstderr: {stderr}\nstdout: {stdout}"
         )));
      }

      let output = self.run(self.git().args(["rev-parse", "--short=7", "HEAD"]), "rev-parse")?;
      if !output.status.success() {
         let stderr = String::from_utf8_lossy(&output.stderr);
         return Err(CommitHelperError::GitError(format!("git rev-parse HEAD failed: {stderr}")));
      }
      Ok(short_hash(&String::from_utf8_lossy(&output.stdout)))
   }
}

/// First seven characters of a commit hash.
pub fn short_hash(hash: &str) -> String {
   hash.trim().chars().take(7).collect()
}
