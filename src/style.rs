//! Terminal styling utilities for consistent CLI output.
//!
//! Styling is carried by a [`Palette`] value rather than global state, so the
//! renderer stays a pure function of its inputs. Respects `NO_COLOR` and
//! terminal capabilities.

use owo_colors::OwoColorize;
pub use supports_color::Stream;

/// Colour switch handed to everything that renders text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
   enabled: bool,
}

impl Palette {
   pub const PLAIN: Self = Self { enabled: false };
   pub const COLORED: Self = Self { enabled: true };

   /// Detect colour support for `stream`.
   pub fn detect(stream: Stream) -> Self {
      // NO_COLOR takes precedence (https://no-color.org/)
      if std::env::var_os("NO_COLOR").is_some() {
         return Self::PLAIN;
      }
      let enabled = supports_color::on(stream).is_some_and(|level| level.has_basic);
      Self { enabled }
   }

   fn paint(self, s: &str, f: impl FnOnce(&str) -> String) -> String {
      if self.enabled { f(s) } else { s.to_string() }
   }

   // === Color Palette ===

   /// Success: checkmarks, completed actions (green + bold).
   pub fn success(self, s: &str) -> String {
      self.paint(s, |s| s.green().bold().to_string())
   }

   /// Warning: non-fatal issues (yellow).
   pub fn warning(self, s: &str) -> String {
      self.paint(s, |s| s.yellow().to_string())
   }

   /// Error: failures, hard errors (red + bold).
   pub fn error(self, s: &str) -> String {
      self.paint(s, |s| s.red().bold().to_string())
   }

   /// Info: informational messages (cyan).
   pub fn info(self, s: &str) -> String {
      self.paint(s, |s| s.cyan().to_string())
   }

   /// Dim: hints and less important details.
   pub fn dim(self, s: &str) -> String {
      self.paint(s, |s| s.dimmed().to_string())
   }

   /// Bold: headers, key values.
   pub fn bold(self, s: &str) -> String {
      self.paint(s, |s| s.bold().to_string())
   }

   /// Section titles (blue + bold + underline).
   pub fn title(self, s: &str) -> String {
      self.paint(s, |s| s.blue().bold().underline().to_string())
   }

   /// Code snippets and examples (gray).
   pub fn code(self, s: &str) -> String {
      self.paint(s, |s| s.bright_black().to_string())
   }

   /// Text under the input cursor (reversed). Without colours only the
   /// end-of-line cursor gets a glyph.
   pub fn cursor(self, s: &str) -> String {
      if self.enabled {
         s.reversed().to_string()
      } else if s == " " {
         "_".to_string()
      } else {
         s.to_string()
      }
   }

   /// Print warning message on stderr.
   pub fn warn(self, msg: &str) {
      eprintln!("{} {}", self.warning(icons::WARNING), self.warning(msg));
   }

   /// Print an info message on stderr.
   pub fn print_info(self, msg: &str) {
      eprintln!("{} {msg}", self.info(icons::INFO));
   }
}

/// Get terminal width, capped at 120 columns.
pub fn term_width() -> usize {
   terminal_size::terminal_size()
      .map_or(80, |(w, _)| w.0 as usize)
      .min(120)
}

// === Unicode Box Drawing ===

/// Box drawing characters.
pub mod box_chars {
   pub const TOP_LEFT: char = '\u{256D}';
   pub const TOP_RIGHT: char = '\u{256E}';
   pub const BOTTOM_LEFT: char = '\u{2570}';
   pub const BOTTOM_RIGHT: char = '\u{256F}';
   pub const HORIZONTAL: char = '\u{2500}';
   pub const VERTICAL: char = '\u{2502}';
}

/// Wrap text to fit within a given width, breaking only at single spaces.
/// Runs of spaces are kept as written.
fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
   let mut lines = Vec::new();
   let mut current = String::new();

   // Splitting on ' ' keeps empty pieces, so re-joining restores the spacing
   for (i, word) in line.split(' ').enumerate() {
      let fits = current.chars().count() + 1 + word.chars().count() <= max_width;
      if i == 0 {
         current.push_str(word);
      } else if fits || current.trim().is_empty() {
         // Indentation or a word too long for any line stays put
         current.push(' ');
         current.push_str(word);
      } else {
         lines.push(current);
         current = word.to_string();
      }
   }

   lines.push(current);
   lines
}

/// Render a box-framed message with word wrapping. `content` must be plain
/// text; the title is styled through `palette`.
pub fn boxed_message(palette: Palette, title: &str, content: &str, width: usize) -> String {
   use box_chars::*;

   let mut out = String::new();
   let inner_width = width.saturating_sub(4); // Account for "│ " and " │"
   let border_width = width.saturating_sub(2);

   out.push(TOP_LEFT);
   if title.is_empty() {
      out.push_str(&HORIZONTAL.to_string().repeat(border_width));
   } else {
      let title_len = title.chars().count();
      let padding = border_width.saturating_sub(title_len + 2);
      let left_pad = padding / 2;
      let right_pad = padding - left_pad;
      out.push_str(&HORIZONTAL.to_string().repeat(left_pad));
      out.push(' ');
      out.push_str(&palette.bold(title));
      out.push(' ');
      out.push_str(&HORIZONTAL.to_string().repeat(right_pad));
   }
   out.push(TOP_RIGHT);
   out.push('\n');

   for line in content.lines() {
      for wrapped_line in wrap_line(line, inner_width) {
         out.push(VERTICAL);
         out.push(' ');
         let line_chars = wrapped_line.chars().count();
         out.push_str(&wrapped_line);
         out.push_str(&" ".repeat(inner_width.saturating_sub(line_chars)));
         out.push(' ');
         out.push(VERTICAL);
         out.push('\n');
      }
   }

   out.push(BOTTOM_LEFT);
   out.push_str(&HORIZONTAL.to_string().repeat(border_width));
   out.push(BOTTOM_RIGHT);

   out
}

// === Status Icons ===

pub mod icons {
   pub const SUCCESS: &str = "\u{2713}";
   pub const WARNING: &str = "\u{26A0}";
   pub const ERROR: &str = "\u{2717}";
   pub const INFO: &str = "\u{2139}";
   pub const BULLET: &str = "\u{2022}";
   pub const PROMPT: &str = "\u{2502}";
}
