//! Text views of the form and of the validation guidelines.
//!
//! Every function here is pure: state and palette in, display text out.

use std::fmt::Write;

use crate::{
   error::HeaderError,
   form::Form,
   style::{Palette, boxed_message, icons},
   text_input::TextInput,
   types::{CommitType, FormStep},
};

const TITLE: &str = "Conventional Commit Builder";

/// One-line descriptions shown in the type help.
const TYPE_DESCRIPTIONS: &[(&str, &str)] = &[
   ("feat", "A new feature for the user."),
   ("fix", "A bug fix for the user."),
   ("build", "Changes to the build system or external dependencies."),
   ("chore", "Routine tasks, maintenance, or dependency updates."),
   ("ci", "Changes to CI configuration files and scripts."),
   ("docs", "Changes to documentation."),
   ("style", "Code style changes (formatting, etc)."),
   ("refactor", "A code change that neither fixes a bug nor adds a feature."),
   ("perf", "A code change that improves performance."),
   ("test", "Adding or correcting tests."),
   ("revert", "Reverts a previous commit."),
];

/// Help overlay text for a step.
pub fn help_text(step: FormStep) -> String {
   match step {
      FormStep::Type => {
         let mut text =
            String::from("The 'type' describes the kind of change you're making.\n\nTypes:\n");
         for (name, description) in TYPE_DESCRIPTIONS {
            writeln!(text, "  {} {name}: {description}", icons::BULLET).ok();
         }
         text
      },
      FormStep::Scope => "The 'scope' provides context for the change.\n\nIt's an optional noun \
                          describing the section of the codebase affected. Letters, digits and \
                          '_' only.\n\nExamples:\n  • (api)\n  • (auth)\n  • (db)"
         .to_string(),
      FormStep::Subject => "The 'subject' is a short, imperative summary of the \
                            change.\n\nRules:\n  • Use the imperative, present tense: \"add\" \
                            not \"added\" or \"adds\".\n  • Don't capitalize the first \
                            letter.\n  • Don't end with a period."
         .to_string(),
      FormStep::Body => "The 'body' provides additional context and details.\n\nUse it to \
                         explain *what* and *why* vs. *how*.\n\nIt's optional."
         .to_string(),
      FormStep::Confirm => "Review the assembled message.\n\n  • y: create the commit.\n  • n \
                            or Esc: go back and edit the fields.\n  • Ctrl+C: quit without \
                            committing."
         .to_string(),
   }
}

fn render_input(input: &TextInput, focused: bool, cursor_visible: bool, palette: Palette) -> String {
   let prompt = if focused {
      format!("{} ", palette.info(icons::PROMPT))
   } else {
      "  ".to_string()
   };

   if input.is_empty() {
      if !focused || !cursor_visible {
         return format!("{prompt}{}", palette.dim(input.placeholder));
      }
      let mut chars = input.placeholder.chars();
      let head = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
      return format!("{prompt}{}{}", palette.cursor(&head), palette.dim(chars.as_str()));
   }

   if !focused {
      return format!("{prompt}{}", input.value());
   }

   let (before, under, after) = input.split_at_cursor();
   if cursor_visible {
      let under = under.map_or_else(|| " ".to_string(), String::from);
      format!("{prompt}{before}{}{after}", palette.cursor(&under))
   } else {
      format!("{prompt}{}", input.value())
   }
}

/// Full-screen view of the form.
pub fn render_form(form: &Form, palette: Palette, width: usize) -> String {
   let mut out = String::new();
   writeln!(out, "{}\n", palette.title(TITLE)).ok();

   if form.help_visible() {
      out.push_str(&boxed_message(palette, "Help", &help_text(form.step()), width));
      writeln!(out, "\n{}", palette.dim("Press '?' or 'esc' to return to the form.")).ok();
      return out;
   }

   for (n, step) in FormStep::INPUTS.into_iter().enumerate() {
      let Some(input) = form.input(step) else { continue };
      let focused = form.step() == step;
      let label = format!("{}. {}:", n + 1, step.label());
      writeln!(
         out,
         "{label:<13}{}",
         render_input(input, focused, form.cursor_visible(), palette)
      )
      .ok();
   }

   if form.step() == FormStep::Confirm {
      writeln!(out, "\n{}", boxed_message(palette, "", &form.message(), width)).ok();
      writeln!(out, "\n{}", palette.success("Write this commit message? (Y/n)")).ok();
   } else {
      if let Some(err) = form.error() {
         writeln!(out, "\n{}", palette.error(&err.to_string())).ok();
      }
      let hints = ["?: help", "Enter: next", "Esc: back", "Ctrl+C: quit"]
         .map(|h| palette.dim(h))
         .join(" · ");
      writeln!(out, "\n{hints}").ok();
   }

   out
}

/// Guidelines block printed after a failed validation.
pub fn render_guidelines(palette: Palette, width: usize) -> String {
   let content = "A valid commit message follows this format:\n  <type>[optional scope]: \
                  <description>\n\nExamples\n  feat(api): implement user authentication\n  \
                  fix: correct a bug in the login flow\n\nFor more details, see: \
                  https://www.conventionalcommits.org";
   boxed_message(palette, "Conventional Commits Guidelines", content, width)
}

/// Error line plus any extra context for a header failure.
pub fn render_header_error(err: &HeaderError, palette: Palette) -> String {
   match err {
      HeaderError::UnknownType(t) => format!(
         "{} '{t}'\n\nAllowed types are:\n  {}",
         palette.error("[ERROR] Invalid commit type:"),
         palette.code(&CommitType::VALID_TYPES.join(", "))
      ),
      other => palette.error(&format!("[ERROR] {other}")),
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::form::{FormEvent, KeyInput};

   fn feed(form: &mut Form, keys: &str) {
      for c in keys.chars() {
         let key = if c == '\n' { KeyInput::Enter } else { KeyInput::Char(c) };
         form.update(FormEvent::Key(key));
      }
   }

   #[test]
   fn test_render_initial_form() {
      let form = Form::default();
      let out = render_form(&form, Palette::PLAIN, 60);
      assert!(out.starts_with(TITLE));
      assert!(out.contains("1. Type:     │ feat\n"));
      assert!(out.contains("2. Scope:      api, auth, db..."));
      assert!(out.contains("4. Body:"));
      assert!(out.contains("?: help · Enter: next · Esc: back · Ctrl+C: quit"));
   }

   #[test]
   fn test_render_shows_inline_error() {
      let mut form = Form::default();
      feed(&mut form, "nope\n");
      let out = render_form(&form, Palette::PLAIN, 60);
      assert!(out.contains("Invalid commit type 'nope'. Choose from: feat, fix"));
   }

   #[test]
   fn test_render_blinked_cursor_hides_glyph() {
      let mut form = Form::default();
      feed(&mut form, "fix");
      let out = render_form(&form, Palette::PLAIN, 60);
      assert!(out.contains("│ fix_\n"));
      form.update(FormEvent::Tick);
      let out = render_form(&form, Palette::PLAIN, 60);
      assert!(out.contains("│ fix\n"));
   }

   #[test]
   fn test_render_confirm_preview() {
      let mut form = Form::default();
      feed(&mut form, "feat\ndb\nadd index\n\n");
      let out = render_form(&form, Palette::PLAIN, 40);
      assert!(out.contains("│ feat(db): add index"));
      assert!(out.contains("Write this commit message? (Y/n)"));
      assert!(!out.contains("Enter: next"));
   }

   #[test]
   fn test_render_preview_keeps_body_spacing() {
      let mut form = Form::default();
      feed(&mut form, "docs\n\nalign table\nname  |  value\n");
      let out = render_form(&form, Palette::PLAIN, 60);
      assert!(out.contains("│ name  |  value"));
   }

   #[test]
   fn test_render_help_overlay_replaces_form() {
      let mut form = Form::default();
      feed(&mut form, "?");
      let out = render_form(&form, Palette::PLAIN, 80);
      assert!(out.contains("The 'type' describes the kind of change"));
      assert!(out.contains("refactor: A code change"));
      assert!(out.contains("Press '?' or 'esc' to return to the form."));
      assert!(!out.contains("1. Type:"));
   }

   #[test]
   fn test_help_text_covers_every_type() {
      let text = help_text(FormStep::Type);
      for t in CommitType::VALID_TYPES {
         assert!(text.contains(&format!("{t}: ")), "missing help for {t}");
      }
   }

   #[test]
   fn test_guidelines_content() {
      let out = render_guidelines(Palette::PLAIN, 80);
      assert!(out.contains("<type>[optional scope]: <description>"));
      assert!(out.contains("feat(api): implement user authentication"));
      assert!(out.contains("fix: correct a bug in the login flow"));
   }

   #[test]
   fn test_header_error_lists_types() {
      let out = render_header_error(&HeaderError::UnknownType("wip".into()), Palette::PLAIN);
      assert!(out.starts_with("[ERROR] Invalid commit type: 'wip'"));
      assert!(out.contains("Allowed types are:"));
      let out = render_header_error(&HeaderError::EmptyMessage, Palette::PLAIN);
      assert_eq!(out, "[ERROR] Commit message cannot be empty.");
   }
}
