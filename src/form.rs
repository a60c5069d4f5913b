//! Interactive commit form as an event reducer.
//!
//! The form owns the in-flight [`CommitFields`] and the active [`FormStep`].
//! Each call to [`Form::update`] handles exactly one event and may emit an
//! [`Effect`] that ends the session. No I/O happens here; the terminal driver
//! feeds events in and renders the state out.

use crate::{
   config::HelperConfig,
   error::HeaderError,
   message::assemble,
   text_input::{CharFilter, TextInput},
   types::{CommitFields, FormStep},
   validation::{check_subject, check_type},
};

/// Keystroke-equivalent input, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
   Char(char),
   Enter,
   Esc,
   Backspace,
   Delete,
   Left,
   Right,
   Home,
   End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
   Key(KeyInput),
   /// Cursor blink timer.
   Tick,
   /// Hard cancel (Ctrl+C / SIGINT). Honoured in every state.
   Interrupt,
}

/// Terminal transitions reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
   /// User accepted the preview; carries the assembled message.
   Submit(String),
   Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
   Pending,
   Confirmed(String),
   Cancelled,
}

/// Character limits for the four inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
   pub commit_type: Option<usize>,
   pub scope:       Option<usize>,
   pub subject:     Option<usize>,
   pub body:        Option<usize>,
}

impl Default for FieldLimits {
   fn default() -> Self {
      Self { commit_type: Some(20), scope: Some(50), subject: Some(100), body: None }
   }
}

impl From<&HelperConfig> for FieldLimits {
   fn from(config: &HelperConfig) -> Self {
      Self {
         commit_type: Some(config.type_char_limit),
         scope:       Some(config.scope_char_limit),
         subject:     Some(config.subject_char_limit),
         body:        config.body_char_limit,
      }
   }
}

#[derive(Debug, Clone)]
pub struct Form {
   step:           FormStep,
   inputs:         [TextInput; 4],
   fields:         CommitFields,
   error:          Option<HeaderError>,
   help_visible:   bool,
   cursor_visible: bool,
   outcome:        FormOutcome,
}

impl Default for Form {
   fn default() -> Self {
      Self::new(FieldLimits::default())
   }
}

impl Form {
   pub fn new(limits: FieldLimits) -> Self {
      Self {
         step:           FormStep::Type,
         inputs:         [
            TextInput::new("feat", limits.commit_type),
            TextInput::new("api, auth, db...", limits.scope).with_filter(CharFilter::Word),
            TextInput::new("A short, imperative tense description", limits.subject),
            TextInput::new("Provide a longer description of the change (optional)", limits.body),
         ],
         fields:         CommitFields::default(),
         error:          None,
         help_visible:   false,
         cursor_visible: true,
         outcome:        FormOutcome::Pending,
      }
   }

   pub const fn step(&self) -> FormStep {
      self.step
   }

   pub const fn fields(&self) -> &CommitFields {
      &self.fields
   }

   pub const fn error(&self) -> Option<&HeaderError> {
      self.error.as_ref()
   }

   pub const fn help_visible(&self) -> bool {
      self.help_visible
   }

   pub const fn cursor_visible(&self) -> bool {
      self.cursor_visible
   }

   pub const fn outcome(&self) -> &FormOutcome {
      &self.outcome
   }

   pub const fn is_finished(&self) -> bool {
      !matches!(self.outcome, FormOutcome::Pending)
   }

   /// Text input backing an input step. `Confirm` has none.
   pub fn input(&self, step: FormStep) -> Option<&TextInput> {
      self.inputs.get(step.index())
   }

   /// Message as it would be committed now.
   pub fn message(&self) -> String {
      assemble(&self.fields)
   }

   /// Handle one event. Events after a terminal outcome are ignored.
   pub fn update(&mut self, event: FormEvent) -> Option<Effect> {
      if self.is_finished() {
         return None;
      }

      let key = match event {
         FormEvent::Interrupt => {
            self.outcome = FormOutcome::Cancelled;
            return Some(Effect::Cancel);
         },
         FormEvent::Tick => {
            self.cursor_visible = !self.cursor_visible;
            return None;
         },
         FormEvent::Key(key) => key,
      };
      self.cursor_visible = true;

      if self.help_visible {
         if matches!(key, KeyInput::Char('?') | KeyInput::Esc) {
            self.help_visible = false;
         }
         return None;
      }

      match self.step {
         FormStep::Confirm => self.update_confirm(key),
         _ => {
            self.update_input(key);
            None
         },
      }
   }

   /// Feed a sequence of events, stopping at the first effect.
   pub fn run_events(&mut self, events: impl IntoIterator<Item = FormEvent>) -> Option<Effect> {
      events.into_iter().find_map(|event| self.update(event))
   }

   fn update_input(&mut self, key: KeyInput) {
      let idx = self.step.index();
      match key {
         KeyInput::Char('?') => self.help_visible = true,
         KeyInput::Enter => self.submit_step(),
         KeyInput::Esc => {
            self.error = None;
            self.focus(self.step.prev());
         },
         KeyInput::Char(c) => {
            self.inputs[idx].insert(c);
         },
         KeyInput::Backspace => self.inputs[idx].backspace(),
         KeyInput::Delete => self.inputs[idx].delete(),
         KeyInput::Left => self.inputs[idx].move_left(),
         KeyInput::Right => self.inputs[idx].move_right(),
         KeyInput::Home => self.inputs[idx].home(),
         KeyInput::End => self.inputs[idx].end(),
      }
   }

   fn submit_step(&mut self) {
      let value = self.inputs[self.step.index()].value();
      let stored = match self.step {
         FormStep::Type => check_type(value).map(|t| t.as_str().to_string()),
         FormStep::Subject => check_subject(value).map(str::to_string),
         FormStep::Scope | FormStep::Body => Ok(value.to_string()),
         FormStep::Confirm => return,
      };

      match stored {
         Ok(value) => {
            self.error = None;
            match self.step {
               FormStep::Type => self.fields.commit_type = value,
               FormStep::Scope => self.fields.scope = value,
               FormStep::Subject => self.fields.subject = value,
               FormStep::Body => self.fields.body = value,
               FormStep::Confirm => {},
            }
            self.focus(self.step.next());
         },
         Err(err) => self.error = Some(err),
      }
   }

   fn update_confirm(&mut self, key: KeyInput) -> Option<Effect> {
      match key {
         KeyInput::Char('y' | 'Y') => {
            let message = self.message();
            self.outcome = FormOutcome::Confirmed(message.clone());
            Some(Effect::Submit(message))
         },
         KeyInput::Char('n' | 'N') | KeyInput::Esc => {
            self.error = None;
            self.focus(FormStep::Type);
            None
         },
         KeyInput::Char('?') => {
            self.help_visible = true;
            None
         },
         _ => None,
      }
   }

   fn focus(&mut self, step: FormStep) {
      self.step = step;
      if let Some(input) = self.inputs.get_mut(step.index()) {
         input.end();
      }
   }
}
