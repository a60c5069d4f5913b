//! Terminal driver for the interactive form.
//!
//! Sets up raw mode on stderr (stdout stays free for piping), reads key events
//! one at a time, feeds them to the [`Form`] and redraws after each one.

use std::{
   io::{self, IsTerminal, Write},
   time::Duration,
};

use crossterm::{
   cursor::{Hide, MoveTo, Show},
   event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
   execute, queue,
   style::Print,
   terminal::{
      Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
   },
};

use crate::{
   error::{CommitHelperError, Result},
   form::{Form, FormEvent, FormOutcome, KeyInput},
   render::render_form,
   style::{Palette, term_width},
};

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard;

impl TerminalGuard {
   fn enter(out: &mut impl Write) -> io::Result<Self> {
      enable_raw_mode()?;
      if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
         disable_raw_mode().ok();
         return Err(e);
      }
      Ok(Self)
   }
}

impl Drop for TerminalGuard {
   fn drop(&mut self) {
      execute!(io::stderr(), Show, LeaveAlternateScreen).ok();
      disable_raw_mode().ok();
   }
}

/// Translate a crossterm key event into a form event.
pub fn key_to_event(key: KeyEvent) -> Option<FormEvent> {
   if key.kind == KeyEventKind::Release {
      return None;
   }
   if key.modifiers.contains(KeyModifiers::CONTROL) {
      return match key.code {
         KeyCode::Char('c' | 'C') => Some(FormEvent::Interrupt),
         _ => None,
      };
   }

   let input = match key.code {
      KeyCode::Char(c) => KeyInput::Char(c),
      KeyCode::Enter => KeyInput::Enter,
      KeyCode::Esc => KeyInput::Esc,
      KeyCode::Backspace => KeyInput::Backspace,
      KeyCode::Delete => KeyInput::Delete,
      KeyCode::Left => KeyInput::Left,
      KeyCode::Right => KeyInput::Right,
      KeyCode::Home => KeyInput::Home,
      KeyCode::End => KeyInput::End,
      _ => return None,
   };
   Some(FormEvent::Key(input))
}

/// Wait for the next event. A quiet `blink` period yields a `Tick`.
fn next_event(blink: Duration) -> io::Result<Option<FormEvent>> {
   if !event::poll(blink)? {
      return Ok(Some(FormEvent::Tick));
   }
   match event::read()? {
      Event::Key(key) => Ok(key_to_event(key)),
      // Resize and anything else just trigger a redraw
      _ => Ok(None),
   }
}

fn draw(out: &mut impl Write, form: &Form, palette: Palette) -> io::Result<()> {
   let view = render_form(form, palette, term_width().min(80));
   queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
   for line in view.lines() {
      // Raw mode does not translate \n into \r\n
      queue!(out, Print(line), Print("\r\n"))?;
   }
   out.flush()
}

/// Run a form session on the terminal until it reaches a terminal outcome.
pub fn run_form(form: &mut Form, palette: Palette, blink: Duration) -> Result<FormOutcome> {
   let mut out = io::stderr();
   if !out.is_terminal() {
      return Err(CommitHelperError::NotATerminal);
   }

   let _guard = TerminalGuard::enter(&mut out)?;
   loop {
      draw(&mut out, form, palette)?;
      if let Some(event) = next_event(blink)?
         && form.update(event).is_some()
      {
         break;
      }
   }

   Ok(form.outcome().clone())
}

#[cfg(test)]
mod tests {
   use super::*;

   fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
      KeyEvent::new(code, modifiers)
   }

   #[test]
   fn test_ctrl_c_is_interrupt() {
      assert_eq!(
         key_to_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
         Some(FormEvent::Interrupt)
      );
      assert_eq!(key_to_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
   }

   #[test]
   fn test_plain_keys_map_to_inputs() {
      assert_eq!(
         key_to_event(press(KeyCode::Char('y'), KeyModifiers::NONE)),
         Some(FormEvent::Key(KeyInput::Char('y')))
      );
      assert_eq!(
         key_to_event(press(KeyCode::Char('Y'), KeyModifiers::SHIFT)),
         Some(FormEvent::Key(KeyInput::Char('Y')))
      );
      assert_eq!(
         key_to_event(press(KeyCode::Esc, KeyModifiers::NONE)),
         Some(FormEvent::Key(KeyInput::Esc))
      );
      assert_eq!(
         key_to_event(press(KeyCode::Enter, KeyModifiers::NONE)),
         Some(FormEvent::Key(KeyInput::Enter))
      );
      assert_eq!(key_to_event(press(KeyCode::F(1), KeyModifiers::NONE)), None);
   }

   #[test]
   fn test_key_release_is_ignored() {
      let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
      key.kind = KeyEventKind::Release;
      assert_eq!(key_to_event(key), None);
   }

   #[test]
   fn test_draw_uses_crlf_lines() {
      let form = Form::default();
      let mut buf = Vec::new();
      draw(&mut buf, &form, Palette::PLAIN).unwrap();
      let text = String::from_utf8(buf).unwrap();
      assert!(text.contains("Conventional Commit Builder\r\n"));
      assert!(!text.replace("\r\n", "").contains('\n'));
   }
}
