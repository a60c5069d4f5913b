//! Single-line editable text buffer with a character cursor.

/// Which characters an input admits as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharFilter {
   /// Any printable character.
   Printable,
   /// ASCII letters, digits and `_`.
   Word,
}

impl CharFilter {
   fn admits(self, c: char) -> bool {
      match self {
         Self::Printable => !c.is_control(),
         Self::Word => crate::validation::is_word_char(c),
      }
   }
}

#[derive(Debug, Clone)]
pub struct TextInput {
   value:           String,
   /// Cursor position in chars, `0..=len`.
   cursor:          usize,
   pub placeholder: &'static str,
   pub char_limit:  Option<usize>,
   pub filter:      CharFilter,
}

impl TextInput {
   pub const fn new(placeholder: &'static str, char_limit: Option<usize>) -> Self {
      Self {
         value: String::new(),
         cursor: 0,
         placeholder,
         char_limit,
         filter: CharFilter::Printable,
      }
   }

   pub const fn with_filter(mut self, filter: CharFilter) -> Self {
      self.filter = filter;
      self
   }

   pub fn value(&self) -> &str {
      &self.value
   }

   pub const fn cursor(&self) -> usize {
      self.cursor
   }

   pub fn len(&self) -> usize {
      self.value.chars().count()
   }

   pub fn is_empty(&self) -> bool {
      self.value.is_empty()
   }

   /// Replace the contents, truncating to the limit, cursor at the end.
   #[cfg(test)]
   pub fn set_value(&mut self, value: &str) {
      let limit = self.char_limit.unwrap_or(usize::MAX);
      self.value = value
         .chars()
         .filter(|&c| self.filter.admits(c))
         .take(limit)
         .collect();
      self.cursor = self.len();
   }

   fn byte_offset(&self, char_idx: usize) -> usize {
      self
         .value
         .char_indices()
         .nth(char_idx)
         .map_or(self.value.len(), |(i, _)| i)
   }

   /// Insert at the cursor. Returns false when the char was refused.
   pub fn insert(&mut self, c: char) -> bool {
      if !self.filter.admits(c) {
         return false;
      }
      if self.char_limit.is_some_and(|limit| self.len() >= limit) {
         return false;
      }
      let at = self.byte_offset(self.cursor);
      self.value.insert(at, c);
      self.cursor += 1;
      true
   }

   /// Delete the char before the cursor.
   pub fn backspace(&mut self) {
      if self.cursor == 0 {
         return;
      }
      self.cursor -= 1;
      let at = self.byte_offset(self.cursor);
      self.value.remove(at);
   }

   /// Delete the char under the cursor.
   pub fn delete(&mut self) {
      if self.cursor < self.len() {
         let at = self.byte_offset(self.cursor);
         self.value.remove(at);
      }
   }

   pub const fn move_left(&mut self) {
      self.cursor = self.cursor.saturating_sub(1);
   }

   pub fn move_right(&mut self) {
      self.cursor = (self.cursor + 1).min(self.len());
   }

   pub const fn home(&mut self) {
      self.cursor = 0;
   }

   pub fn end(&mut self) {
      self.cursor = self.len();
   }

   /// Contents split around the cursor: (before, under cursor, after).
   pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
      let at = self.byte_offset(self.cursor);
      let (before, rest) = self.value.split_at(at);
      let mut chars = rest.chars();
      let under = chars.next();
      (before, under, chars.as_str())
   }
}
