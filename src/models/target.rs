//! The text buffer the keyboard writes into.

/// An editable text buffer with the cursor at the end.
///
/// Offsets passed to [`TargetField::delete_range`] count characters, not bytes.
pub trait TargetField {
    /// Current buffer content.
    fn current_text(&self) -> String;

    /// Appends text at the end of the buffer.
    fn insert_at_end(&mut self, text: &str);

    /// Removes the characters in `start..end`.
    fn delete_range(&mut self, start: usize, end: usize);

    /// Whether the field can still be edited. A destroyed field returns `false`.
    fn exists(&self) -> bool;
}
