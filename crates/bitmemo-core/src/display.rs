//! Status text display

/// Three line text output
pub trait TextDisplay {
    /// Replace everything on screen with `lines`
    fn show(&mut self, lines: [&str; 3]);
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    fn show(&mut self, lines: [&str; 3]) {
        T::show(self, lines);
    }
}

pub(crate) const WELCOME: [&str; 3] = ["BINARY", "MEMORY", "GAME"];
pub(crate) const MEMORIZE_TITLE: &str = "Memorize:";
pub(crate) const MEMORIZE_HINT: &str = "5 sec...";
pub(crate) const PROMPT: [&str; 3] = ["Enter the", "sequence", "  A 0   B 1"];
pub(crate) const SUCCESS: [&str; 3] = ["Well done!", "Sequence", "correct!"];
pub(crate) const FAILURE: [&str; 3] = ["Wrong", "Try", "again."];
pub(crate) const EMPTY: [&str; 3] = ["", "", ""];
