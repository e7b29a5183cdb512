//! Caret motion and deletion over a borrowed copy of the field value.

/// Working buffer for one update: the value from the props, split into
/// characters, and the caret position within it.
#[derive(Debug, Clone)]
pub(super) struct Editor {
    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    masked: bool,
}

impl Editor {
    pub(super) fn new(value: &str, pos: usize, masked: bool) -> Self {
        let value: Vec<char> = value.chars().collect();
        let pos = pos.min(value.len());
        Self { value, pos, masked }
    }

    pub(super) fn text(&self) -> String {
        self.value.iter().collect()
    }

    fn line_start(&self) -> usize {
        self.value[..self.pos]
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |i| i + 1)
    }

    fn line_end(&self) -> usize {
        self.value[self.pos..]
            .iter()
            .position(|&c| c == '\n')
            .map_or(self.value.len(), |i| self.pos + i)
    }

    pub(super) fn insert(&mut self, runes: &[char]) {
        for (i, &r) in runes.iter().enumerate() {
            self.value.insert(self.pos + i, r);
        }
        self.pos += runes.len();
    }

    pub(super) fn replace_all(&mut self, runes: Vec<char>) {
        self.value = runes;
        self.pos = self.value.len();
    }

    pub(super) fn delete_backward(&mut self) {
        if self.pos > 0 {
            self.value.remove(self.pos - 1);
            self.pos -= 1;
        }
    }

    pub(super) fn delete_forward(&mut self) {
        if self.pos < self.value.len() {
            self.value.remove(self.pos);
        }
    }

    pub(super) fn delete_before_cursor(&mut self) {
        let start = self.line_start();
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    pub(super) fn delete_after_cursor(&mut self) {
        let end = self.line_end();
        self.value.drain(self.pos..end);
    }

    pub(super) fn delete_word_backward(&mut self) {
        if self.pos == 0 {
            return;
        }
        // Word boundaries would leak the shape of a secret.
        if self.masked {
            self.delete_before_cursor();
            return;
        }

        let start = self.word_start();
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    pub(super) fn delete_word_forward(&mut self) {
        if self.pos >= self.value.len() {
            return;
        }
        if self.masked {
            self.delete_after_cursor();
            return;
        }

        let end = self.word_end();
        self.value.drain(self.pos..end);
    }

    pub(super) fn word_backward(&mut self) {
        if self.masked {
            self.pos = self.line_start();
            return;
        }
        self.pos = self.word_start();
    }

    pub(super) fn word_forward(&mut self) {
        if self.masked {
            self.pos = self.line_end();
            return;
        }
        self.pos = self.word_end();
    }

    pub(super) fn left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub(super) fn right(&mut self) {
        if self.pos < self.value.len() {
            self.pos += 1;
        }
    }

    pub(super) fn home(&mut self) {
        self.pos = self.line_start();
    }

    pub(super) fn end(&mut self) {
        self.pos = self.line_end();
    }

    pub(super) fn line_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            return;
        }
        let col = self.pos - start;
        let prev_end = start - 1;
        self.pos = prev_end;
        let prev_start = self.line_start();
        self.pos = (prev_start + col).min(prev_end);
    }

    pub(super) fn line_down(&mut self) {
        let col = self.pos - self.line_start();
        let end = self.line_end();
        if end >= self.value.len() {
            return;
        }
        self.pos = end + 1;
        let next_end = self.line_end();
        self.pos = (self.pos + col).min(next_end);
    }

    /// Start of the word before the caret, skipping whitespace first.
    fn word_start(&self) -> usize {
        let mut i = self.pos;
        while i > 0 && self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !self.value[i - 1].is_whitespace() {
            i -= 1;
        }
        i
    }

    /// End of the word after the caret, skipping whitespace first.
    fn word_end(&self) -> usize {
        let mut i = self.pos;
        while i < self.value.len() && self.value[i].is_whitespace() {
            i += 1;
        }
        while i < self.value.len() && !self.value[i].is_whitespace() {
            i += 1;
        }
        i
    }

    /// Row and column of the caret.
    pub(super) fn row_col(&self) -> (usize, usize) {
        let row = self.value[..self.pos].iter().filter(|&&c| c == '\n').count();
        (row, self.pos - self.line_start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_motion() {
        let mut e = Editor::new("hello big world", 15, false);
        e.word_backward();
        assert_eq!(e.pos, 10);
        e.word_backward();
        assert_eq!(e.pos, 6);
        e.word_forward();
        assert_eq!(e.pos, 9);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut e = Editor::new("hello world", 11, false);
        e.delete_word_backward();
        assert_eq!(e.text(), "hello ");
        assert_eq!(e.pos, 6);
    }

    #[test]
    fn test_masked_word_delete_clears_line() {
        let mut e = Editor::new("hunter two", 10, true);
        e.delete_word_backward();
        assert_eq!(e.text(), "");
    }

    #[test]
    fn test_line_navigation() {
        let mut e = Editor::new("abc\nde\nfghij", 2, false);
        e.line_down();
        assert_eq!(e.row_col(), (1, 2));
        e.line_down();
        assert_eq!(e.row_col(), (2, 2));
        e.end();
        assert_eq!(e.row_col(), (2, 5));
        e.line_up();
        assert_eq!(e.row_col(), (1, 2));
        e.home();
        assert_eq!(e.row_col(), (1, 0));
    }

    #[test]
    fn test_delete_to_line_bounds() {
        let mut e = Editor::new("one\ntwo three", 7, false);
        e.delete_after_cursor();
        assert_eq!(e.text(), "one\ntwo");
        e.delete_before_cursor();
        assert_eq!(e.text(), "one\n");
        assert_eq!(e.pos, 4);
    }

    #[test]
    fn test_position_clamped() {
        let e = Editor::new("ab", 10, false);
        assert_eq!(e.pos, 2);
    }
}
