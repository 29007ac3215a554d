/// Longest count the entry field accepts.
const MAX_DIGITS: usize = 6;

/// Pending numeric entry for the "select first N rows" popover.
#[derive(Debug, Clone, Default)]
pub struct BulkSelectPopover {
    pub visible: bool,
    pub buffer: String,
}

impl BulkSelectPopover {
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide the popover. The pending entry is kept, like a dismissed overlay.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Append a digit. Anything else is ignored.
    pub fn push(&mut self, ch: char) {
        if ch.is_ascii_digit() && self.buffer.len() < MAX_DIGITS {
            self.buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Parsed entry, `None` while the field is empty.
    pub fn value(&self) -> Option<i64> {
        self.buffer.parse().ok()
    }

    /// Whether the current entry is more than the page can satisfy.
    pub fn exceeds(&self, page_len: usize) -> bool {
        self.value()
            .is_some_and(|n| usize::try_from(n).map_or(true, |n| n > page_len))
    }

    /// Accept the entry if it is a positive count: clears the field, hides
    /// the popover and returns the count. Otherwise nothing changes.
    pub fn submit(&mut self) -> Option<i64> {
        let n = self.value().filter(|&n| n > 0)?;
        self.buffer.clear();
        self.visible = false;
        Some(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_submission_is_rejected() {
        let mut p = BulkSelectPopover::default();
        p.open();
        assert_eq!(p.submit(), None);
        assert!(p.visible);
    }

    #[test]
    fn zero_submission_is_rejected() {
        let mut p = BulkSelectPopover::default();
        p.open();
        p.push('0');
        assert_eq!(p.submit(), None);
        assert!(p.visible);
        assert_eq!(p.buffer, "0");
    }

    #[test]
    fn accepted_submission_clears_and_hides() {
        let mut p = BulkSelectPopover::default();
        p.open();
        p.push('1');
        p.push('2');
        assert_eq!(p.submit(), Some(12));
        assert!(!p.visible);
        assert!(p.buffer.is_empty());
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut p = BulkSelectPopover::default();
        for ch in "-3x.5".chars() {
            p.push(ch);
        }
        assert_eq!(p.buffer, "35");
    }

    #[test]
    fn entry_length_is_bounded() {
        let mut p = BulkSelectPopover::default();
        for _ in 0..20 {
            p.push('9');
        }
        assert_eq!(p.value(), Some(999_999));
    }

    #[test]
    fn exceeds_page_length() {
        let mut p = BulkSelectPopover::default();
        assert!(!p.exceeds(20));
        p.push('2');
        p.push('0');
        assert!(!p.exceeds(20));
        p.push('0');
        assert!(p.exceeds(20));
    }

    #[test]
    fn dismiss_keeps_pending_entry() {
        let mut p = BulkSelectPopover::default();
        p.open();
        p.push('4');
        p.dismiss();
        assert!(!p.visible);
        assert_eq!(p.value(), Some(4));
    }
}
