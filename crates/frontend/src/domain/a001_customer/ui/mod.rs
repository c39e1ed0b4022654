pub mod autocomplete;
pub mod list;

/// Move the keyboard highlight by `delta`, clamped to `[-1, len - 1]`
/// (-1 means "nothing highlighted").
pub fn move_highlight(current: i32, len: usize, delta: i32) -> i32 {
    let max = len as i32 - 1;
    (current + delta).clamp(-1, max.max(-1))
}

/// Whether a query is long enough to hit the backend.
pub fn is_searchable(query: &str, min_len: usize) -> bool {
    query.trim().chars().count() >= min_len
}

/// Immediate reaction to a keystroke, before any debounced request fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    /// Too short: hide suggestions without a request
    Clear,
    /// Search for the trimmed query once the debounce elapses
    Search(String),
}

impl Keystroke {
    pub fn classify(raw: &str, min_len: usize) -> Self {
        let query = raw.trim();
        if is_searchable(query, min_len) {
            Keystroke::Search(query.to_string())
        } else {
            Keystroke::Clear
        }
    }

    /// The spinner covers the debounce wait as well as the request itself.
    pub fn shows_spinner(&self) -> bool {
        matches!(self, Keystroke::Search(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_highlight_clamps() {
        assert_eq!(move_highlight(-1, 3, 1), 0);
        assert_eq!(move_highlight(2, 3, 1), 2);
        assert_eq!(move_highlight(0, 3, -1), -1);
        assert_eq!(move_highlight(-1, 3, -1), -1);
        assert_eq!(move_highlight(-1, 0, 1), -1);
    }

    #[test]
    fn test_is_searchable_uses_trimmed_length() {
        assert!(!is_searchable("a", 2));
        assert!(!is_searchable("  a  ", 2));
        assert!(is_searchable("ra", 2));
        assert!(is_searchable("राम", 2));
    }

    #[test]
    fn test_spinner_shows_from_first_searchable_keystroke() {
        let key = Keystroke::classify(" ra ", 2);
        assert_eq!(key, Keystroke::Search("ra".into()));
        assert!(key.shows_spinner());

        let key = Keystroke::classify("r", 2);
        assert_eq!(key, Keystroke::Clear);
        assert!(!key.shows_spinner());
    }
}
