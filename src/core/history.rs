use std::collections::VecDeque;

/// Submitted commands, most recent first, with a readline-style cursor.
///
/// The cursor is `None` while the user is not browsing. Stepping older moves
/// it toward the back of the deque; stepping newer moves it back toward the
/// front and finally off the list.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

impl History {
    pub const DEFAULT_LIMIT: usize = 2000;

    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    pub fn push(&mut self, command: &str) {
        self.entries.push_front(command.to_string());
        if self.entries.len() > self.limit {
            self.entries.pop_back();
        }
        self.cursor = None;
    }

    /// Steps one entry back in time, stopping at the oldest entry.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        let next = match self.cursor {
            None => 0,
            Some(index) => (index + 1).min(last),
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Steps one entry forward in time. Returns `None` once browsing ends.
    pub fn newer(&mut self) -> Option<&str> {
        self.cursor = match self.cursor {
            None | Some(0) => None,
            Some(index) => Some(index - 1),
        };
        self.cursor
            .and_then(|index| self.entries.get(index))
            .map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(commands: &[&str]) -> History {
        let mut history = History::default();
        for command in commands {
            history.push(command);
        }
        history
    }

    #[test]
    fn entries_are_most_recent_first() {
        let history = history_of(&["a", "b", "c"]);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["c", "b", "a"]);
    }

    #[test]
    fn round_trip_is_symmetric() {
        let mut history = history_of(&["a", "b", "c"]);
        assert_eq!(history.older(), Some("c"));
        assert_eq!(history.older(), Some("b"));
        assert_eq!(history.older(), Some("a"));
        assert_eq!(history.newer(), Some("b"));
        assert_eq!(history.newer(), Some("c"));
        assert_eq!(history.newer(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn older_clamps_at_oldest_entry() {
        let mut history = history_of(&["a", "b"]);
        history.older();
        history.older();
        assert_eq!(history.older(), Some("a"));
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn newer_without_browsing_stays_idle() {
        let mut history = history_of(&["a"]);
        assert_eq!(history.newer(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn empty_history_has_nothing_to_browse() {
        let mut history = History::default();
        assert_eq!(history.older(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn push_resets_cursor() {
        let mut history = history_of(&["a", "b"]);
        history.older();
        history.push("c");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.older(), Some("c"));
    }

    #[test]
    fn limit_drops_oldest_entries() {
        let mut history = History::new(2);
        history.push("a");
        history.push("b");
        history.push("c");
        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["c", "b"]);
    }

    #[test]
    fn duplicate_submissions_are_kept() {
        let history = history_of(&["ls", "ls"]);
        assert_eq!(history.len(), 2);
    }
}
