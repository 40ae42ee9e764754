use serde::{Deserialize, Serialize};

use crate::core::history::History;

pub const HOME_DIR: &str = "~/pixaloom";
pub const ROOT_DIR: &str = "~";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "pixaloom")]
    PixaloomDark,
    #[serde(rename = "dracula")]
    DraculaVariant,
    #[serde(rename = "plain")]
    PlainDark,
}

/// Color tokens a renderer maps scrollback lines and markup tags onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: u32,
    pub foreground: u32,
    pub accent: u32,
    pub muted: u32,
    pub prompt: u32,
    pub error: u32,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::PixaloomDark, Theme::DraculaVariant, Theme::PlainDark];

    pub fn token(self) -> &'static str {
        match self {
            Theme::PixaloomDark => "pixaloom",
            Theme::DraculaVariant => "dracula",
            Theme::PlainDark => "plain",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.token() == token)
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::PixaloomDark => Palette {
                background: 0x0b0d12,
                foreground: 0xd6deeb,
                accent: 0x7c5cff,
                muted: 0x5c6370,
                prompt: 0x22d3ee,
                error: 0xff5370,
            },
            Theme::DraculaVariant => Palette {
                background: 0x282a36,
                foreground: 0xf8f8f2,
                accent: 0xbd93f9,
                muted: 0x6272a4,
                prompt: 0x50fa7b,
                error: 0xff5555,
            },
            Theme::PlainDark => Palette {
                background: 0x111111,
                foreground: 0xe5e5e5,
                accent: 0xffffff,
                muted: 0x8a8a8a,
                prompt: 0xe5e5e5,
                error: 0xe5e5e5,
            },
        }
    }
}

/// Mutable state of one terminal instance.
///
/// Nothing here outlives the owning terminal; a new session always starts
/// from the home directory with an empty history.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub working_directory: String,
    pub theme: Theme,
    pub history: History,
    pub input: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Theme::default(), History::DEFAULT_LIMIT)
    }
}

impl SessionState {
    pub fn new(theme: Theme, history_limit: usize) -> Self {
        Self {
            working_directory: HOME_DIR.to_string(),
            theme,
            history: History::new(history_limit),
            input: String::new(),
        }
    }

    /// Records a submitted command and resets the live input.
    pub fn record_submission(&mut self, command: &str) {
        self.history.push(command);
        self.input.clear();
    }

    pub fn history_previous(&mut self) {
        if let Some(entry) = self.history.older() {
            self.input = entry.to_string();
        }
    }

    pub fn history_next(&mut self) {
        match self.history.newer() {
            Some(entry) => self.input = entry.to_string(),
            None => self.input.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_tokens_resolve_both_ways() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_token(theme.token()), Some(theme));
        }
        assert_eq!(Theme::from_token("Dracula"), None);
        assert_eq!(Theme::from_token(""), None);
    }

    #[test]
    fn theme_deserializes_from_token() {
        let theme: Theme = serde_json::from_str("\"dracula\"").unwrap();
        assert_eq!(theme, Theme::DraculaVariant);
    }

    #[test]
    fn new_session_starts_at_home() {
        let session = SessionState::default();
        assert_eq!(session.working_directory, HOME_DIR);
        assert_eq!(session.theme, Theme::PixaloomDark);
        assert!(session.history.is_empty());
        assert_eq!(session.history.cursor(), None);
    }

    #[test]
    fn submission_clears_input_and_browsing() {
        let mut session = SessionState::default();
        session.record_submission("help");
        session.history_previous();
        assert_eq!(session.input, "help");

        session.record_submission("ls");
        assert_eq!(session.input, "");
        assert_eq!(session.history.cursor(), None);
    }

    #[test]
    fn previous_on_empty_history_keeps_input() {
        let mut session = SessionState::default();
        session.input = "ech".to_string();
        session.history_previous();
        assert_eq!(session.input, "ech");
    }

    #[test]
    fn next_past_newest_clears_input() {
        let mut session = SessionState::default();
        session.record_submission("whoami");
        session.history_previous();
        session.history_next();
        assert_eq!(session.input, "");
        assert_eq!(session.history.cursor(), None);
    }
}
