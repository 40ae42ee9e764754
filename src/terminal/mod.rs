pub mod buffer;
pub mod commands;
pub mod completion;

pub use buffer::{Line, Markup, Span, TerminalBuffer, parse_markup};
pub use commands::{Command, CommandError, Effect, ErrorKind, Execution, Interpreter};
pub use completion::complete;

use crate::catalog::ProjectCatalog;
use crate::config::Config;
use crate::core::SessionState;

/// Side effects a command can ask for. Implementations must tolerate targets
/// that do not exist.
pub trait Host {
    fn navigate_to(&mut self, path: &str);
    fn scroll_to_element(&mut self, id: &str);
}

impl Effect {
    pub fn dispatch(&self, host: &mut dyn Host) {
        match self {
            Effect::None => {}
            Effect::Navigate { path } => host.navigate_to(path),
            Effect::Scroll { id } => host.scroll_to_element(id),
        }
    }
}

/// What one submission did to the scrollback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// Lines appended, prompt echo first. Empty when the scrollback was reset.
    pub lines: Vec<Line>,
    pub cleared: bool,
    pub effect: Effect,
}

/// One terminal instance: session, scrollback and the interpreter behind it.
pub struct Terminal<C> {
    session: SessionState,
    buffer: TerminalBuffer,
    interpreter: Interpreter<C>,
}

impl<C: ProjectCatalog> Terminal<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, &Config::default())
    }

    pub fn with_config(catalog: C, config: &Config) -> Self {
        Self {
            session: SessionState::new(config.theme, config.history_limit),
            buffer: TerminalBuffer::new(config.banner.clone(), config.max_scrollback),
            interpreter: Interpreter::new(catalog, config.identity.clone()),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn lines(&self) -> &[Line] {
        self.buffer.get_lines()
    }

    pub fn input(&self) -> &str {
        &self.session.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.session.input = input.into();
    }

    /// Submits the live input buffer.
    pub fn submit_input(&mut self) -> Submission {
        let input = std::mem::take(&mut self.session.input);
        self.submit(&input)
    }

    pub fn submit(&mut self, raw_input: &str) -> Submission {
        let command = raw_input.trim();
        if command.is_empty() {
            self.session.input.clear();
            return Submission::default();
        }

        let echo = Line::PromptEcho {
            cwd: self.session.working_directory.clone(),
            input: raw_input.to_string(),
        };
        self.session.record_submission(command);
        let execution = self.interpreter.execute(command, &mut self.session);

        if execution.clear {
            self.buffer.reset();
            return Submission {
                lines: Vec::new(),
                cleared: true,
                effect: execution.effect,
            };
        }

        let mut lines = Vec::with_capacity(execution.output.len() + 1);
        lines.push(echo);
        lines.extend(execution.output);
        self.buffer.extend(lines.iter().cloned());
        Submission {
            lines,
            cleared: false,
            effect: execution.effect,
        }
    }

    /// Submits and hands any requested side effect to `host`.
    pub fn submit_with_host(&mut self, raw_input: &str, host: &mut dyn Host) -> Submission {
        let submission = self.submit(raw_input);
        submission.effect.dispatch(host);
        submission
    }

    pub fn history_previous(&mut self) {
        self.session.history_previous();
    }

    pub fn history_next(&mut self) {
        self.session.history_next();
    }

    /// Applies tab completion to the live input. Returns whether it changed.
    pub fn complete_input(&mut self) -> bool {
        match complete(&self.session.input) {
            Some(completed) if completed != self.session.input => {
                self.session.input = completed;
                true
            }
            _ => false,
        }
    }
}
