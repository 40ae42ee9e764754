use thiserror::Error;

use crate::catalog::ProjectCatalog;
use crate::core::{HOME_DIR, ROOT_DIR, SessionState, Theme};
use crate::terminal::buffer::Line;

/// Built-in commands in completion priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Services,
    Projects,
    Open,
    Goto,
    Clear,
    Theme,
    Whoami,
    Date,
    Echo,
    Ls,
    Cd,
}

impl Command {
    pub const ALL: [Command; 13] = [
        Command::Help,
        Command::About,
        Command::Services,
        Command::Projects,
        Command::Open,
        Command::Goto,
        Command::Clear,
        Command::Theme,
        Command::Whoami,
        Command::Date,
        Command::Echo,
        Command::Ls,
        Command::Cd,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Services => "services",
            Command::Projects => "projects",
            Command::Open => "open",
            Command::Goto => "goto",
            Command::Clear => "clear",
            Command::Theme => "theme",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Echo => "echo",
            Command::Ls => "ls",
            Command::Cd => "cd",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Whether completion should leave room for an argument.
    pub fn takes_argument(self) -> bool {
        matches!(
            self,
            Command::Open | Command::Goto | Command::Theme | Command::Cd | Command::Echo
        )
    }

    fn usage(self) -> &'static str {
        match self {
            Command::Open => "open <slug>",
            Command::Goto => "goto <projects|work|skills|timeline|contact>",
            Command::Theme => "theme <pixaloom|dracula|plain>",
            Command::Echo => "echo <text>",
            Command::Cd => "cd [path]",
            other => other.name(),
        }
    }

    /// Usage as shown in `help`, without the enumerated choices.
    fn usage_short(self) -> &'static str {
        match self {
            Command::Goto => "goto <section>",
            Command::Theme => "theme <name>",
            other => other.usage(),
        }
    }

    fn summary(self) -> &'static str {
        match self {
            Command::Help => "show this message",
            Command::About => "who we are",
            Command::Services => "what we build",
            Command::Projects => "list selected work",
            Command::Open => "open a project page",
            Command::Goto => "jump to a section of the page",
            Command::Clear => "clear the screen",
            Command::Theme => "switch the color theme",
            Command::Whoami => "print the current user",
            Command::Date => "print the current date",
            Command::Echo => "print text",
            Command::Ls => "list files",
            Command::Cd => "change directory",
        }
    }
}

/// Action the host performs on behalf of a command. Issued, never awaited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Effect {
    #[default]
    None,
    Navigate {
        path: String,
    },
    Scroll {
        id: String,
    },
}

/// Result of running one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    pub output: Vec<Line>,
    pub clear: bool,
    pub effect: Effect,
}

impl Execution {
    fn lines(output: Vec<Line>) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    NotFound,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{0}: command not found")]
    UnknownCommand(String),
    #[error("project not found: {0}")]
    UnknownProject(String),
    #[error("cd: no such file or directory: {0}")]
    NoSuchDirectory(String),
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Usage(_) => ErrorKind::Usage,
            CommandError::UnknownCommand(_)
            | CommandError::UnknownProject(_)
            | CommandError::NoSuchDirectory(_) => ErrorKind::NotFound,
        }
    }
}

const SECTIONS: &[(&str, &str)] = &[
    ("projects", "projects"),
    ("work", "projects"),
    ("skills", "skills"),
    ("timeline", "timeline"),
    ("contact", "contact"),
];

const LISTING: &str = "about.md  services.md  projects/  contact.txt  resume.pdf";

/// Runs terminal input against a session. Every path ends in output lines;
/// failures are rendered, never returned.
pub struct Interpreter<C> {
    catalog: C,
    identity: String,
}

impl<C: ProjectCatalog> Interpreter<C> {
    pub fn new(catalog: C, identity: impl Into<String>) -> Self {
        Self {
            catalog,
            identity: identity.into(),
        }
    }

    pub fn execute(&self, raw_input: &str, session: &mut SessionState) -> Execution {
        let input = raw_input.trim();
        let mut tokens = input.split_whitespace();
        let Some(name) = tokens.next() else {
            return Execution::default();
        };
        let args: Vec<&str> = tokens.collect();
        // Free text after the command, spacing preserved.
        let text = input
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim_start())
            .unwrap_or("");

        let result = match Command::parse(name) {
            Some(command) => self.run(command, &args, text, session),
            None => Err(CommandError::UnknownCommand(name.to_string())),
        };
        match result {
            Ok(execution) => {
                tracing::debug!(command = name, effect = ?execution.effect, "executed");
                execution
            }
            Err(err) => {
                tracing::debug!(command = name, kind = ?err.kind(), "{err}");
                Execution::lines(vec![Line::plain(err.to_string())])
            }
        }
    }

    fn run(
        &self,
        command: Command,
        args: &[&str],
        text: &str,
        session: &mut SessionState,
    ) -> Result<Execution, CommandError> {
        match command {
            Command::Help => Ok(Execution::lines(help_lines())),
            Command::About => Ok(Execution::lines(about_lines())),
            Command::Services => Ok(Execution::lines(services_lines())),
            Command::Projects => Ok(Execution::lines(self.project_lines())),
            Command::Open => self.open(args),
            Command::Goto => goto(args),
            Command::Clear => Ok(Execution {
                clear: true,
                ..Execution::default()
            }),
            Command::Theme => set_theme(args, session),
            Command::Whoami => Ok(Execution::lines(vec![Line::plain(&self.identity)])),
            Command::Date => Ok(Execution::lines(vec![Line::plain(current_date())])),
            Command::Echo => Ok(Execution::lines(vec![Line::plain(text)])),
            Command::Ls => Ok(Execution::lines(vec![Line::plain(LISTING)])),
            Command::Cd => change_directory(args, session),
        }
    }

    fn project_lines(&self) -> Vec<Line> {
        let projects = self.catalog.list_all();
        if projects.is_empty() {
            return vec![Line::plain("No projects found.")];
        }
        projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                Line::plain(format!(
                    "{:02}. {}  (open {})",
                    i + 1,
                    project.name,
                    project.slug
                ))
            })
            .collect()
    }

    fn open(&self, args: &[&str]) -> Result<Execution, CommandError> {
        let Some(slug) = args.first() else {
            return Err(CommandError::Usage(Command::Open.usage()));
        };
        let project = self
            .catalog
            .find_by_slug(slug)
            .ok_or_else(|| CommandError::UnknownProject(slug.to_string()))?;
        let path = format!("/work/{}", project.slug);
        Ok(Execution {
            output: vec![Line::plain(format!("opening {path}"))],
            clear: false,
            effect: Effect::Navigate { path },
        })
    }
}

fn goto(args: &[&str]) -> Result<Execution, CommandError> {
    let id = args
        .first()
        .and_then(|section| SECTIONS.iter().find(|(keyword, _)| keyword == section))
        .map(|(_, id)| *id)
        .ok_or(CommandError::Usage(Command::Goto.usage()))?;
    Ok(Execution {
        output: vec![Line::plain(format!("scrolling to #{id}"))],
        clear: false,
        effect: Effect::Scroll { id: id.to_string() },
    })
}

fn set_theme(args: &[&str], session: &mut SessionState) -> Result<Execution, CommandError> {
    let theme = args
        .first()
        .and_then(|token| Theme::from_token(token))
        .ok_or(CommandError::Usage(Command::Theme.usage()))?;
    session.theme = theme;
    Ok(Execution::lines(vec![Line::plain(format!(
        "theme set to {}",
        theme.token()
    ))]))
}

fn change_directory(args: &[&str], session: &mut SessionState) -> Result<Execution, CommandError> {
    let target = match args.first().copied() {
        None | Some("~") => HOME_DIR,
        Some("..") => ROOT_DIR,
        Some(other) => return Err(CommandError::NoSuchDirectory(other.to_string())),
    };
    session.working_directory = target.to_string();
    Ok(Execution::default())
}

fn current_date() -> String {
    chrono::Local::now()
        .format("%a %b %d %Y %H:%M:%S GMT%z")
        .to_string()
}

fn help_lines() -> Vec<Line> {
    let mut lines = vec![Line::rich("[accent]Available commands[/]")];
    lines.extend(Command::ALL.into_iter().map(|command| {
        Line::rich(format!(
            "  [accent]{:<16}[/]{}",
            command.usage_short(),
            command.summary()
        ))
    }));
    lines.push(Line::rich("[muted]Tab completes a command, arrows walk history.[/]"));
    lines
}

fn about_lines() -> Vec<Line> {
    vec![
        Line::rich("[accent]Pixaloom[/] is a one-person studio for product design and engineering."),
        Line::plain("We build fast websites, tools and small games with care for detail."),
        Line::rich("[muted]Based remotely, working with teams everywhere.[/]"),
    ]
}

fn services_lines() -> Vec<Line> {
    vec![
        Line::rich("[accent]Services[/]"),
        Line::plain("  - Web apps and marketing sites"),
        Line::plain("  - Design systems and UI engineering"),
        Line::plain("  - Interactive experiences and prototypes"),
        Line::plain("  - Technical consulting and code reviews"),
    ]
}
