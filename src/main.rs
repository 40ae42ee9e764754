use anyhow::Result;
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;

use pixaloom_term::catalog::{StaticCatalog, load_catalog};
use pixaloom_term::core::Palette;
use pixaloom_term::terminal::{Host, Line, Markup, parse_markup};
use pixaloom_term::{Config, Terminal};

const LOG_ENV: &str = "PIXALOOM_LOG";
// Arrow keys arrive as raw escape sequences on a cooked-mode stdin.
const KEY_UP: &str = "\x1b[A";
const KEY_DOWN: &str = "\x1b[B";

struct BrowserHost {
    site_url: String,
}

impl Host for BrowserHost {
    fn navigate_to(&mut self, path: &str) {
        let url = format!("{}{}", self.site_url.trim_end_matches('/'), path);
        if let Err(err) = webbrowser::open(&url) {
            tracing::warn!("could not open {url}: {err}");
        }
    }

    fn scroll_to_element(&mut self, id: &str) {
        // No page behind a plain terminal.
        tracing::info!("nothing to scroll to for #{id}");
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::load();
    let catalog = match &config.projects {
        Some(path) => load_catalog(path).unwrap_or_else(|err| {
            tracing::warn!("falling back to sample projects: {err:#}");
            StaticCatalog::sample()
        }),
        None => StaticCatalog::sample(),
    };
    let mut host = BrowserHost {
        site_url: config.site_url.clone(),
    };
    let mut terminal = Terminal::with_config(catalog, &config);

    let stdin = std::io::stdin();
    let mut out = std::io::stdout().lock();
    render_all(&mut out, &terminal)?;

    loop {
        let palette = terminal.session().theme.palette();
        write!(
            out,
            "{}{} $ {}{}",
            fg(palette.prompt),
            terminal.session().working_directory,
            RESET,
            terminal.input()
        )?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        match line {
            KEY_UP => {
                terminal.history_previous();
                continue;
            }
            KEY_DOWN => {
                terminal.history_next();
                continue;
            }
            "exit" => break,
            _ => {}
        }

        let pending = format!("{}{}", terminal.input(), line);
        if let Some(partial) = pending.strip_suffix('\t') {
            terminal.set_input(partial);
            terminal.complete_input();
            continue;
        }

        terminal.set_input(pending);
        let submission = terminal.submit_input();
        submission.effect.dispatch(&mut host);
        if submission.cleared {
            write!(out, "\x1b[2J\x1b[H")?;
            render_all(&mut out, &terminal)?;
            continue;
        }
        let palette = terminal.session().theme.palette();
        for line in &submission.lines {
            // The prompt echo is already on screen as the typed line.
            if !matches!(line, Line::PromptEcho { .. }) {
                writeln!(out, "{}", render_line(line, &palette))?;
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

const RESET: &str = "\x1b[0m";

fn fg(color: u32) -> String {
    format!(
        "\x1b[38;2;{};{};{}m",
        (color >> 16) & 0xff,
        (color >> 8) & 0xff,
        color & 0xff
    )
}

fn render_all(out: &mut impl Write, terminal: &Terminal<StaticCatalog>) -> Result<()> {
    let palette = terminal.session().theme.palette();
    for line in terminal.lines() {
        writeln!(out, "{}", render_line(line, &palette))?;
    }
    Ok(())
}

fn render_line(line: &Line, palette: &Palette) -> String {
    match line {
        Line::Banner(text) => format!("{}{text}{RESET}", fg(palette.accent)),
        Line::PromptEcho { cwd, input } => {
            format!("{}{cwd} ${RESET} {input}", fg(palette.prompt))
        }
        Line::Plain(text) => format!("{}{text}{RESET}", fg(palette.foreground)),
        Line::Rich(markup) => parse_markup(markup)
            .into_iter()
            .map(|span| {
                let color = match span.style {
                    Some(Markup::Accent) => palette.accent,
                    Some(Markup::Muted) => palette.muted,
                    None => palette.foreground,
                };
                format!("{}{}{RESET}", fg(color), span.text)
            })
            .collect(),
    }
}
