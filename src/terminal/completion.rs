use crate::terminal::commands::Command;

/// Completes a partial command name. Only a lone leading token is
/// considered; once an argument has been started there is nothing to do.
///
/// The first command in [`Command::ALL`] order wins, and commands that take
/// an argument complete with a trailing space.
pub fn complete(input: &str) -> Option<String> {
    let prefix = input.trim_start();
    if prefix.is_empty() || prefix.contains(char::is_whitespace) {
        return None;
    }
    let command = Command::ALL
        .into_iter()
        .find(|command| command.name().starts_with(prefix))?;
    let mut completed = command.name().to_string();
    if command.takes_argument() {
        completed.push(' ');
    }
    Some(completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_commands_get_trailing_space() {
        assert_eq!(complete("th").as_deref(), Some("theme "));
        assert_eq!(complete("o").as_deref(), Some("open "));
        assert_eq!(complete("cd").as_deref(), Some("cd "));
    }

    #[test]
    fn plain_commands_complete_bare() {
        assert_eq!(complete("who").as_deref(), Some("whoami"));
        assert_eq!(complete("l").as_deref(), Some("ls"));
    }

    #[test]
    fn first_match_in_priority_order_wins() {
        // "c" could be clear or cd; clear is listed first.
        assert_eq!(complete("c").as_deref(), Some("clear"));
        // "p" only matches projects; "h" only help.
        assert_eq!(complete("p").as_deref(), Some("projects"));
        assert_eq!(complete("h").as_deref(), Some("help"));
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        assert_eq!(complete("   ec").as_deref(), Some("echo "));
    }

    #[test]
    fn no_match_leaves_input_alone() {
        assert_eq!(complete("zz"), None);
        assert_eq!(complete(""), None);
        assert_eq!(complete("Th"), None);
        assert_eq!(complete("theme dr"), None);
    }
}
