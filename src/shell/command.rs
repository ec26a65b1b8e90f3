//! # Commands
//!
//! Everything a shell user can ask for becomes a `Command`.
//! One input line is parsed by clap into exactly one command; the shell then
//! dispatches it against the ledger.
//!
//! ```text
//! "book 1 4 --ramp"  →  parse_line()  →  Command::Book { train: 1, seats: 4, .. }
//! ```

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rail-ledger",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List trains and their free seats
    Trains {
        #[arg(long)]
        json: bool,
    },
    /// Show departure, arrival and time to arrival for every train
    Schedule {
        #[arg(long)]
        json: bool,
    },
    /// Book seats on a train
    Book {
        /// Train number as shown by `trains`
        train: u32,
        /// Number of seats
        seats: u32,
        #[arg(long)]
        ramp: bool,
        #[arg(long)]
        wheelchair: bool,
    },
    /// Cancel a ticket
    Cancel {
        /// Ticket number as shown by `tickets`
        ticket: usize,
    },
    /// List active tickets in booking order
    Tickets {
        #[arg(long)]
        json: bool,
    },
    /// List tickets grouped by train
    Groups,
    /// Show available commands
    Help,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("{0}")]
    Parse(#[from] clap::Error),
}

/// Parses one shell line. Blank lines are `CommandError::Empty`.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Err(CommandError::Empty);
    }
    let parsed = CommandLine::try_parse_from(words)?;
    Ok(parsed.command)
}

/// Help text listing every command.
pub fn usage() -> &'static str {
    "Commands:\n  \
     trains [--json]                          list trains\n  \
     schedule [--json]                        train times and time to arrival\n  \
     book <train> <seats> [--ramp] [--wheelchair]\n  \
     cancel <ticket>                          cancel a ticket by number\n  \
     tickets [--json]                         list tickets\n  \
     groups                                   tickets grouped by train\n  \
     help                                     this text\n  \
     quit                                     leave"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_with_flags() {
        assert_eq!(
            parse_line("book 2 5 --wheelchair").unwrap(),
            Command::Book {
                train: 2,
                seats: 5,
                ramp: false,
                wheelchair: true,
            }
        );
        assert_eq!(
            parse_line("  book 1 1 --ramp --wheelchair ").unwrap(),
            Command::Book {
                train: 1,
                seats: 1,
                ramp: true,
                wheelchair: true,
            }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_line("trains").unwrap(), Command::Trains { json: false });
        assert_eq!(parse_line("tickets --json").unwrap(), Command::Tickets { json: true });
        assert_eq!(parse_line("schedule").unwrap(), Command::Schedule { json: false });
        assert_eq!(parse_line("groups").unwrap(), Command::Groups);
        assert_eq!(parse_line("cancel 3").unwrap(), Command::Cancel { ticket: 3 });
        assert_eq!(parse_line("help").unwrap(), Command::Help);
        assert_eq!(parse_line("quit").unwrap(), Command::Quit);
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_zero_seats_parse_so_the_ledger_can_reject_them() {
        assert_eq!(
            parse_line("book 1 0").unwrap(),
            Command::Book {
                train: 1,
                seats: 0,
                ramp: false,
                wheelchair: false,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_line("   "), Err(CommandError::Empty)));
        assert!(matches!(parse_line("book one 2"), Err(CommandError::Parse(_))));
        assert!(matches!(parse_line("book 1"), Err(CommandError::Parse(_))));
        assert!(matches!(parse_line("teleport"), Err(CommandError::Parse(_))));
    }
}
