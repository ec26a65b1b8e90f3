//! # Shell Adapter
//!
//! Line-oriented front end over the ledger: reads one command per line,
//! writes a text reply. This is the only module that does I/O; the core
//! never prints.
//!
//! ```text
//! stdin line → parse_line() → Command → Shell::execute() → Reply → stdout
//! ```

pub mod command;
pub mod render;

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::core::error::ErrorKind;
use crate::core::ledger::Ledger;
use crate::core::schedule::Clock;
use crate::core::ticket::Accessibility;
use crate::core::train::TrainId;
use crate::shell::command::{Command, CommandError, parse_line, usage};

/// Whether the shell keeps reading after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub flow: Flow,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            flow: Flow::Continue,
        }
    }
}

pub struct Shell<'a, C: Clock> {
    ledger: &'a Ledger,
    clock: C,
}

impl<'a, C: Clock> Shell<'a, C> {
    pub fn new(ledger: &'a Ledger, clock: C) -> Self {
        Self { ledger, clock }
    }

    /// Replies to one input line. Blank lines get no reply.
    pub fn handle_line(&self, line: &str) -> Option<Reply> {
        match parse_line(line) {
            Ok(command) => Some(self.execute(command)),
            Err(CommandError::Empty) => None,
            Err(e) => {
                debug!("Unparsable command {:?}: {}", line, e);
                let message = e.to_string();
                Some(Reply::say(format!(
                    "{}\nType `help` for commands.",
                    message.trim_end()
                )))
            }
        }
    }

    pub fn execute(&self, command: Command) -> Reply {
        debug!("Command: {:?}", command);
        match command {
            Command::Trains { json } => {
                let trains = self.ledger.list_trains();
                Reply::say(if json { render::json(&trains) } else { render::trains(&trains) })
            }
            Command::Schedule { json } => {
                let board = self.ledger.schedule(&self.clock);
                Reply::say(if json { render::json(&board) } else { render::schedule(&board) })
            }
            Command::Book { train, seats, ramp, wheelchair } => {
                self.book(TrainId(train), seats, Accessibility::new(ramp, wheelchair))
            }
            Command::Cancel { ticket } => self.cancel(ticket),
            Command::Tickets { json } => {
                let tickets = self.ledger.list_tickets();
                Reply::say(if json { render::json(&tickets) } else { render::tickets(&tickets) })
            }
            Command::Groups => Reply::say(render::groups(
                &self.ledger.list_trains(),
                &self.ledger.group_by_train(),
            )),
            Command::Help => Reply::say(usage()),
            Command::Quit => Reply {
                text: "Goodbye.".to_string(),
                flow: Flow::Quit,
            },
        }
    }

    fn book(&self, train: TrainId, seats: u32, accessibility: Accessibility) -> Reply {
        match self.ledger.book_ticket(train, seats, accessibility) {
            Ok(ticket) => Reply::say(format!("{}\n{}", render::BOOKED, ticket)),
            Err(e) if e.kind() == ErrorKind::Validation => Reply::say(render::BOOKING_INVALID),
            Err(e) => Reply::say(format!("{}\n{}", render::BOOKING_FAILED, e)),
        }
    }

    /// `position` is 1-based, as printed by `tickets`.
    fn cancel(&self, position: usize) -> Reply {
        let tickets = self.ledger.list_tickets();
        let Some(ticket) = position.checked_sub(1).and_then(|i| tickets.get(i)) else {
            return Reply::say(render::SELECT_TICKET);
        };
        match self.ledger.cancel_ticket(ticket) {
            Ok(removed) => Reply::say(format!("{}\n{}", render::CANCELLED, removed)),
            Err(e) => Reply::say(format!("{}\n{}", render::CANCEL_FAILED, e)),
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        info!("Shell started");
        writeln!(output, "{}", usage())?;
        for line in input.lines() {
            let line = line?;
            let Some(reply) = self.handle_line(&line) else {
                continue;
            };
            writeln!(output, "{}", reply.text)?;
            output.flush()?;
            if reply.flow == Flow::Quit {
                break;
            }
        }
        info!("Shell stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::FixedClock;
    use crate::test_support::{hm, test_ledger};

    fn reply(shell: &Shell<'_, FixedClock>, line: &str) -> String {
        shell.handle_line(line).unwrap().text
    }

    #[test]
    fn test_book_and_cancel_through_shell() {
        let ledger = test_ledger();
        let shell = Shell::new(&ledger, FixedClock(hm(12, 0)));

        let text = reply(&shell, "book 1 5 --ramp");
        assert!(text.starts_with(render::BOOKED));
        assert!(text.ends_with("Ticket for Train 1 - 5 seat(s)"));
        assert_eq!(ledger.available_seats(TrainId(1)), Ok(95));

        let text = reply(&shell, "cancel 1");
        assert!(text.starts_with(render::CANCELLED));
        assert_eq!(ledger.available_seats(TrainId(1)), Ok(100));
        assert_eq!(ledger.ticket_count(), 0);
    }

    #[test]
    fn test_booking_failures_use_distinct_messages() {
        let ledger = test_ledger();
        let shell = Shell::new(&ledger, FixedClock(hm(12, 0)));

        assert_eq!(reply(&shell, "book 1 0"), render::BOOKING_INVALID);
        assert_eq!(reply(&shell, "book 7 1"), render::BOOKING_INVALID);
        assert!(reply(&shell, "book 1 101").starts_with(render::BOOKING_FAILED));
        assert_eq!(ledger.ticket_count(), 0);
    }

    #[test]
    fn test_cancel_requires_a_listed_ticket() {
        let ledger = test_ledger();
        let shell = Shell::new(&ledger, FixedClock(hm(12, 0)));
        assert_eq!(reply(&shell, "cancel 1"), render::SELECT_TICKET);
        assert_eq!(reply(&shell, "cancel 0"), render::SELECT_TICKET);
    }

    #[test]
    fn test_schedule_uses_shell_clock() {
        let ledger = test_ledger();
        let shell = Shell::new(&ledger, FixedClock(hm(20, 0)));
        let text = reply(&shell, "schedule");
        assert!(text.starts_with("Train Schedule:"));
        assert!(text.contains(
            "Train 2 - From Chicago to Madison (100 seats available) \
             (Departure Time: 00:56, Arrival Time: 21:00, Time Difference: 1 hours 0 minutes 0 seconds)"
        ));
    }

    #[test]
    fn test_blank_and_bad_lines() {
        let ledger = test_ledger();
        let shell = Shell::new(&ledger, FixedClock(hm(12, 0)));
        assert!(shell.handle_line("").is_none());
        assert!(reply(&shell, "fly 1").contains("Type `help` for commands."));
    }

    #[test]
    fn test_run_stops_at_quit() {
        let ledger = test_ledger();
        let shell = Shell::new(&ledger, FixedClock(hm(12, 0)));
        let input = "book 2 3\n\ntickets\nquit\nbook 2 3\n";
        let mut output = Vec::new();
        shell.run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. Ticket for Train 2 - 3 seat(s)"));
        assert!(text.trim_end().ends_with("Goodbye."));
        // The line after quit is never read
        assert_eq!(ledger.ticket_count(), 1);
    }
}
