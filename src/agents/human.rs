//! A seat driven from a terminal.
//!
//! Commands:
//!
//! ```text
//! play <card> [color]   play a card, naming a color for wilds
//! draw                  draw a card
//! uno                   yell UNO
//! pass                  do nothing this round
//! context               show the table again
//! rules                 show the rules
//! help                  list commands
//! ```

use std::io::{BufRead, Write};

use crate::core::{ActionKind, ActionRequest};
use crate::rules::BroadcastContext;

use super::model::RULES;
use super::{Agent, Reply};

const HELP: &str = "\
Commands:
  play <card> [color]   play a card, naming a color for wilds
  draw                  draw a card
  uno                   yell UNO
  pass                  do nothing this round
  context               show the table again
  rules                 show the rules
  help                  list commands";

/// Prompts a person for each decision.
///
/// End of input counts as passing.
#[derive(Debug)]
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn show_context(&mut self, context: &BroadcastContext) -> std::io::Result<()> {
        writeln!(self.output, "--- {} ---", context.player)?;
        for line in context.lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn ask(&mut self, context: &BroadcastContext) -> std::io::Result<Reply> {
        self.show_context(context)?;
        let choices = if context.is_turn {
            "play, draw, uno, pass"
        } else {
            "uno, pass"
        };

        loop {
            write!(self.output, "[{choices}]> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Reply::Pass);
            }

            match parse_command(&line) {
                Command::Reply(reply) => return Ok(reply),
                Command::Context => self.show_context(context)?,
                Command::Rules => writeln!(self.output, "{RULES}")?,
                Command::Help => writeln!(self.output, "{HELP}")?,
                Command::Unknown(word) => {
                    writeln!(self.output, "Unknown command {word:?}. Type help for commands.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn act(&mut self, context: &BroadcastContext) -> Reply {
        self.ask(context).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "terminal input failed, passing");
            Reply::Pass
        })
    }
}

enum Command {
    Reply(Reply),
    Context,
    Rules,
    Help,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Command::Help;
    };

    match first.to_ascii_lowercase().as_str() {
        // Card and color codes go through as typed so the engine can explain
        // what is wrong with them.
        "play" => match words.next() {
            Some(card) => Command::Reply(Reply::Action(ActionRequest {
                action: ActionKind::Play.as_str().to_string(),
                card: Some(card.to_ascii_uppercase()),
                next_color: words.next().map(str::to_ascii_uppercase),
            })),
            None => Command::Help,
        },
        "draw" => Command::Reply(ActionRequest::draw().into()),
        "uno" => Command::Reply(ActionRequest::yell_uno().into()),
        "pass" => Command::Reply(ActionRequest::nothing().into()),
        "context" => Command::Context,
        "rules" => Command::Rules,
        "help" | "?" => Command::Help,
        other => Command::Unknown(other.to_string()),
    }
}
