//! Interactive assistant.
//!
//! [`AssistantBot`] turns one line of text into one reply; [`run_session`]
//! drives it over any reader/writer pair until the user leaves.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{input_error, AssistantBot, Reply};

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Prompt printed before every command.
pub const COMMAND_PROMPT: &str = "Enter a command: ";

/// Prompt printed before reading a search query.
pub const SEARCH_PROMPT: &str = "Enter search query: ";

/// A line consisting of only this token saves and ends the session.
pub const EXIT_TOKEN: &str = ".";

/// Run the read-eval-print loop until the exit token, an exit command or end
/// of input. The address book is saved on every way out.
///
/// # Returns
/// An error if reading, writing or saving fails
pub fn run_session<R: BufRead, W: Write>(
    bot: &mut AssistantBot,
    mut input: R,
    mut output: W,
) -> Result<()> {
    loop {
        let Some(line) = prompt(&mut input, &mut output, COMMAND_PROMPT)? else {
            info!("End of input, saving and exiting");
            bot.save()?;
            break;
        };

        if line == EXIT_TOKEN {
            bot.save()?;
            break;
        }

        match bot.handle_command(&line)? {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::SearchPrompt => {
                let query = prompt(&mut input, &mut output, SEARCH_PROMPT)?.unwrap_or_default();
                writeln!(output, "{}", bot.search(&query))?;
            }
            Reply::Farewell(text) => {
                writeln!(output, "{}", text)?;
                break;
            }
        }
    }

    output.flush()?;
    Ok(())
}

/// Print `text` and read one line without its line ending. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
