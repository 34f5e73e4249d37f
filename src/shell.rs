/*!
 * Command Shell
 *
 * Line-oriented read-eval loop over a single memory manager. Parsing and
 * text rendering live here; the manager never prints and never exits the
 * process, so every core failure comes back as a value and is reported as
 * an `Error:` line before the loop continues.
 */

use crate::core::types::{OwnerName, Size};
use crate::memory::{MemoryManager, PlacementPolicy};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Prompt printed before each command
pub const PROMPT: &str = "allocator>";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `RQ <process_name> <size> <strategy>`
    Request {
        name: OwnerName,
        size: Size,
        policy: PlacementPolicy,
    },
    /// `RL <process_name>`
    Release { name: OwnerName },
    /// `C`
    Compact,
    /// `STAT`
    Status,
    /// `X`
    Exit,
}

/// Command syntax errors; the display text is the user-facing message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid command. Format: RQ <process_name> <size> <strategy>.")]
    MalformedRequest,

    #[error("Invalid allocation strategy. Use B (best-fit), F (first-fit), or W (worst-fit).")]
    InvalidStrategy,

    #[error("Invalid command. Format: RL <process_name>.")]
    MalformedRelease,

    #[error("Invalid command or invalid memory allocation.")]
    Unknown,
}

/// Parse one input line into a command
///
/// Process names are bounded: anything past the owner-name byte limit is
/// truncated here, before the core ever sees it.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line == "X" {
        return Ok(Command::Exit);
    }

    let mut tokens = line.split_whitespace();
    match tokens.next() {
        Some("STAT") => Ok(Command::Status),
        Some("C") => Ok(Command::Compact),
        Some("RQ") => {
            let name = tokens.next().ok_or(CommandError::MalformedRequest)?;
            let size = tokens
                .next()
                .and_then(|t| t.parse::<Size>().ok())
                .ok_or(CommandError::MalformedRequest)?;
            let strategy = tokens.next().ok_or(CommandError::MalformedRequest)?;

            let mut chars = strategy.chars();
            let policy = match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    PlacementPolicy::try_from(c).map_err(|_| CommandError::InvalidStrategy)?
                }
                _ => return Err(CommandError::InvalidStrategy),
            };

            Ok(Command::Request {
                name: OwnerName::new(name),
                size,
                policy,
            })
        }
        Some("RL") => {
            let name = tokens.next().ok_or(CommandError::MalformedRelease)?;
            Ok(Command::Release {
                name: OwnerName::new(name),
            })
        }
        _ => Err(CommandError::Unknown),
    }
}

/// Run the read-eval loop until `X` or end of input
pub fn run<R: BufRead, W: Write>(
    manager: &mut MemoryManager,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // end of input ends the session like an explicit exit
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_command(trimmed) {
            Ok(Command::Exit) => break,
            Ok(command) => execute(manager, command, &mut output)?,
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
    Ok(())
}

fn execute<W: Write>(
    manager: &mut MemoryManager,
    command: Command,
    output: &mut W,
) -> io::Result<()> {
    match command {
        Command::Request { name, size, policy } => {
            match manager.allocate(name.clone(), size, policy) {
                Ok(_) => writeln!(
                    output,
                    "Allocated {} bytes for process {} using {} strategy.",
                    size,
                    name,
                    policy.as_char()
                ),
                Err(err) => writeln!(output, "Error: {}.", err),
            }
        }
        Command::Release { name } => match manager.release(&name) {
            Ok(_) => writeln!(output, "Released memory for process {}.", name),
            Err(err) => writeln!(output, "Error: {}.", err),
        },
        Command::Compact => {
            manager.compact();
            writeln!(output, "Memory compaction completed.")
        }
        Command::Status => {
            for region in manager.status() {
                match &region.owner {
                    Some(owner) => writeln!(
                        output,
                        "Addresses [{}:{}] Process {}",
                        region.start, region.end, owner
                    )?,
                    None => writeln!(output, "Addresses [{}:{}] Unused", region.start, region.end)?,
                }
            }
            Ok(())
        }
        Command::Exit => unreachable!("Exit is handled by the run loop before execute"),
    }
}
