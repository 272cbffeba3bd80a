//! Line-based input: one command per line.
//!
//! A line is either a JSON `PlayerCommand` (`{"type":"Capture"}`) or one of
//! the short words below. Blank lines and `#` comments are skipped.
//!
//! ```text
//! start | pause | resume | tool | capture | crouch | quit
//! zoom on | zoom off
//! look <yaw_delta> <pitch_delta>
//! speed <scale>
//! ```

use anyhow::{bail, Context, Result};

use shutterbug_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

/// Parse one input line. `Ok(None)` for lines that carry no command.
pub fn parse_line(line: &str) -> Result<Option<GameLoopCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if line.starts_with('{') {
        let command: PlayerCommand =
            serde_json::from_str(line).with_context(|| format!("bad command JSON: {line}"))?;
        return Ok(Some(GameLoopCommand::PlayerCommand(command)));
    }

    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();
    let command = match (verb.as_str(), args.as_slice()) {
        ("quit" | "exit", []) => return Ok(Some(GameLoopCommand::Shutdown)),
        ("start", []) => PlayerCommand::StartSession,
        ("pause", []) => PlayerCommand::Pause,
        ("resume", []) => PlayerCommand::Resume,
        ("tool", []) => PlayerCommand::ToggleCameraTool,
        ("capture" | "snap", []) => PlayerCommand::Capture,
        ("crouch", []) => PlayerCommand::ToggleCrouch,
        ("zoom", ["on"]) => PlayerCommand::SetZoom { engaged: true },
        ("zoom", ["off"]) => PlayerCommand::SetZoom { engaged: false },
        ("look", [yaw, pitch]) => PlayerCommand::Look {
            yaw_delta: parse_number(yaw)?,
            pitch_delta: parse_number(pitch)?,
        },
        ("speed", [scale]) => PlayerCommand::SetTimeScale {
            scale: parse_number(scale)?,
        },
        _ => bail!("unrecognised input: {line}"),
    };
    Ok(Some(GameLoopCommand::PlayerCommand(command)))
}

fn parse_number(word: &str) -> Result<f64> {
    word.parse()
        .with_context(|| format!("expected a number, got `{word}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(line: &str) -> PlayerCommand {
        match parse_line(line).unwrap() {
            Some(GameLoopCommand::PlayerCommand(cmd)) => cmd,
            other => panic!("expected a player command, got {other:?}"),
        }
    }

    #[test]
    fn test_short_words() {
        assert_eq!(player("capture"), PlayerCommand::Capture);
        assert_eq!(player("  TOOL "), PlayerCommand::ToggleCameraTool);
        assert_eq!(player("zoom on"), PlayerCommand::SetZoom { engaged: true });
        assert_eq!(
            player("look 1.5 -2"),
            PlayerCommand::Look {
                yaw_delta: 1.5,
                pitch_delta: -2.0
            }
        );
        assert_eq!(player("speed 2"), PlayerCommand::SetTimeScale { scale: 2.0 });
    }

    #[test]
    fn test_json_command() {
        assert_eq!(player(r#"{"type":"StartSession"}"#), PlayerCommand::StartSession);
    }

    #[test]
    fn test_quit_and_blank_lines() {
        assert!(matches!(
            parse_line("quit").unwrap(),
            Some(GameLoopCommand::Shutdown)
        ));
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("# warm up first").unwrap().is_none());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_line("jump").is_err());
        assert!(parse_line("look left").is_err());
        assert!(parse_line("{not json").is_err());
    }
}
