//! Command-line remote for a NAD amplifier control bridge
//!
//! Builds a device session, bootstraps it from the bridge, runs exactly
//! one operation and prints the resulting exchange. Failures captured by
//! the session become a non-zero exit.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nad_codec::{Command, Source};
use nad_session::DeviceSession;

/// Remote control for a NAD amplifier behind an HTTP control bridge
#[derive(Parser, Debug)]
#[command(name = "nad-remote", version)]
struct Args {
    /// Base URL of the control bridge
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Toggle main power
    Power,
    /// Toggle mute
    Mute,
    /// Toggle the speaker A output
    SpeakerA,
    /// Step the volume
    Volume { direction: Direction },
    /// Select an input source
    Source { name: Source },
    /// Ask the amplifier for its model
    Model,
    /// Print the tracked device state
    State,
    /// Send a raw delimited command, e.g. Main.Power=On
    Send { command: Command },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Direction {
    Up,
    Down,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn print_state(session: &DeviceSession) {
    let mut entries: Vec<_> = session.state().into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (variable, value) in entries {
        println!("{variable}={}", value.to_wire());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let session = DeviceSession::new(args.url.clone());
    info!(url = %args.url, "bootstrapping session");
    session.bootstrap();

    match &args.action {
        Action::Power => session.toggle_power(),
        Action::Mute => session.toggle_mute(),
        Action::SpeakerA => session.toggle_speaker_a(),
        Action::Volume { direction } => match direction {
            Direction::Up => session.volume_up(),
            Direction::Down => session.volume_down(),
        },
        Action::Source { name } => session.set_source(*name),
        Action::Model => session.query_model(),
        Action::Send { command } => session.send_command(command.clone()),
        Action::State => {}
    }

    if let Some(error) = session.last_error() {
        bail!("{error}");
    }

    match args.action {
        Action::State => print_state(&session),
        _ => {
            if let Some(exchange) = session.last_exchange() {
                println!("{exchange}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nad_codec::Variable;

    #[test]
    fn test_args_parse_subcommands() {
        let args = Args::try_parse_from(["nad-remote", "power"]).unwrap();
        assert!(matches!(args.action, Action::Power));
        assert_eq!(args.url, "http://localhost:8080");

        let args = Args::try_parse_from(["nad-remote", "-u", "http://amp:9000", "volume", "up"])
            .unwrap();
        assert_eq!(args.url, "http://amp:9000");
        assert!(matches!(
            args.action,
            Action::Volume {
                direction: Direction::Up
            }
        ));
    }

    #[test]
    fn test_args_parse_source_name() {
        let args = Args::try_parse_from(["nad-remote", "source", "cd"]).unwrap();
        assert!(matches!(args.action, Action::Source { name: Source::Cd }));
    }

    #[test]
    fn test_args_parse_raw_command() {
        let args = Args::try_parse_from(["nad-remote", "send", "Main.Power=On"]).unwrap();
        match args.action {
            Action::Send { command } => {
                assert_eq!(command, Command::set(Variable::Power, true));
            }
            other => panic!("expected send action, got {other:?}"),
        }
    }

    #[test]
    fn test_args_reject_bad_command() {
        assert!(Args::try_parse_from(["nad-remote", "send", "Main.Power"]).is_err());
        assert!(Args::try_parse_from(["nad-remote", "source", "Phono"]).is_err());
    }
}
