//! CLI entry point for the LaMetric client.

pub mod commands;

use clap::{Parser, Subcommand};

/// LaMetric Time CLI
#[derive(Parser, Debug)]
#[command(name = "lametric", version, about = "LaMetric Time cloud + device CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to the LaMetric cloud (refreshes silently when possible)
    Login,
    /// List devices registered to the authenticated user
    Devices,
    /// Send a notification to a device's display
    Notify(NotifyArgs),
}

/// Arguments for `lametric notify`.
#[derive(Parser, Debug)]
pub struct NotifyArgs {
    /// Device index as shown by `lametric devices` (1-based)
    #[arg(short, long, default_value = "1")]
    pub device: usize,

    /// Message text
    #[arg(short, long, default_value = "WORKS!")]
    pub text: String,

    /// Icon code (find codes on https://developer.lametric.com/icons)
    #[arg(short, long, default_value = "a2867")]
    pub icon: String,

    /// Sound id from the notifications category (e.g. positive1)
    #[arg(short, long)]
    pub sound: Option<String>,

    /// How many times the frames cycle across the display
    #[arg(short, long, default_value = "1")]
    pub cycles: u32,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_login() {
        let cli = Cli::try_parse_from(["lametric", "login"]).unwrap();
        assert!(matches!(cli.command, Commands::Login));
    }

    #[test]
    fn parse_devices() {
        let cli = Cli::try_parse_from(["lametric", "devices"]).unwrap();
        assert!(matches!(cli.command, Commands::Devices));
    }

    #[test]
    fn parse_notify_with_defaults() {
        let cli = Cli::try_parse_from(["lametric", "notify"]).unwrap();
        match cli.command {
            Commands::Notify(args) => {
                assert_eq!(args.device, 1);
                assert_eq!(args.text, "WORKS!");
                assert_eq!(args.icon, "a2867");
                assert!(args.sound.is_none());
                assert_eq!(args.cycles, 1);
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn parse_notify_with_all_options() {
        let cli = Cli::try_parse_from([
            "lametric", "notify", "-d", "2", "-t", "Build green", "-i", "a1234", "-s",
            "positive1", "-c", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::Notify(args) => {
                assert_eq!(args.device, 2);
                assert_eq!(args.text, "Build green");
                assert_eq!(args.icon, "a1234");
                assert_eq!(args.sound.as_deref(), Some("positive1"));
                assert_eq!(args.cycles, 3);
            }
            other => panic!("expected Notify, got {other:?}"),
        }
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["lametric"]).is_err());
    }
}
