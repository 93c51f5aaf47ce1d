use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use tc_app::{AppResult, Outcome, SessionOptions, format_reading, render_menu, session};
use tc_core::{Real, Scale, convert, ensure_physical};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "Temperature converter - Celsius, Fahrenheit and Kelvin", long_about = None)]
struct Cli {
    /// Reject non-finite values and values below absolute zero
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        /// Temperature value
        #[arg(allow_hyphen_values = true)]
        value: Real,
        /// Source scale (c, f, k)
        #[arg(long)]
        from: Scale,
        /// Target scale (c, f, k)
        #[arg(long)]
        to: Scale,
    },
    /// Print the conversion menu
    Menu,
}

fn main() -> AppResult<()> {
    // Logs go to stderr so stdout only carries results
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let opts = SessionOptions { strict: cli.strict };

    match cli.command {
        None => cmd_session(opts),
        Some(Commands::Convert { value, from, to }) => cmd_convert(value, from, to, opts),
        Some(Commands::Menu) => {
            print!("{}", render_menu());
            Ok(())
        }
    }
}

fn cmd_session(opts: SessionOptions) -> AppResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let outcome = if stdin.is_terminal() {
        session::run_interactive(stdin.lock(), &mut stdout, opts)?
    } else {
        session::run_piped(stdin.lock(), &mut stdout, opts)?
    };

    if let Outcome::Rejected(err) = &outcome {
        tracing::debug!(error = %err, "session ended without a conversion");
    }
    Ok(())
}

fn cmd_convert(value: Real, from: Scale, to: Scale, opts: SessionOptions) -> AppResult<()> {
    if opts.strict {
        if let Err(err) = ensure_physical(value, from) {
            println!("Invalid input: {err}");
            return Ok(());
        }
    }

    let result = convert(value, from, to);
    println!("{}", format_reading(value, from, result, to));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_accepts_negative_values_and_scale_names() {
        let cli = Cli::try_parse_from([
            "tc-cli", "convert", "-40", "--from", "celsius", "--to", "F",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Convert { value, from, to }) => {
                assert_eq!(value, -40.0);
                assert_eq!(from, Scale::Celsius);
                assert_eq!(to, Scale::Fahrenheit);
            }
            _ => panic!("expected convert subcommand"),
        }
    }

    #[test]
    fn unknown_scale_is_a_usage_error() {
        let parsed = Cli::try_parse_from(["tc-cli", "convert", "1", "--from", "r", "--to", "k"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["tc-cli", "--strict"]).unwrap();
        assert!(cli.strict);
        assert!(cli.command.is_none());
    }
}
