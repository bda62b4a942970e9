use arglet_cli::{
    error::CliError,
    output::{OutputFormat, render_tokens, render_value},
};
use arglet_core::{config::ParserSettings, tokenizer::splitter::Splitter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug mode
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "plain",
        env = "ARGLET_OUTPUT",
        global = true
    )]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a command line into tokens
    Split(SplitArgs),

    /// Show the resolved parser settings
    Settings(SettingsArgs),
}

#[derive(Parser)]
struct SplitArgs {
    /// The command line to split, passed as one argument
    line: String,
}

#[derive(Parser)]
struct SettingsArgs {
    /// Path to a settings file; defaults apply when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Split(args) => {
            let tokens: Vec<String> = Splitter::new().split(&args.line).collect();
            debug!("split {} tokens", tokens.len());
            println!("{}", render_tokens(&tokens, cli.output)?);
        }
        Commands::Settings(args) => {
            let settings = match args.file {
                Some(path) => ParserSettings::from_file(path)?,
                None => ParserSettings::default(),
            };
            println!("{}", render_value(&settings)?);
        }
    }

    Ok(())
}
