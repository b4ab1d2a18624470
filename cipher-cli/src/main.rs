//! Command-line front end for the classic cipher toolkit.

mod io;
mod report;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use classic_ciphers::blocks::{wrap_blocks, DEFAULT_LINE_WIDTH};
use classic_ciphers::{
    analysis, rotation, substitution, PermutationCipher, RotationCipher, SubstitutionCipher,
    TextCipher,
};

use crate::io::{InputArgs, OutputArgs};
use crate::shell::{ConsolePrompter, Shell};

// Defining the command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "ciphers", version, about = "Classical cipher toolkit")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rotation (Caesar) cipher
    Rot {
        #[command(subcommand)]
        action: RotAction,
    },

    /// Substitution cipher with frequency analysis
    Sub {
        #[command(subcommand)]
        action: SubAction,
    },

    /// Permutation (block transposition) cipher
    Perm {
        #[command(subcommand)]
        action: PermAction,
    },

    /// Interactive menu
    Shell {
        /// Line width of wrapped permutation output
        #[arg(short, long, env = "CIPHERS_LINE_WIDTH", default_value_t = DEFAULT_LINE_WIDTH)]
        width: usize,
    },
}

#[derive(Subcommand, Debug)]
enum RotAction {
    /// Encrypt with a known shift
    Encrypt {
        #[arg(short, long, value_parser = parse_shift, help = "Shift between 1 and 25")]
        shift: i64,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decrypt with a known shift
    Decrypt {
        #[arg(short, long, value_parser = parse_shift, help = "Shift between 1 and 25")]
        shift: i64,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the decryptions under every shift
    Crack {
        /// Order candidates by English match score instead of by shift
        #[arg(short, long)]
        ranked: bool,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
enum SubAction {
    /// Show letter frequencies next to English
    Analyze {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Decrypt with a known key, or suggest one from letter frequencies
    Decrypt {
        /// 26 letter key, cipher letters for a-z
        #[arg(short, long)]
        key: Option<String>,
        /// Swap the plaintext letters of two cipher letters after the suggestion, e.g. "qw"
        #[arg(long, conflicts_with = "key")]
        swap: Vec<String>,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Encrypt with a known key
    Encrypt {
        /// 26 letter key, cipher letters for a-z
        #[arg(short, long)]
        key: String,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
enum PermAction {
    /// Encrypt with a keyword
    Encrypt {
        #[arg(short, long, help = "Keyword for the cipher")]
        key: String,
        /// Line width of the block output
        #[arg(short, long, env = "CIPHERS_LINE_WIDTH", default_value_t = DEFAULT_LINE_WIDTH)]
        width: usize,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decrypt with a keyword
    Decrypt {
        #[arg(short, long, help = "Keyword for the cipher")]
        key: String,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

fn parse_shift(input: &str) -> std::result::Result<i64, String> {
    rotation::parse_shift(input).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Rot { action } => run_rotation(action),
        Command::Sub { action } => run_substitution(action),
        Command::Perm { action } => run_permutation(action),
        Command::Shell { width } => Shell::new(ConsolePrompter, width).run(),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_rotation(action: RotAction) -> Result<()> {
    match action {
        RotAction::Encrypt { shift, input, output } => {
            let text = RotationCipher::new(shift).encrypt(&input.read()?)?;
            output.write(&text)
        }
        RotAction::Decrypt { shift, input, output } => {
            let text = RotationCipher::new(shift).decrypt(&input.read()?)?;
            output.write(&text)
        }
        RotAction::Crack { ranked, input, output } => {
            output.write(&report::brute_force_table(&input.read()?, ranked))
        }
    }
}

fn run_substitution(action: SubAction) -> Result<()> {
    match action {
        SubAction::Analyze { input } => {
            let counts = analysis::count(&input.read()?);
            println!("{}", report::frequency_table(&counts));
            Ok(())
        }
        SubAction::Decrypt {
            key: Some(key),
            input,
            output,
            ..
        } => {
            let cipher = SubstitutionCipher::from_key(&key)?;
            output.write(&cipher.decrypt(&input.read()?)?)
        }
        SubAction::Decrypt {
            key: None,
            swap,
            input,
            output,
        } => {
            let ciphertext = input.read()?;
            let suggestion = substitution::suggest(&ciphertext)?;
            eprintln!("{}", report::correlation_table(&suggestion));

            let mut mapping = suggestion.mapping;
            for pair in &swap {
                let letters: Vec<char> = pair.chars().collect();
                let [a, b] = letters[..] else {
                    anyhow::bail!("--swap expects two letters, got {pair:?}");
                };
                mapping
                    .swap(a, b)
                    .with_context(|| format!("Failed to apply swap {pair:?}"))?;
            }
            info!(key = %mapping.to_key(), "substitution key");
            output.write(&substitution::apply(&ciphertext, &mapping))
        }
        SubAction::Encrypt { key, input, output } => {
            let cipher = SubstitutionCipher::from_key(&key)?;
            output.write(&cipher.encrypt(&input.read()?)?)
        }
    }
}

fn run_permutation(action: PermAction) -> Result<()> {
    match action {
        PermAction::Encrypt {
            key,
            width,
            input,
            output,
        } => {
            let cipher = PermutationCipher::from_keyword(&key)?;
            info!(key = ?cipher.key().positions(), "permutation key");
            let encrypted = cipher.encrypt(&input.read()?)?;
            output.write(&wrap_blocks(&encrypted, cipher.key().len(), width))
        }
        PermAction::Decrypt { key, input, output } => {
            let cipher = PermutationCipher::from_keyword(&key)?;
            output.write(&cipher.decrypt(&input.read()?)?)
        }
    }
}
