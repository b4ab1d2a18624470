//! Reading input text and writing results

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

/// Where the text to process comes from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to process (reads stdin when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Path to the input file
    #[arg(short, long, help = "Path to the input file")]
    pub file: Option<PathBuf>,
}

/// Where the result goes
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Path to the output file (prints to the screen when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => read_file(path),
            (None, None) => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read text from stdin")?;
                Ok(content)
            }
        }
    }
}

impl OutputArgs {
    pub fn write(&self, text: &str) -> Result<()> {
        match &self.output {
            Some(path) => write_file(path, text),
            None => {
                println!("{text}");
                Ok(())
            }
        }
    }
}

/// Read a whole file as text
pub fn read_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "read input");
    Ok(content)
}

/// Write text to a file, replacing its content
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    info!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}
