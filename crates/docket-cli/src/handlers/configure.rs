use crate::config::{Config, expand_tilde};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Values given on the command line; anything unset is prompted for
pub struct ConfigureArgs {
    pub store_path: Option<String>,
    pub save_to: Option<String>,
}

pub fn handle(
    current: Config,
    workspace: &Path,
    config_path: &Path,
    args: ConfigureArgs,
) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let written = configure(
        &mut input,
        &mut output,
        current,
        workspace,
        config_path,
        args,
    )?;
    println!("Configuration written to {}", written.display());
    Ok(())
}

fn configure<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mut config: Config,
    workspace: &Path,
    config_path: &Path,
    args: ConfigureArgs,
) -> Result<PathBuf> {
    let store_default = config.store_path(workspace).display().to_string();
    let store_path = match args.store_path {
        Some(path) => path,
        None => prompt(input, output, "Event store path", &store_default)?,
    };
    config.store.path = Some(store_path);

    let save_to = match args.save_to {
        Some(path) => path,
        None => prompt(
            input,
            output,
            "Save configuration file at",
            &config_path.display().to_string(),
        )?,
    };
    let save_to = expand_tilde(&save_to);

    config.save_to(&save_to)?;
    Ok(save_to)
}

/// Print `label [default]: ` and read one line; empty input or EOF keeps the default
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    write!(output, "{} [{}]: ", label, default)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    let value = line.trim_end_matches(['\n', '\r']);
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value.to_string())
    }
}
