use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use list_spacing_config::Config;
use list_spacing_engine::{
    ListPasteFixer, PasteSettings, StringEditor, WriteMode, fix_list_spacing, fix_paths, read_file,
    validate_notes_dir,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "list-spacing", author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/list-spacing/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Collapse blank lines between list items in files or notes folders
    Fix {
        /// Report files that need fixing without writing; exits 1 if any do.
        /// Any unreadable file makes the exit status 2
        #[arg(long, conflicts_with = "stdout")]
        check: bool,

        /// Print the fixed text of a single file instead of writing it back
        #[arg(long)]
        stdout: bool,

        /// Files or notes folders; defaults to notes_path from the config file
        paths: Vec<PathBuf>,
    },

    /// Treat stdin as pasted text and print what would be inserted
    Paste {
        /// Override auto_fix_on_paste from the config file
        #[arg(long, action = ArgAction::Set)]
        auto_fix: Option<bool>,
    },

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective settings and where they are stored
    Show,

    /// Turn fixing on paste on or off
    SetAutoFix {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match run(cli, &mut io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs a parsed command line, returning the process exit status.
fn run(cli: Cli, stdin: &mut impl Read, out: &mut impl Write) -> Result<u8> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        Command::Fix {
            check,
            stdout,
            paths,
        } => {
            let paths = if paths.is_empty() {
                notes_path_from_config(&config_path)?
            } else {
                paths
            };
            if stdout {
                print_fixed_file(&paths, out)
            } else {
                fix_files(&paths, check, out)
            }
        }
        Command::Paste { auto_fix } => {
            let settings = match auto_fix {
                Some(enabled) => PasteSettings {
                    auto_fix_on_paste: enabled,
                },
                None => paste_settings(&Config::load_or_default_from_path(&config_path)?),
            };
            paste(settings, stdin, out)?;
            Ok(0)
        }
        Command::Config(ConfigCommand::Show) => {
            show_config(&config_path, out)?;
            Ok(0)
        }
        Command::Config(ConfigCommand::SetAutoFix { enabled }) => {
            let mut config = Config::load_or_default_from_path(&config_path)?;
            config.auto_fix_on_paste = enabled;
            config
                .save_to_path(&config_path)
                .with_context(|| format!("saving {}", config_path.display()))?;
            log::info!("Config saved to {}", config_path.display());
            writeln!(out, "auto_fix_on_paste = {enabled}")?;
            Ok(0)
        }
    }
}

fn paste_settings(config: &Config) -> PasteSettings {
    PasteSettings {
        auto_fix_on_paste: config.auto_fix_on_paste,
    }
}

fn notes_path_from_config(config_path: &Path) -> Result<Vec<PathBuf>> {
    match Config::load_from_path(config_path)? {
        Some(Config {
            notes_path: Some(notes_path),
            ..
        }) => {
            validate_notes_dir(&notes_path).with_context(|| {
                format!(
                    "Notes path '{}' from config file '{}' is invalid",
                    notes_path.display(),
                    config_path.display()
                )
            })?;
            log::info!("Using notes path {} from config", notes_path.display());
            Ok(vec![notes_path])
        }
        _ => bail!(
            "no paths given and no notes_path set in {}",
            config_path.display()
        ),
    }
}

fn print_fixed_file(paths: &[PathBuf], out: &mut impl Write) -> Result<u8> {
    let [path] = paths else {
        bail!("--stdout takes exactly one file");
    };
    let content = read_file(path)?;
    out.write_all(fix_list_spacing(&content).as_bytes())?;
    Ok(0)
}

fn fix_files(paths: &[PathBuf], check: bool, out: &mut impl Write) -> Result<u8> {
    let mode = if check {
        WriteMode::DryRun
    } else {
        WriteMode::InPlace
    };
    let batch = fix_paths(paths, mode);
    let reports = &batch.reports;

    let mut changed = 0;
    for report in reports.iter().filter(|r| r.changed) {
        changed += 1;
        let verb = if check { "would fix" } else { "fixed" };
        writeln!(
            out,
            "{verb} {} ({} blank line(s) removed)",
            report.path.display(),
            report.removed_lines
        )?;
    }

    for error in &batch.errors {
        writeln!(out, "error: {error}")?;
    }

    if check {
        writeln!(out, "{changed} of {} file(s) need fixing", reports.len())?;
    } else {
        writeln!(out, "{changed} of {} file(s) fixed", reports.len())?;
    }
    if !batch.errors.is_empty() {
        writeln!(out, "{} path(s) could not be processed", batch.errors.len())?;
        return Ok(2);
    }
    Ok(u8::from(check && changed > 0))
}

/// Writes what a paste of `stdin` would insert.
///
/// Input that is not UTF-8 is not plain text, so it is declined and passed
/// through byte for byte, like any other paste the fixer leaves alone.
fn paste(settings: PasteSettings, stdin: &mut impl Read, out: &mut impl Write) -> Result<()> {
    let mut raw = Vec::new();
    stdin.read_to_end(&mut raw).context("reading stdin")?;

    let fixer = ListPasteFixer::new(settings);
    let mut editor = StringEditor::default();
    let outcome = fixer.handle_paste(std::str::from_utf8(&raw).ok(), &mut editor);
    log::debug!("paste outcome: {outcome:?}");

    if outcome.prevents_default() {
        out.write_all(editor.text().as_bytes())?;
    } else {
        out.write_all(&raw)?;
    }
    Ok(())
}

fn show_config(config_path: &Path, out: &mut impl Write) -> Result<()> {
    let (config, source) = match Config::load_from_path(config_path)? {
        Some(config) => (config, "loaded"),
        None => (Config::default(), "not found, using defaults"),
    };

    writeln!(out, "config file: {} ({source})", config_path.display())?;
    writeln!(out, "auto_fix_on_paste = {}", config.auto_fix_on_paste)?;
    match config.notes_path {
        Some(path) => writeln!(out, "notes_path = {}", path.display())?,
        None => writeln!(out, "notes_path = (unset)")?,
    }
    Ok(())
}
