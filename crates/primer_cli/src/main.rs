//! `primer` command-line entry point.
//!
//! # Responsibility
//! - Dispatch each demo and the direct record operations.
//! - Treat every store failure as fatal: log it, print it, exit non-zero.

use clap::{Parser, Subcommand};
use log::error;
use primer_core::db::seed::seed_sample_posts;
use primer_core::db::{connect, StoreConfig, DEFAULT_DB_FILE_NAME};
use primer_core::demo::{control, slices};
use primer_core::{core_version, default_log_level, init_logging, LogTarget, PostId, RecordsDemo};
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "primer", about = "Language-basics demos and a one-shot post store")]
struct Cli {
    /// SQLite store file.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// trace|debug|info|warn|error (defaults per build mode).
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when omitted.
    #[arg(long, global = true, value_name = "DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Growable sequence walkthrough.
    Slices,
    /// Branching walkthrough.
    Control {
        #[arg(long, default_value_t = control::DEFAULT_NUM, allow_negative_numbers = true)]
        num: i64,
    },
    /// Scripted add/update/delete/get sequence against the store.
    Records,
    /// Create the store schema, optionally with the sample posts.
    Init {
        #[arg(long)]
        seed: bool,
    },
    /// Print every post title, highest id first.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print one post.
    Get {
        id: PostId,
        #[arg(long)]
        json: bool,
    },
    /// Insert a post.
    Add { title: String, body: String },
    /// Replace title and body of a post.
    Update {
        id: PostId,
        title: String,
        body: String,
    },
    /// Delete a post.
    Delete { id: PostId },
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(cli: &Cli) {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let target = match cli.log_dir.as_deref() {
        Some(dir) => LogTarget::directory(dir),
        None => Ok(LogTarget::Stderr),
    };

    if let Err(err) = target.and_then(|target| init_logging(level, target)) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = StoreConfig::new(cli.db);
    let demo = RecordsDemo::new(config.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Slices => slices::run(&mut out)?,
        Command::Control { num } => control::run(num, &mut out)?,
        Command::Records => demo.run_walkthrough(&mut out)?,
        Command::Init { seed } => {
            let mut conn = connect(&config)?;
            writeln!(out, "initialized {}", config.path.display())?;
            if seed {
                let inserted = seed_sample_posts(&mut conn)?;
                writeln!(out, "seeded {inserted} posts")?;
            }
        }
        Command::List { json: false } => {
            demo.get_all(&mut out)?;
        }
        Command::List { json: true } => {
            let posts = demo.get_all(&mut io::sink())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&posts)?)?;
        }
        Command::Get { id, json: false } => {
            demo.get_one(id, &mut out)?;
        }
        Command::Get { id, json: true } => {
            let post = demo.get_one(id, &mut io::sink())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&post)?)?;
        }
        Command::Add { title, body } => {
            demo.add(&title, &body, &mut out)?;
        }
        Command::Update { id, title, body } => {
            demo.update(id, &title, &body, &mut out)?;
        }
        Command::Delete { id } => demo.delete(id, &mut out)?,
        Command::Version => writeln!(out, "primer {}", core_version())?,
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn update_parses_positional_arguments_and_global_db() {
        let cli = Cli::parse_from(["primer", "update", "3", "t", "b", "--db", "/tmp/x.sqlite3"]);
        assert_eq!(cli.db.to_str(), Some("/tmp/x.sqlite3"));
        match cli.command {
            Command::Update { id, title, body } => {
                assert_eq!(id, 3);
                assert_eq!(title, "t");
                assert_eq!(body, "b");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn control_accepts_negative_numbers() {
        let cli = Cli::parse_from(["primer", "control", "--num", "-4"]);
        assert!(matches!(cli.command, Command::Control { num: -4 }));
    }

    #[test]
    fn unopenable_store_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("missing").join("nested.sqlite3");

        let cli = Cli::parse_from(["primer", "--db", db.to_str().unwrap(), "list"]);
        let err = run(cli).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn deleting_absent_post_still_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("primer.sqlite3");
        let db = db.to_str().unwrap();

        run(Cli::parse_from(["primer", "--db", db, "delete", "99"])).unwrap();
        run(Cli::parse_from(["primer", "--db", db, "update", "99", "t", "b"])).unwrap();
    }
}
