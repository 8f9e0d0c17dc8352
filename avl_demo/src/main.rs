//! Builds an AVL tree from the command line and prints it level by level before and after
//! deleting some keys.
//!
//! ```text
//! avl_demo --insert 10,20,30,40,50,25 --delete 50 -vv
//! ```

use std::num::ParseIntError;

use anyhow::{Context, Result};
use clap::Parser;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use avl::AVLSet;

#[derive(Parser, Debug)]
#[command(name = "avl_demo", about = "Insert and delete keys in an AVL tree, printing every level")]
struct Cli {
    /// Comma-separated keys to insert, in order
    #[arg(long, default_value = "10,20,30,40,50,25")]
    insert: String,
    /// Comma-separated keys to delete after all insertions
    #[arg(long, default_value = "50")]
    delete: String,
    /// Raise the log level (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error, PartialEq)]
#[error("invalid key `{token}`")]
struct ParseKeysError {
    token: String,
    #[source]
    source: ParseIntError,
}

/// Parses a comma-separated list of keys. Blank entries are skipped.
fn parse_keys(list: &str) -> Result<Vec<i64>, ParseKeysError> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().map_err(|source| ParseKeysError {
            token: token.to_string(),
            source,
        }))
        .collect()
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn print_tree(title: &str, set: &AVLSet<i64>) {
    println!("{}", title);
    print!("{}", set.display_levels());
    println!("In-order: {:?}", set.inorder());
    println!();
}

fn run(cli: &Cli) -> Result<()> {
    let inserts = parse_keys(&cli.insert).context("failed to parse --insert")?;
    let deletes = parse_keys(&cli.delete).context("failed to parse --delete")?;

    let mut set = AVLSet::new();
    for &key in &inserts {
        if set.insert(key) {
            debug!(key, height = set.height(), "inserted");
        } else {
            info!(key, "duplicate key ignored");
        }
    }
    set.validate().context("tree is invalid after insertions")?;
    print_tree(&format!("After inserting {:?}:", inserts), &set);

    for &key in &deletes {
        if set.remove(&key) {
            debug!(key, height = set.height(), "deleted");
        } else {
            info!(key, "key not found, nothing deleted");
        }
    }
    set.validate().context("tree is invalid after deletions")?;
    print_tree(&format!("After deleting {:?}:", deletes), &set);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    run(&cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn default_arguments() {
        let cli = Cli::parse_from(vec!["avl_demo"]);
        assert_eq!(parse_keys(&cli.insert).unwrap(), vec![10, 20, 30, 40, 50, 25]);
        assert_eq!(parse_keys(&cli.delete).unwrap(), vec![50]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(vec!["avl_demo", "-vv", "--delete", ""]);
        assert_eq!(cli.verbose, 2);
        assert!(parse_keys(&cli.delete).unwrap().is_empty());
    }

    #[test]
    fn parse_keys_list() {
        assert_eq!(parse_keys("1, -2,3").unwrap(), vec![1, -2, 3]);
        assert_eq!(parse_keys("7,,8,").unwrap(), vec![7, 8]);
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn parse_keys_reports_bad_token() {
        let err = parse_keys("1,two,3").unwrap_err();
        assert_eq!(err.token, "two");
        assert_eq!(err.to_string(), "invalid key `two`");

        let err = parse_keys("99999999999999999999").unwrap_err();
        assert_eq!(err.token, "99999999999999999999");
    }

    #[test]
    fn run_inserts_and_deletes() {
        let cli = Cli::parse_from(vec!["avl_demo", "--insert", "5,3,8,3", "--delete", "3,42"]);
        run(&cli).unwrap();
    }
}
