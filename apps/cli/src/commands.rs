//! Subcommand handlers.
//!
//! Each handler writes its result to `out` so it can be tested without a
//! terminal.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use labwork_collections::{even_numbers, find_common_elements, find_common_elements_unique};
use labwork_guess::{play, GameConfig, GuessingGame};
use labwork_lookup::{Collection, IndexCache};
use labwork_madlib::MadLib;

pub fn madlib<W: Write>(adjective: &str, noun: &str, verb: &str, mut out: W) -> Result<()> {
    let madlib = MadLib::new(adjective, noun, verb)?;
    writeln!(out, "{}", madlib.story())?;
    Ok(())
}

pub fn guess<R, W>(config: GameConfig, secret: Option<i64>, input: R, out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let game = match secret {
        Some(secret) => GuessingGame::with_secret(secret, config)?,
        None => GuessingGame::random(config)?,
    };
    play(game, input, out)?;
    Ok(())
}

pub fn common<W: Write>(a: &str, b: &str, unique: bool, mut out: W) -> Result<()> {
    let a = parse_list(a).context("invalid first list")?;
    let b = parse_list(b).context("invalid second list")?;

    let mut common = if unique {
        find_common_elements_unique(a, b)
    } else {
        find_common_elements(&a, &b)
    };
    if unique {
        common.sort_unstable();
    }
    writeln!(out, "{}", join(&common))?;
    Ok(())
}

pub fn evens<W: Write>(numbers: &[i64], mut out: W) -> Result<()> {
    let evens = even_numbers(numbers.iter().copied());
    writeln!(out, "{}", join(&evens))?;
    Ok(())
}

/// Print the record for each name, or `not found`.
pub fn lookup<W: Write>(
    cache: &IndexCache,
    path: &Path,
    names: &[String],
    mut out: W,
) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records '{}'", path.display()))?;
    let users = Collection::from_json(&json)
        .with_context(|| format!("invalid records '{}'", path.display()))?;
    tracing::debug!(records = users.len(), collection = %users.id(), "Loaded records");

    for name in names {
        match cache.lookup(&users, name)? {
            Some(record) => writeln!(out, "{}", serde_json::to_string(record.as_ref())?)?,
            None => writeln!(out, "{name}: not found")?,
        }
    }
    Ok(())
}

/// Parse a comma-separated list of integers. Blank items are skipped.
fn parse_list(list: &str) -> Result<Vec<i64>> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .with_context(|| format!("'{item}' is not an integer"))
        })
        .collect()
}

fn join(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
