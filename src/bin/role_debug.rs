//! Role Debug Utility
//!
//! Shows how one player's role scores are built: parsed attribute values,
//! tier sums, weights and the rounded score for every role.
//!
//! Usage: cargo run --bin role-debug [--delimiter=;] <export file> <player name>

use anyhow::Result;
use fm_role_analyzer::pipeline::debug_player;
use fm_role_analyzer::AnalysisConfig;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    // Parse args
    let mut delimiter = b',';
    let mut positional = Vec::new();

    for arg in &args[1..] {
        if let Some(d) = arg.strip_prefix("--delimiter=") {
            delimiter = d.bytes().next().unwrap_or(b',');
        } else if !arg.starts_with("--") {
            positional.push(arg.clone());
        }
    }

    if positional.len() < 2 {
        eprintln!("Usage: {} [--delimiter=<char>] <export file> <player name>", args[0]);
        eprintln!("Example: {} squad.html \"Bukayo Saka\"", args[0]);
        eprintln!();
        eprintln!("The player name may be a case-insensitive part of the name.");
        std::process::exit(1);
    }

    let input = PathBuf::from(&positional[0]);
    let name = positional[1..].join(" ");
    let config = AnalysisConfig::default().with_delimiter(delimiter);

    println!("{}", debug_player(&input, &name, &config)?);
    Ok(())
}
