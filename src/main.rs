mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use upc_keygen::crypto::{wpa2_passphrase, SerialMode};
use upc_keygen::essid::parse_essid;
use upc_keygen::params::KeygenParams;
use upc_keygen::search::{search_candidates, Candidate};

use cli::{Args, Mode};

fn main() -> Result<()> {
    let args = Args::parse();
    let params = KeygenParams::default();

    banner();

    match args.mode {
        Mode::Search { essid, output } => {
            handle_search(&essid, output.as_deref(), &params)?;
        }
        Mode::Derive { serial, reversed } => {
            let mode = if reversed {
                SerialMode::Reversed
            } else {
                SerialMode::Forward
            };
            let passphrase = wpa2_passphrase(&serial, mode, &params);
            println!(
                "  -> WPA2 phrase for '{}' = '{}'",
                serial.bold(),
                passphrase.green().bold()
            );
        }
    }

    Ok(())
}

fn banner() {
    println!(
        "\n{}",
        "upc-keygen // WPA2 passphrase recovery for UPC%07d devices"
            .bold()
            .cyan()
    );
    println!("{}\n", "Use only on networks you are authorized to audit".dimmed());
}

/// Handle search mode - recover candidate serials and their passphrases
fn handle_search(essid: &str, output: Option<&Path>, params: &KeygenParams) -> Result<()> {
    let target = parse_essid(essid).with_context(|| format!("invalid ESSID '{essid}'"))?;

    println!(
        "{}",
        format!("Searching serial candidates for '{essid}'...").yellow()
    );

    let candidates = search_candidates(target, params);
    for Candidate { serial, passphrase } in &candidates {
        println!(
            "  -> WPA2 phrase for '{}' = '{}'",
            serial.bold(),
            passphrase.green().bold()
        );
    }

    if candidates.is_empty() {
        println!("\n{}", "=> no matching serials for this ESSID".red());
    } else {
        println!(
            "\n{}",
            format!("=> found {} possible WPA2 phrases", candidates.len())
                .green()
                .bold()
        );
    }

    if let Some(path) = output {
        save_candidates(&candidates, path)?;
        println!(
            "{}",
            format!("✓ Candidate list saved to {}", path.display()).green()
        );
    }

    Ok(())
}

/// Save the candidate list to a file (JSON format for simplicity)
fn save_candidates(candidates: &[Candidate], path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(candidates).context("Failed to serialize candidates")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write candidate file {}", path.display()))?;
    Ok(())
}
