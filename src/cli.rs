use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "upc-keygen")]
#[command(version)]
#[command(about = "WPA2 default passphrase recovery for UPC%07d routers - authorized audits only", long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand)]
pub enum Mode {
    /// Recover candidate passphrases for a network by its ESSID
    ///
    /// Enumerates every serial number consistent with the numeric ESSID
    /// suffix (2.4GHz and 5GHz variants both count as a hit) and derives
    /// the default WPA2 passphrase for each. Expect a handful of
    /// candidates per network.
    ///
    /// Example: upc-keygen search UPC1234567
    Search {
        /// Target network name, e.g. UPC1234567
        essid: String,

        /// Write the candidate list to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Derive the passphrase for a known serial number
    ///
    /// Skips the search entirely: useful when the serial is printed on
    /// the device label.
    ///
    /// Example: upc-keygen derive SAAP12345678
    Derive {
        /// Device serial number, e.g. SAAP12345678
        serial: String,

        /// Hash the byte-reversed serial (alternate firmware variant)
        #[arg(short, long)]
        reversed: bool,
    },
}
