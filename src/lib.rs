// Public exports for embedding and testing
pub mod checksum;
pub mod crypto;
pub mod essid;
pub mod params;
pub mod search;

pub use checksum::{essid_checksum, SerialTuple, SERIAL_PREFIX};
pub use crypto::{mangle, wpa2_passphrase, SerialMode};
pub use essid::{parse_essid, EssidError};
pub use params::{FixedPointDiv, KeygenParams};
pub use search::{search_candidates, Candidate};
