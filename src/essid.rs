/*!
 * ESSID parsing and validation
 *
 * Input is a network name shaped like `UPC0612345`: a 3-letter prefix
 * followed by the 7-digit checksum suffix. Malformed input is a caller
 * error and is rejected before any enumeration starts.
 */

use thiserror::Error;

/// Length of the alphabetic network-name prefix (`UPC`).
pub const ESSID_PREFIX_LEN: usize = 3;

/// Number of decimal digits in the checksum suffix.
pub const ESSID_SUFFIX_DIGITS: usize = 7;

/// Caller-contract violations on the ESSID input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EssidError {
    #[error("ESSID {0:?} is too short: expected a 3-letter prefix followed by digits")]
    TooShort(String),

    #[error("ESSID {0:?} does not start with a 3-letter prefix")]
    InvalidPrefix(String),

    #[error("ESSID suffix {0:?} is not a decimal number of at most 7 digits")]
    InvalidSuffix(String),
}

/// Parse the target checksum out of an ESSID like `UPC0612345`.
///
/// Only the shape of the prefix (3 ASCII letters) is validated, not the
/// brand string itself. The suffix is parsed as decimal, so leading
/// zeros are plain digits (`UPC0612345` -> 612345).
pub fn parse_essid(essid: &str) -> Result<u32, EssidError> {
    let bytes = essid.as_bytes();
    if bytes.len() <= ESSID_PREFIX_LEN {
        return Err(EssidError::TooShort(essid.to_string()));
    }

    let (prefix, suffix) = bytes.split_at(ESSID_PREFIX_LEN);
    if !prefix.iter().all(u8::is_ascii_alphabetic) {
        return Err(EssidError::InvalidPrefix(essid.to_string()));
    }
    if suffix.len() > ESSID_SUFFIX_DIGITS || !suffix.iter().all(u8::is_ascii_digit) {
        return Err(EssidError::InvalidSuffix(
            String::from_utf8_lossy(suffix).into_owned(),
        ));
    }

    // an all-ASCII suffix of at most 7 digits always fits in u32
    essid[ESSID_PREFIX_LEN..]
        .parse()
        .map_err(|_| EssidError::InvalidSuffix(essid[ESSID_PREFIX_LEN..].to_string()))
}
