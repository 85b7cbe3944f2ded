/*!
 * Serial number model and the ESSID checksum
 *
 * Affected devices broadcast `UPC%07d`, where the 7-digit suffix is a
 * weak checksum of the device serial number plus a per-band offset. The
 * checksum encodes fewer bits than the serial, so inverting it yields a
 * small set of candidate serials rather than a unique one.
 *
 * References:
 * - https://www.usenix.org/system/files/conference/woot15/woot15-paper-lorente.pdf
 * - http://archive.hack.lu/2015/hacklu15_enovella_reversing_routers.pdf
 */

use std::fmt;

use crate::params::KeygenParams;

/// Serial prefix shared by the affected production runs.
pub const SERIAL_PREFIX: &str = "SAAP";

/// Four positional components of a vendor serial number.
///
/// The printed field widths are 1, 2 (zero-padded), 1 and 4 (zero-padded)
/// digits. The widths are part of the contract: the printed serial is the
/// input to the passphrase hash, so changing them changes the derived key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialTuple(pub [u32; 4]);

impl fmt::Display for SerialTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [f0, f1, f2, f3] = self.0;
        write!(f, "{SERIAL_PREFIX}{f0}{f1:02}{f2}{f3:04}")
    }
}

/// Checksum tying a serial tuple to the numeric ESSID suffix.
///
/// Mirrors the firmware arithmetic exactly: the 32-bit accumulator wraps,
/// and the final fold into the 7-digit space goes through the fixed-point
/// division emulation with its sign correction. Over the common range the
/// fold equals `b mod 10^7`, but a sign-bit accumulator lands outside the
/// 7-digit space; the emulation is the deployed behavior, so it is
/// reproduced bit-for-bit rather than replaced with a modulo.
///
/// # Arguments
/// * `tuple` - serial fields, each within its configured bound
/// * `magic` - band offset (`magic_24ghz` or `magic_5ghz`)
///
/// # Returns
/// The checksum a device with this serial would broadcast on that band.
#[inline]
pub fn essid_checksum(tuple: &SerialTuple, magic: u32, params: &KeygenParams) -> u32 {
    let [f0, f1, f2, f3] = tuple.0;

    let a = f1.wrapping_mul(10).wrapping_add(f2);
    let b = f0
        .wrapping_mul(2_500_000)
        .wrapping_add(a.wrapping_mul(6800))
        .wrapping_add(f3)
        .wrapping_add(magic);

    let correction = params.essid_fold.quotient_signed(b);
    (i64::from(b) - correction * 10_000_000) as u32
}
