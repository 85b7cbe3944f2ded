/*!
 * WPA2 passphrase derivation
 *
 * Implements the vendor's serial -> passphrase pipeline:
 * - MD5 of the printed serial (optionally byte-reversed first)
 * - two "mangle" rounds over the digest halves, emulating divider-free
 *   arithmetic on 16-bit words
 * - a second MD5 over the hex-printed mangle output
 * - encoding into a 23-letter alphabet (A-Z minus I, L, O)
 *
 * All 32-bit arithmetic wraps modulo 2^32; overflow is expected and
 * load-bearing, never an error.
 */

use md5::{Digest, Md5};

use crate::params::KeygenParams;

/// How the serial string is fed to the first hash.
///
/// `Reversed` models a firmware variant that derives from the
/// byte-reversed serial. Which revision selects it is not publicly
/// documented, so the choice is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerialMode {
    #[default]
    Forward,
    Reversed,
}

/// Combine four digest-derived 16-bit words into one 32-bit word.
///
/// The division by 9999 uses the firmware's multiply-and-shift
/// approximation; the final products wrap modulo 2^32.
#[inline]
pub fn mangle(words: [u32; 4], params: &KeygenParams) -> u32 {
    let a = params.mangle_fold.quotient_signed(words[3]) as u32;
    let b = (u64::from(words[3].wrapping_sub(a.wrapping_mul(9999)).wrapping_add(1)) * 11) as u32;

    b.wrapping_mul(
        words[1]
            .wrapping_mul(100)
            .wrapping_add(words[2].wrapping_mul(10))
            .wrapping_add(words[0]),
    )
}

/// Split an 8-byte digest half into four little-endian 16-bit words,
/// zero-extended to 32 bits.
#[inline]
fn digest_words(half: &[u8]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, pair) in words.iter_mut().zip(half.chunks_exact(2)) {
        *word = u32::from(u16::from_le_bytes([pair[0], pair[1]]));
    }
    words
}

/// Fold the first 8 digest bytes into the 23-letter alphabet.
///
/// Each byte is masked to 5 bits, reduced mod 23 through the fixed-point
/// emulation, mapped onto `'A'..`, then bumped past the visually
/// ambiguous 'I', 'L' and 'O'. The bump checks run sequentially, so one
/// value can be bumped more than once.
fn hash_to_passphrase(digest: &[u8], params: &KeygenParams) -> String {
    let mut pass = String::with_capacity(8);

    for &byte in &digest[..8] {
        let masked = u32::from(byte) & 0x1f;
        let folded =
            masked.wrapping_sub(params.alphabet_fold.quotient(u64::from(masked)) as u32 * 23);

        let mut letter = (folded & 0xff) + 0x41;
        if letter >= u32::from(b'I') {
            letter += 1;
        }
        if letter >= u32::from(b'L') {
            letter += 1;
        }
        if letter >= u32::from(b'O') {
            letter += 1;
        }

        pass.push(char::from(letter as u8));
    }

    pass
}

/// Derive the WPA2 passphrase for a known serial number.
///
/// Standalone entry point for embedding: callers that already know the
/// serial (it is printed on the device label) can skip the ESSID search
/// entirely.
///
/// # Arguments
/// * `serial` - printed serial number, e.g. `SAAP12345678`
/// * `mode` - forward or byte-reversed hashing of the serial
///
/// # Returns
/// 8 uppercase letters drawn from A-Z minus I, L, O
pub fn wpa2_passphrase(serial: &str, mode: SerialMode, params: &KeygenParams) -> String {
    let input: Vec<u8> = match mode {
        SerialMode::Forward => serial.as_bytes().to_vec(),
        SerialMode::Reversed => serial.bytes().rev().collect(),
    };

    let h1 = Md5::digest(&input);
    let w1 = mangle(digest_words(&h1[..8]), params);
    let w2 = mangle(digest_words(&h1[8..]), params);

    let h2 = Md5::digest(format!("{w1:08X}{w2:08X}"));
    hash_to_passphrase(&h2, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = "ABCDEFGHJKMNPQRSTUVWXYZ";

    #[test]
    fn mangle_known_values() {
        let params = KeygenParams::default();

        assert_eq!(mangle([1, 2, 3, 4], &params), 12_705);
        assert_eq!(mangle([7, 0, 0, 20_000], &params), 231);
        assert_eq!(mangle([0, 0, 0, 0], &params), 0);
    }

    #[test]
    fn mangle_wraps_modulo_2_pow_32() {
        let params = KeygenParams::default();

        assert_eq!(
            mangle([0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF], &params),
            1_079_426_882
        );
    }

    #[test]
    fn known_passphrases() {
        let params = KeygenParams::default();

        assert_eq!(
            wpa2_passphrase("SAAP12345678", SerialMode::Forward, &params),
            "UCNNDDPD"
        );
        assert_eq!(
            wpa2_passphrase("SAAP41234567", SerialMode::Forward, &params),
            "VCBVGXWT"
        );
        assert_eq!(
            wpa2_passphrase("SAAP00000000", SerialMode::Forward, &params),
            "FYECJNHR"
        );
        assert_eq!(
            wpa2_passphrase("SAAP99999999", SerialMode::Forward, &params),
            "ZPBCFWJD"
        );
    }

    #[test]
    fn reversed_mode_hashes_a_different_string() {
        let params = KeygenParams::default();

        let forward = wpa2_passphrase("SAAP12345678", SerialMode::Forward, &params);
        let reversed = wpa2_passphrase("SAAP12345678", SerialMode::Reversed, &params);

        assert_eq!(reversed, "AKJNHJHC");
        assert_ne!(forward, reversed);
    }

    #[test]
    fn derivation_is_deterministic() {
        let params = KeygenParams::default();

        assert_eq!(
            wpa2_passphrase("SAAP21370777", SerialMode::Forward, &params),
            wpa2_passphrase("SAAP21370777", SerialMode::Forward, &params)
        );
    }

    #[test]
    fn alphabet_is_closed_over_all_byte_values() {
        let params = KeygenParams::default();

        for value in 0..=255u8 {
            let pass = hash_to_passphrase(&[value; 16], &params);
            assert_eq!(pass.len(), 8);
            for c in pass.chars() {
                assert!(ALPHABET.contains(c), "{value:#04x} mapped to {c:?}");
            }
        }
    }

    #[test]
    fn passphrase_shape() {
        let params = KeygenParams::default();

        for serial in ["SAAP00000000", "SAAP41234567", "SAAP99999999"] {
            let pass = wpa2_passphrase(serial, SerialMode::Forward, &params);
            assert_eq!(pass.len(), 8);
            assert!(pass.chars().all(|c| ALPHABET.contains(c)));
        }
    }
}
