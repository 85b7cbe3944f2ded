/*!
 * Vendor firmware parameters
 *
 * The original firmware targets an embedded core without a hardware
 * divider, so every division by a non-power-of-two constant is compiled
 * down to a multiply-by-magic-then-shift sequence. The multipliers and
 * shift widths below are contractual values lifted from the firmware:
 * the approximation, not true division, is what ships on the device, and
 * the two can disagree at boundary values. Never "simplify" them back to
 * a division operator.
 */

/// Fixed-point emulation of integer division by a constant.
///
/// Computes `(x * multiplier) >> shift`. Where the firmware divides a
/// two's-complement accumulator it additionally subtracts `x >> 31` to
/// round toward zero; see [`FixedPointDiv::quotient_signed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPointDiv {
    pub multiplier: u64,
    pub shift: u32,
}

impl FixedPointDiv {
    /// Quotient approximation for a non-negative operand.
    #[inline]
    pub fn quotient(&self, x: u64) -> u64 {
        (x * self.multiplier) >> self.shift
    }

    /// Quotient with the firmware's sign correction: `x` is treated as a
    /// two's-complement 32-bit value and the result rounds toward zero.
    #[inline]
    pub fn quotient_signed(&self, x: u32) -> i64 {
        self.quotient(u64::from(x)) as i64 - i64::from(x >> 31)
    }
}

/// Process-wide immutable parameters for the checksum and passphrase
/// pipelines.
///
/// Passed explicitly into every pure function (no hidden globals) so the
/// functions stay testable in isolation and the enumeration bounds can be
/// shrunk in tests.
#[derive(Debug, Clone, Copy)]
pub struct KeygenParams {
    /// 2.4GHz checksum offset (-7,500,000 as two's-complement).
    pub magic_24ghz: u32,
    /// 5GHz checksum offset (-2,500,000 as two's-complement).
    pub magic_5ghz: u32,
    /// Inclusive upper bound of each serial field.
    pub field_max: [u32; 4],
    /// Division by 10,000,000: folds the checksum accumulator into the
    /// 7-digit ESSID space.
    pub essid_fold: FixedPointDiv,
    /// Division by 9999, used by the hash-word mangle.
    pub mangle_fold: FixedPointDiv,
    /// Division by 23, used by the passphrase alphabet encoding.
    pub alphabet_fold: FixedPointDiv,
}

impl Default for KeygenParams {
    fn default() -> Self {
        Self {
            magic_24ghz: 0xff8d_8f20,
            magic_5ghz: 0xffd9_da60,
            field_max: [9, 99, 9, 9999],
            essid_fold: FixedPointDiv {
                multiplier: 0x6b5f_ca6b,
                shift: 54,
            },
            mangle_fold: FixedPointDiv {
                multiplier: 0x068d_e3af,
                shift: 40,
            },
            alphabet_fold: FixedPointDiv {
                multiplier: 0xb216_42c9,
                shift: 36,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotients_match_true_division_over_operating_range() {
        let params = KeygenParams::default();

        // alphabet fold only ever sees 5-bit values
        for x in 0..=31u64 {
            assert_eq!(params.alphabet_fold.quotient(x), x / 23);
        }

        // mangle fold only ever sees 16-bit digest words
        for x in 0..=0xFFFFu64 {
            assert_eq!(params.mangle_fold.quotient(x), x / 9999);
        }
    }

    #[test]
    fn essid_fold_spot_checks() {
        let params = KeygenParams::default();
        assert_eq!(params.essid_fold.quotient(0), 0);
        assert_eq!(params.essid_fold.quotient(9_999_999), 0);
        assert_eq!(params.essid_fold.quotient(10_000_000), 1);
        assert_eq!(params.essid_fold.quotient(u64::from(u32::MAX)), 429);
    }

    #[test]
    fn sign_correction_rounds_toward_zero() {
        let params = KeygenParams::default();

        assert_eq!(params.essid_fold.quotient_signed(5_000_000), 0);
        assert_eq!(params.essid_fold.quotient_signed(10_000_000), 1);

        // sign-bit accumulator: the quotient drops by one
        assert_eq!(params.essid_fold.quotient_signed(0xff8d_8f20), 427);
    }
}
