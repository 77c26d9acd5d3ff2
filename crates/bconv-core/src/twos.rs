// Dweve bconv - Binary, Decimal and Hexadecimal Converter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Two's complement interpretation of binary strings.

use crate::error::{ConversionError, ConvertResult};
use crate::radix::Radix;

/// How a converted value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signedness {
    /// Plain unsigned magnitude.
    Unsigned,
    /// Signed mode, value is zero or positive.
    SignedPositive,
    /// Signed mode, value is negative.
    SignedNegative,
}

impl Signedness {
    /// Select the interpretation for a classified input.
    ///
    /// - `signed` off: always [`Signedness::Unsigned`].
    /// - Binary or hexadecimal input: negative when the top bit of `bits` is `1`.
    /// - Decimal input: negative when it carried a leading minus and `bits`
    ///   (its magnitude) is not zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bconv_core::{Radix, Signedness};
    ///
    /// assert_eq!(Signedness::select(false, Radix::Binary, false, "1000"), Signedness::Unsigned);
    /// assert_eq!(Signedness::select(true, Radix::Binary, false, "1000"), Signedness::SignedNegative);
    /// assert_eq!(Signedness::select(true, Radix::Decimal, true, "0101010"), Signedness::SignedNegative);
    /// assert_eq!(Signedness::select(true, Radix::Decimal, true, "00"), Signedness::SignedPositive);
    /// ```
    pub fn select(signed: bool, radix: Radix, negative: bool, bits: &str) -> Self {
        if !signed {
            return Signedness::Unsigned;
        }

        let is_negative = match radix {
            Radix::Binary | Radix::Hexadecimal => bits.starts_with('1'),
            Radix::Decimal => negative && bits.contains('1'),
        };

        if is_negative {
            Signedness::SignedNegative
        } else {
            Signedness::SignedPositive
        }
    }

    /// Whether the value is negative.
    pub fn is_negative(self) -> bool {
        self == Signedness::SignedNegative
    }
}

/// Negate a fixed-width binary string: invert every bit, then add one.
///
/// Done in a single right-to-left pass with a carry that starts at 1. The
/// width is preserved and a carry out of the most significant bit is
/// dropped.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for any character other than
/// `0` or `1`.
///
/// # Examples
///
/// ```
/// use bconv_core::twos::twos_complement;
///
/// assert_eq!(twos_complement("0101010").unwrap(), "1010110");
/// assert_eq!(twos_complement("1010110").unwrap(), "0101010");
/// assert_eq!(twos_complement("0000").unwrap(), "0000");
/// ```
pub fn twos_complement(bits: &str) -> ConvertResult<String> {
    let mut reversed = Vec::with_capacity(bits.len());
    let mut carry = true;

    for bit in bits.chars().rev() {
        let inverted = match bit {
            '0' => '1',
            '1' => '0',
            _ => return Err(ConversionError::invalid_digit(bit, Radix::Binary)),
        };

        let out = match (carry, inverted) {
            (true, '1') => '0',
            (true, _) => {
                carry = false;
                '1'
            }
            (false, b) => b,
        };
        reversed.push(out);
    }

    Ok(reversed.into_iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Signedness::select tests ====================

    #[test]
    fn test_select_unsigned_ignores_bits() {
        for radix in [Radix::Decimal, Radix::Binary, Radix::Hexadecimal] {
            assert_eq!(Signedness::select(false, radix, true, "1111"), Signedness::Unsigned);
        }
    }

    #[test]
    fn test_select_binary_and_hex_use_top_bit() {
        assert_eq!(
            Signedness::select(true, Radix::Hexadecimal, false, "0111"),
            Signedness::SignedPositive
        );
        assert_eq!(
            Signedness::select(true, Radix::Hexadecimal, false, "1000"),
            Signedness::SignedNegative
        );
        // a decimal-style minus flag means nothing for prefixed input
        assert_eq!(
            Signedness::select(true, Radix::Binary, true, "0111"),
            Signedness::SignedPositive
        );
    }

    #[test]
    fn test_select_decimal_uses_minus() {
        assert_eq!(
            Signedness::select(true, Radix::Decimal, false, "01"),
            Signedness::SignedPositive
        );
        assert_eq!(
            Signedness::select(true, Radix::Decimal, true, "01"),
            Signedness::SignedNegative
        );
    }

    #[test]
    fn test_select_negative_zero_is_positive() {
        assert_eq!(
            Signedness::select(true, Radix::Decimal, true, "00"),
            Signedness::SignedPositive
        );
        assert!(!Signedness::SignedPositive.is_negative());
        assert!(Signedness::SignedNegative.is_negative());
    }

    // ==================== twos_complement tests ====================

    #[test]
    fn test_twos_complement_known_values() {
        // -1 in 8 bits
        assert_eq!(twos_complement("00000001").unwrap(), "11111111");
        // -128 is its own complement
        assert_eq!(twos_complement("10000000").unwrap(), "10000000");
        assert_eq!(twos_complement("0110").unwrap(), "1010");
    }

    #[test]
    fn test_twos_complement_zero_wraps() {
        assert_eq!(twos_complement("0").unwrap(), "0");
        assert_eq!(twos_complement("000").unwrap(), "000");
    }

    #[test]
    fn test_twos_complement_preserves_width() {
        for bits in ["1", "10", "1011", "100000000000000000000000000000000000001"] {
            assert_eq!(twos_complement(bits).unwrap().len(), bits.len());
        }
    }

    #[test]
    fn test_twos_complement_involution() {
        for bits in ["0", "1", "0101010", "1111", "10000000", "0001101011"] {
            let once = twos_complement(bits).unwrap();
            assert_eq!(twos_complement(&once).unwrap(), bits);
        }
    }

    #[test]
    fn test_twos_complement_rejects_non_binary() {
        let err = twos_complement("10a1").unwrap_err();
        assert_eq!(err, ConversionError::invalid_digit('a', Radix::Binary));
    }

    #[test]
    fn test_twos_complement_empty() {
        assert_eq!(twos_complement("").unwrap(), "");
    }
}
