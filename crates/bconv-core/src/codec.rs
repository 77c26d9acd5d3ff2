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

//! Digit codec: hexadecimal digits to and from 4-bit binary strings.
//!
//! Both directions are plain table lookups indexed by digit value.
//!
//! # Examples
//!
//! ```
//! use bconv_core::codec::{hex_digit_to_nibble, nibble_to_hex_digit};
//!
//! assert_eq!(hex_digit_to_nibble('b').unwrap(), "1011");
//! assert_eq!(nibble_to_hex_digit("1011").unwrap(), 'B');
//! ```

use crate::error::{ConversionError, ConvertResult};
use crate::radix::Radix;

/// Marker for bytes that are not hexadecimal digits.
const NOT_A_DIGIT: u8 = 0xFF;

/// Binary string for each nibble value.
static NIBBLES: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111",
    "1000", "1001", "1010", "1011", "1100", "1101", "1110", "1111",
];

/// Canonical (uppercase) hexadecimal digit for each nibble value.
static HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7',
    '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Digit value of each 7-bit ASCII byte, or [`NOT_A_DIGIT`].
static DIGIT_VALUES: [u8; 128] = digit_values();

const fn digit_values() -> [u8; 128] {
    let mut table = [NOT_A_DIGIT; 128];

    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }

    let mut i = 0;
    while i < 6 {
        table[b'A' as usize + i] = 10 + i as u8;
        table[b'a' as usize + i] = 10 + i as u8;
        i += 1;
    }

    table
}

/// Value of a hexadecimal digit (case-insensitive).
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for anything outside
/// `0-9`, `A-F`, `a-f`.
pub fn hex_digit_value(digit: char) -> ConvertResult<u8> {
    let value = DIGIT_VALUES
        .get(digit as usize)
        .copied()
        .unwrap_or(NOT_A_DIGIT);

    if value == NOT_A_DIGIT {
        return Err(ConversionError::invalid_digit(digit, Radix::Hexadecimal));
    }
    Ok(value)
}

/// Map one hexadecimal digit to its 4-bit binary string.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for anything outside
/// `0-9`, `A-F`, `a-f`.
pub fn hex_digit_to_nibble(digit: char) -> ConvertResult<&'static str> {
    hex_digit_value(digit).map(|value| NIBBLES[value as usize])
}

/// Map a 4-bit binary string to its uppercase hexadecimal digit.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidNibble`] unless `nibble` is exactly four
/// characters, each `0` or `1`.
pub fn nibble_to_hex_digit(nibble: &str) -> ConvertResult<char> {
    let bytes = nibble.as_bytes();
    if bytes.len() != 4 {
        return Err(ConversionError::invalid_nibble(nibble));
    }

    let mut index = 0usize;
    for &bit in bytes {
        let value = match bit {
            b'0' => 0,
            b'1' => 1,
            _ => return Err(ConversionError::invalid_nibble(nibble)),
        };
        index = (index << 1) | value;
    }

    Ok(HEX_DIGITS[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversionErrorKind;

    // ==================== hex_digit_to_nibble tests ====================

    #[test]
    fn test_every_digit_maps_to_its_nibble() {
        for (value, expected) in NIBBLES.iter().enumerate() {
            let digit = std::char::from_digit(value as u32, 16).unwrap();
            assert_eq!(hex_digit_to_nibble(digit).unwrap(), *expected);
            assert_eq!(
                hex_digit_to_nibble(digit.to_ascii_uppercase()).unwrap(),
                *expected
            );
        }
    }

    #[test]
    fn test_invalid_hex_digit() {
        for digit in ['G', 'g', 'x', ' ', '-', 'é', '\u{0}'] {
            let err = hex_digit_to_nibble(digit).unwrap_err();
            assert_eq!(err, ConversionError::invalid_digit(digit, Radix::Hexadecimal));
        }
    }

    // ==================== nibble_to_hex_digit tests ====================

    #[test]
    fn test_every_nibble_maps_to_uppercase_digit() {
        for (value, nibble) in NIBBLES.iter().enumerate() {
            assert_eq!(nibble_to_hex_digit(nibble).unwrap(), HEX_DIGITS[value]);
        }
        assert_eq!(nibble_to_hex_digit("1111").unwrap(), 'F');
    }

    #[test]
    fn test_invalid_nibble_length() {
        for nibble in ["", "0", "101", "10101"] {
            let err = nibble_to_hex_digit(nibble).unwrap_err();
            assert_eq!(err.kind(), ConversionErrorKind::InvalidNibble);
        }
    }

    #[test]
    fn test_invalid_nibble_characters() {
        for nibble in ["0120", "abcd", "1 01", "１０１"] {
            let err = nibble_to_hex_digit(nibble).unwrap_err();
            assert_eq!(err, ConversionError::invalid_nibble(nibble));
        }
    }

    #[test]
    fn test_digit_nibble_roundtrip() {
        for digit in "0123456789ABCDEF".chars() {
            let nibble = hex_digit_to_nibble(digit).unwrap();
            assert_eq!(nibble_to_hex_digit(nibble).unwrap(), digit);
        }
    }
}
