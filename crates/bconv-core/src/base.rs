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

//! Arbitrary-precision conversion between digit strings.
//!
//! Every function here takes a clean digit string (no prefix, no separators)
//! and treats it as an unsigned magnitude, most significant digit first.
//! Values are accumulated in a [`BigUint`], so input length is unbounded.
//!
//! # Examples
//!
//! ```
//! use bconv_core::base::{binary_to_decimal, decimal_to_binary, hex_to_decimal};
//!
//! assert_eq!(decimal_to_binary("42").unwrap(), "101010");
//! assert_eq!(binary_to_decimal("101010").unwrap(), "42");
//! assert_eq!(hex_to_decimal("ff").unwrap(), "255");
//! ```

use crate::codec::{hex_digit_to_nibble, nibble_to_hex_digit};
use crate::error::{ConversionError, ConvertResult};
use crate::format::pad_binary;
use crate::radix::Radix;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Parse a decimal digit string into a magnitude.
///
/// Accumulates with multiply-by-10-and-add.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for any non-decimal character.
pub fn parse_decimal(digits: &str) -> ConvertResult<BigUint> {
    let mut value = BigUint::zero();
    for ch in digits.chars() {
        let digit = ch
            .to_digit(10)
            .ok_or_else(|| ConversionError::invalid_digit(ch, Radix::Decimal))?;
        value = value * 10u32 + digit;
    }
    Ok(value)
}

/// Parse a binary digit string into a magnitude.
///
/// Sums `digit * 2^position` over every set bit.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for any character other than
/// `0` or `1`.
pub fn parse_binary(bits: &str) -> ConvertResult<BigUint> {
    let mut sum = BigUint::zero();
    for (position, ch) in bits.chars().rev().enumerate() {
        match ch {
            '0' => {}
            '1' => sum += BigUint::one() << position,
            _ => return Err(ConversionError::invalid_digit(ch, Radix::Binary)),
        }
    }
    Ok(sum)
}

/// Convert an unsigned decimal digit string to binary, most significant bit
/// first.
///
/// Zero converts to `"0"`; otherwise the result has no leading zeros.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for any non-decimal character.
pub fn decimal_to_binary(digits: &str) -> ConvertResult<String> {
    let mut remainder = parse_decimal(digits)?;

    // the divide loop below emits nothing for zero
    if remainder.is_zero() {
        return Ok("0".to_string());
    }

    let mut reversed = Vec::with_capacity(remainder.bits() as usize);
    while !remainder.is_zero() {
        reversed.push(if (&remainder % 2u32).is_zero() { '0' } else { '1' });
        remainder >>= 1u32;
    }

    Ok(reversed.into_iter().rev().collect())
}

/// Convert an unsigned binary digit string to decimal.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for any character other than
/// `0` or `1`.
pub fn binary_to_decimal(bits: &str) -> ConvertResult<String> {
    parse_binary(bits).map(|value| value.to_string())
}

/// Convert a hexadecimal digit string to binary, four bits per digit.
///
/// Leading zero digits are kept as `0000` groups.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidDigit`] for any non-hexadecimal character.
pub fn hex_to_binary(digits: &str) -> ConvertResult<String> {
    let mut bits = String::with_capacity(digits.len() * 4);
    for digit in digits.chars() {
        bits.push_str(hex_digit_to_nibble(digit)?);
    }
    Ok(bits)
}

/// Convert a binary digit string to uppercase hexadecimal.
///
/// The bits are first padded to a multiple of four: with the sign bit when
/// `signed` is set, with zeros otherwise.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidNibble`] if a group of bits is not a
/// valid nibble.
pub fn binary_to_hex(bits: &str, signed: bool) -> ConvertResult<String> {
    let padded: Vec<char> = pad_binary(bits, signed).chars().collect();

    let mut hex = String::with_capacity(padded.len() / 4);
    for chunk in padded.chunks(4) {
        let nibble: String = chunk.iter().collect();
        hex.push(nibble_to_hex_digit(&nibble)?);
    }
    Ok(hex)
}

/// Convert a hexadecimal digit string to decimal.
pub fn hex_to_decimal(digits: &str) -> ConvertResult<String> {
    binary_to_decimal(&hex_to_binary(digits)?)
}

/// Convert an unsigned decimal digit string to uppercase hexadecimal.
pub fn decimal_to_hex(digits: &str) -> ConvertResult<String> {
    binary_to_hex(&decimal_to_binary(digits)?, false)
}
