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

//! Input classification and sanitizing.
//!
//! The radix is taken from the prefix: `0b`/`0B` for binary, `0x`/`0X` for
//! hexadecimal, decimal otherwise. Prefix detection needs more than two
//! characters, so `0b` or `0x` on its own is read as decimal.
//!
//! Separators (space, `-`, `'`, `_`) are removed wherever they appear. This
//! includes a `-` in the middle of the digits, which is dropped rather than
//! rejected.

use crate::error::{ConversionError, ConvertResult};
use crate::radix::Radix;
use tracing::debug;

/// Characters removed from the digits before conversion.
pub const SEPARATORS: [char; 4] = [' ', '-', '\'', '_'];

/// A raw token split into radix, sign and clean digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Radix detected from the prefix.
    pub radix: Radix,
    /// Decimal input with a leading minus.
    pub negative: bool,
    /// Digits with prefix and separators removed. Not yet validated.
    pub digits: String,
}

/// Detect the radix of a raw token from its prefix.
///
/// # Examples
///
/// ```
/// use bconv_core::classify::detect_radix;
/// use bconv_core::Radix;
///
/// assert_eq!(detect_radix("0x1F"), Radix::Hexadecimal);
/// assert_eq!(detect_radix("0B101"), Radix::Binary);
/// assert_eq!(detect_radix("0x"), Radix::Decimal);
/// assert_eq!(detect_radix("1234"), Radix::Decimal);
/// ```
pub fn detect_radix(raw: &str) -> Radix {
    if raw.len() <= 2 {
        return Radix::Decimal;
    }

    match raw.get(..2) {
        Some("0b") | Some("0B") => Radix::Binary,
        Some("0x") | Some("0X") => Radix::Hexadecimal,
        _ => Radix::Decimal,
    }
}

/// Remove every separator character.
///
/// # Examples
///
/// ```
/// use bconv_core::classify::sanitize;
///
/// assert_eq!(sanitize("1'234'567"), "1234567");
/// assert_eq!(sanitize("FF_FF 00-00"), "FFFF0000");
/// ```
pub fn sanitize(digits: &str) -> String {
    digits.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Classify a raw token.
///
/// Surrounding whitespace is ignored. The leading minus of a decimal token
/// is recorded in [`Classified::negative`] and removed with the other
/// separators.
///
/// # Errors
///
/// Returns [`ConversionError::EmptyInput`] if no digits remain.
///
/// # Examples
///
/// ```
/// use bconv_core::{classify, Radix};
///
/// let input = classify("-1'024").unwrap();
/// assert_eq!(input.radix, Radix::Decimal);
/// assert!(input.negative);
/// assert_eq!(input.digits, "1024");
///
/// let input = classify("0xDEAD_BEEF").unwrap();
/// assert_eq!(input.radix, Radix::Hexadecimal);
/// assert_eq!(input.digits, "DEADBEEF");
/// ```
pub fn classify(raw: &str) -> ConvertResult<Classified> {
    let raw = raw.trim();
    let radix = detect_radix(raw);
    let negative = radix == Radix::Decimal && raw.starts_with('-');

    let body = match radix {
        Radix::Decimal => raw,
        Radix::Binary | Radix::Hexadecimal => &raw[2..],
    };

    let digits = sanitize(body);
    if digits.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    debug!(input = raw, %radix, negative, "classified input");

    Ok(Classified {
        radix,
        negative,
        digits,
    })
}
