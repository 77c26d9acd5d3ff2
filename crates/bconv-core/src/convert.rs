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

//! The conversion pipeline.

use crate::base::{binary_to_decimal, binary_to_hex, decimal_to_binary, hex_to_binary};
use crate::classify::{classify, SEPARATORS};
use crate::error::ConvertResult;
use crate::format::{group, pad_binary, prefix};
use crate::options::FormatOptions;
use crate::radix::Radix;
use crate::twos::{twos_complement, Signedness};
use num_bigint::BigInt;
use tracing::{debug, trace};

/// The decimal, binary and hexadecimal forms of one value.
///
/// All three denote the same integer under the signedness the options
/// selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representation {
    /// Decimal form, with a leading minus when negative.
    pub decimal: String,
    /// Binary form.
    pub binary: String,
    /// Hexadecimal form (uppercase).
    pub hex: String,
}

impl Representation {
    /// The integer this representation denotes.
    ///
    /// Read back from the decimal form with grouping delimiters removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bconv_core::{convert, FormatOptions};
    /// use num_bigint::BigInt;
    ///
    /// let options = FormatOptions::new().with_signed(true).with_grouping(true);
    /// let repr = convert("0xFFFF_FF85", &options).unwrap();
    /// assert_eq!(repr.value().unwrap(), BigInt::from(-123));
    /// ```
    pub fn value(&self) -> ConvertResult<BigInt> {
        let (negative, magnitude) = match self.decimal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.decimal.as_str()),
        };

        let digits: String = magnitude
            .chars()
            .filter(|c| !SEPARATORS.contains(c))
            .collect();
        let value = BigInt::from(crate::base::parse_decimal(&digits)?);

        Ok(if negative { -value } else { value })
    }
}

/// Convert a raw token into its three representations.
///
/// Steps, in order: classify, sanitize, derive all three bases, apply the
/// signed interpretation, pad, group, prefix, prepend the minus sign.
///
/// # Errors
///
/// - [`crate::ConversionError::EmptyInput`] if the token has no digits.
/// - [`crate::ConversionError::InvalidDigit`] if a digit is illegal for the radix.
/// - [`crate::ConversionError::InvalidNibble`] on an internal hex mapping failure.
///
/// No partial result is produced on error.
///
/// # Examples
///
/// ```
/// use bconv_core::{convert, FormatOptions};
///
/// let options = FormatOptions::new().with_signed(true).with_padding(true);
/// let repr = convert("-42", &options).unwrap();
///
/// assert_eq!(repr.decimal, "-42");
/// assert_eq!(repr.binary, "11010110");
/// assert_eq!(repr.hex, "D6");
/// ```
pub fn convert(raw: &str, options: &FormatOptions) -> ConvertResult<Representation> {
    let input = classify(raw)?;

    let (mut decimal, mut binary, mut hex) = match input.radix {
        Radix::Decimal => {
            let magnitude = decimal_to_binary(&input.digits)?;
            // room for the sign bit
            let bits = if options.signed {
                format!("0{}", magnitude)
            } else {
                magnitude
            };
            let decimal = binary_to_decimal(&bits)?;
            let hex = binary_to_hex(&bits, options.signed)?;
            (decimal, bits, hex)
        }
        Radix::Binary => {
            let decimal = binary_to_decimal(&input.digits)?;
            let hex = binary_to_hex(&input.digits, options.signed)?;
            (decimal, input.digits.clone(), hex)
        }
        Radix::Hexadecimal => {
            let bits = hex_to_binary(&input.digits)?;
            let decimal = binary_to_decimal(&bits)?;
            let hex = binary_to_hex(&bits, options.signed)?;
            (decimal, bits, hex)
        }
    };
    trace!(%decimal, %binary, %hex, "converted bases");

    let sign = Signedness::select(options.signed, input.radix, input.negative, &binary);
    debug!(?sign, radix = %input.radix, "selected signedness");

    if sign.is_negative() {
        match input.radix {
            Radix::Binary | Radix::Hexadecimal => {
                decimal = binary_to_decimal(&twos_complement(&binary)?)?;
            }
            Radix::Decimal => {
                binary = twos_complement(&binary)?;
                hex = binary_to_hex(&binary, true)?;
            }
        }
        trace!(%decimal, %binary, %hex, "applied two's complement");
    }

    if options.padding {
        binary = pad_binary(&binary, options.signed);
    }

    if options.grouping {
        decimal = group(&decimal, Radix::Decimal, options.group_size(Radix::Decimal));
        binary = group(&binary, Radix::Binary, options.group_size(Radix::Binary));
        hex = group(&hex, Radix::Hexadecimal, options.group_size(Radix::Hexadecimal));
    }

    if options.prefixed {
        binary = prefix(&binary, Radix::Binary);
        hex = prefix(&hex, Radix::Hexadecimal);
    }

    if sign.is_negative() {
        decimal.insert(0, '-');
    }

    Ok(Representation {
        decimal,
        binary,
        hex,
    })
}
