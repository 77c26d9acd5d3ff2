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

//! Output formatting: padding, grouping, prefixes and the printed layout.

use crate::convert::Representation;
use crate::options::FormatOptions;
use crate::radix::Radix;

/// Width of the `"\t dec: \t"` label column plus one, as counted by the
/// separator rule.
const LABEL_WIDTH: usize = 9;

/// Left-pad a binary string to a multiple of four characters.
///
/// The fill is `0`, or the current most significant bit when `signed` is set
/// so the padded value keeps its two's complement meaning.
///
/// # Examples
///
/// ```
/// use bconv_core::format::pad_binary;
///
/// assert_eq!(pad_binary("101", false), "0101");
/// assert_eq!(pad_binary("101", true), "1101");
/// assert_eq!(pad_binary("1010", true), "1010");
/// ```
pub fn pad_binary(bits: &str, signed: bool) -> String {
    let len = bits.chars().count();
    let missing = (4 - len % 4) % 4;
    if missing == 0 {
        return bits.to_string();
    }

    let fill = if signed {
        bits.chars().next().unwrap_or('0')
    } else {
        '0'
    };

    let mut padded = String::with_capacity(bits.len() + missing);
    padded.extend(std::iter::repeat(fill).take(missing));
    padded.push_str(bits);
    padded
}

/// Insert the radix delimiter every `size` characters, counting from the
/// least significant end.
///
/// A `size` of zero leaves the value untouched.
///
/// # Examples
///
/// ```
/// use bconv_core::format::group;
/// use bconv_core::Radix;
///
/// assert_eq!(group("88666097", Radix::Decimal, 3), "88'666'097");
/// assert_eq!(group("FFAB7100F", Radix::Hexadecimal, 4), "F FAB7 100F");
/// assert_eq!(group("101010", Radix::Binary, 0), "101010");
/// ```
pub fn group(value: &str, radix: Radix, size: usize) -> String {
    if size == 0 {
        return value.to_string();
    }

    let delimiter = radix.delimiter();
    let chars: Vec<char> = value.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / size);

    for (idx, ch) in chars.iter().enumerate() {
        let remaining = chars.len() - idx;
        if idx != 0 && remaining % size == 0 {
            grouped.push(delimiter);
        }
        grouped.push(*ch);
    }

    grouped
}

/// Prepend the radix prefix (`0b`, `0x`; nothing for decimal).
pub fn prefix(value: &str, radix: Radix) -> String {
    format!("{}{}", radix.prefix(), value)
}

/// Lay out a representation for printing.
///
/// With decoration enabled, the input is echoed above a separator rule as
/// wide as the longest line, followed by the three values and a closing
/// rule. Without it, only the three labelled values are emitted.
///
/// # Examples
///
/// ```
/// use bconv_core::{convert, render, FormatOptions};
///
/// let options = FormatOptions::new().with_decoration(false);
/// let repr = convert("42", &options).unwrap();
///
/// assert_eq!(
///     render(&repr, "42", &options),
///     " dec: \t42\n bin: \t101010\n hex: \t2A\n"
/// );
/// ```
pub fn render(repr: &Representation, input: &str, options: &FormatOptions) -> String {
    let width = [repr.decimal.as_str(), repr.binary.as_str(), repr.hex.as_str(), input]
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0);

    let indent = if options.decoration { "\t" } else { "" };
    let rule = "-".repeat(width + LABEL_WIDTH);

    let mut out = String::new();
    if options.decoration {
        out.push_str(&format!("\t  in: \t{}\n", input));
        out.push_str(&format!("\t{}\n", rule));
    }
    out.push_str(&format!("{} dec: \t{}\n", indent, repr.decimal));
    out.push_str(&format!("{} bin: \t{}\n", indent, repr.binary));
    out.push_str(&format!("{} hex: \t{}\n", indent, repr.hex));
    if options.decoration {
        out.push_str(&format!("\t{}\n", rule));
    }
    out
}
