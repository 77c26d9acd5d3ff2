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

//! Conversion and output options.
//!
//! Options are built once per invocation and passed by reference into every
//! conversion; nothing is reset between interactive lines.

use crate::radix::Radix;

/// Options controlling how a value is interpreted and formatted.
///
/// # Examples
///
/// ```
/// use bconv_core::FormatOptions;
///
/// // Defaults: unsigned, no padding, no prefixes, no grouping, decorated
/// let options = FormatOptions::default();
/// assert!(!options.signed);
/// assert!(options.decoration);
/// assert_eq!(options.dec_group, 3);
///
/// // Chained configuration
/// let options = FormatOptions::new()
///     .with_signed(true)
///     .with_grouping(true)
///     .with_bin_group(8);
/// assert_eq!(options.bin_group, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct FormatOptions {
    /// Interpret values as two's complement.
    ///
    /// Binary and hexadecimal inputs with the top bit set are shown as
    /// negative decimals; negative decimal inputs get a two's complement
    /// binary and hexadecimal encoding.
    ///
    /// Default: `false`
    pub signed: bool,

    /// Pad the binary output to whole nibbles (sign-extended when signed).
    ///
    /// Default: `false`
    pub padding: bool,

    /// Prefix the binary and hexadecimal outputs with `0b` / `0x`.
    ///
    /// Default: `false`
    pub prefixed: bool,

    /// Group digits for readability.
    ///
    /// Default: `false`
    pub grouping: bool,

    /// Decimal digits per group; `0` disables decimal grouping.
    ///
    /// Default: `3`
    pub dec_group: usize,

    /// Binary digits per group; `0` disables binary grouping.
    ///
    /// Default: `4`
    pub bin_group: usize,

    /// Hexadecimal digits per group; `0` disables hexadecimal grouping.
    ///
    /// Default: `4`
    pub hex_group: usize,

    /// Emit the bordered layout with the echoed input.
    ///
    /// Default: `true`
    pub decoration: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            signed: false,
            padding: false,
            prefixed: false,
            grouping: false,
            dec_group: Radix::Decimal.default_group(),
            bin_group: Radix::Binary.default_group(),
            hex_group: Radix::Hexadecimal.default_group(),
            decoration: true,
        }
    }
}

impl FormatOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for options.
    pub fn builder() -> FormatOptionsBuilder {
        FormatOptionsBuilder::new()
    }

    /// Set signed interpretation.
    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// Set nibble padding of the binary output.
    pub fn with_padding(mut self, padding: bool) -> Self {
        self.padding = padding;
        self
    }

    /// Set `0b` / `0x` prefixes.
    pub fn with_prefixed(mut self, prefixed: bool) -> Self {
        self.prefixed = prefixed;
        self
    }

    /// Set digit grouping.
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Set the decimal group size.
    pub fn with_dec_group(mut self, size: usize) -> Self {
        self.dec_group = size;
        self
    }

    /// Set the binary group size.
    pub fn with_bin_group(mut self, size: usize) -> Self {
        self.bin_group = size;
        self
    }

    /// Set the hexadecimal group size.
    pub fn with_hex_group(mut self, size: usize) -> Self {
        self.hex_group = size;
        self
    }

    /// Set the decorated layout.
    pub fn with_decoration(mut self, decoration: bool) -> Self {
        self.decoration = decoration;
        self
    }

    /// Group size configured for a radix.
    pub fn group_size(&self, radix: Radix) -> usize {
        match radix {
            Radix::Decimal => self.dec_group,
            Radix::Binary => self.bin_group,
            Radix::Hexadecimal => self.hex_group,
        }
    }
}

/// Builder for [`FormatOptions`].
///
/// # Examples
///
/// ```
/// use bconv_core::FormatOptions;
///
/// let options = FormatOptions::builder()
///     .signed(true)
///     .padding(true)
///     .hex_group(2)
///     .build();
///
/// assert!(options.signed);
/// assert!(options.padding);
/// assert_eq!(options.hex_group, 2);
/// ```
#[derive(Debug, Clone)]
pub struct FormatOptionsBuilder {
    options: FormatOptions,
}

impl FormatOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: FormatOptions::default(),
        }
    }

    /// Interpret values as two's complement.
    pub fn signed(mut self, signed: bool) -> Self {
        self.options.signed = signed;
        self
    }

    /// Pad the binary output to whole nibbles.
    pub fn padding(mut self, padding: bool) -> Self {
        self.options.padding = padding;
        self
    }

    /// Prefix binary and hexadecimal outputs.
    pub fn prefixed(mut self, prefixed: bool) -> Self {
        self.options.prefixed = prefixed;
        self
    }

    /// Group digits.
    pub fn grouping(mut self, grouping: bool) -> Self {
        self.options.grouping = grouping;
        self
    }

    /// Decimal digits per group.
    pub fn dec_group(mut self, size: usize) -> Self {
        self.options.dec_group = size;
        self
    }

    /// Binary digits per group.
    pub fn bin_group(mut self, size: usize) -> Self {
        self.options.bin_group = size;
        self
    }

    /// Hexadecimal digits per group.
    pub fn hex_group(mut self, size: usize) -> Self {
        self.options.hex_group = size;
        self
    }

    /// Emit the bordered layout.
    pub fn decoration(mut self, decoration: bool) -> Self {
        self.options.decoration = decoration;
        self
    }

    /// Build the options.
    pub fn build(self) -> FormatOptions {
        self.options
    }
}

impl Default for FormatOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Default tests ====================

    #[test]
    fn test_default_flags() {
        let options = FormatOptions::default();
        assert!(!options.signed);
        assert!(!options.padding);
        assert!(!options.prefixed);
        assert!(!options.grouping);
        assert!(options.decoration);
    }

    #[test]
    fn test_default_group_sizes() {
        let options = FormatOptions::default();
        assert_eq!(options.dec_group, 3);
        assert_eq!(options.bin_group, 4);
        assert_eq!(options.hex_group, 4);
    }

    // ==================== with_* tests ====================

    #[test]
    fn test_with_methods_chain() {
        let options = FormatOptions::new()
            .with_signed(true)
            .with_padding(true)
            .with_prefixed(true)
            .with_grouping(true)
            .with_dec_group(0)
            .with_bin_group(8)
            .with_hex_group(2)
            .with_decoration(false);

        assert!(options.signed && options.padding && options.prefixed && options.grouping);
        assert!(!options.decoration);
        assert_eq!(options.group_size(Radix::Decimal), 0);
        assert_eq!(options.group_size(Radix::Binary), 8);
        assert_eq!(options.group_size(Radix::Hexadecimal), 2);
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_builder_defaults_match_default() {
        assert_eq!(FormatOptions::builder().build(), FormatOptions::default());
        assert_eq!(FormatOptionsBuilder::default().build(), FormatOptions::default());
    }

    #[test]
    fn test_builder_matches_with_methods() {
        let built = FormatOptions::builder()
            .signed(true)
            .padding(true)
            .prefixed(true)
            .grouping(true)
            .dec_group(4)
            .bin_group(3)
            .hex_group(1)
            .decoration(false)
            .build();

        let chained = FormatOptions::new()
            .with_signed(true)
            .with_padding(true)
            .with_prefixed(true)
            .with_grouping(true)
            .with_dec_group(4)
            .with_bin_group(3)
            .with_hex_group(1)
            .with_decoration(false);

        assert_eq!(built, chained);
    }
}
