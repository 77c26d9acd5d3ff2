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

//! Supported numeral bases.

use std::fmt;

/// Numeral base of an input or output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    /// Base 10, no prefix.
    #[default]
    Decimal,
    /// Base 2, `0b` prefix.
    Binary,
    /// Base 16, `0x` prefix.
    Hexadecimal,
}

impl Radix {
    /// Output prefix; empty for decimal.
    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Decimal => "",
            Radix::Binary => "0b",
            Radix::Hexadecimal => "0x",
        }
    }

    /// Delimiter inserted between digit groups.
    pub const fn delimiter(self) -> char {
        match self {
            Radix::Decimal => '\'',
            Radix::Binary | Radix::Hexadecimal => ' ',
        }
    }

    /// Default number of digits per group.
    pub const fn default_group(self) -> usize {
        match self {
            Radix::Decimal => 3,
            Radix::Binary | Radix::Hexadecimal => 4,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Decimal => write!(f, "decimal"),
            Radix::Binary => write!(f, "binary"),
            Radix::Hexadecimal => write!(f, "hexadecimal"),
        }
    }
}
