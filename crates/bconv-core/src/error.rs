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

//! Error types for conversions.

use crate::radix::Radix;
use std::fmt;
use thiserror::Error;

/// The kind of error that aborted a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// Character not legal for the detected radix.
    InvalidDigit,
    /// Binary group that is not one of the 16 nibble patterns.
    InvalidNibble,
    /// Nothing left to convert after sanitizing.
    EmptyInput,
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigit => write!(f, "InvalidDigit"),
            Self::InvalidNibble => write!(f, "InvalidNibble"),
            Self::EmptyInput => write!(f, "EmptyInput"),
        }
    }
}

/// An error that aborted a single conversion.
///
/// Conversions never fall back to a guessed value: any of these errors means
/// no representation was produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A character is not a digit of the detected radix.
    #[error("Invalid {radix} digit '{digit}'")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// The radix the input was classified as
        radix: Radix,
    },

    /// A binary group could not be mapped to a hexadecimal digit.
    ///
    /// Unreachable for well-formed binary strings, but reported rather than
    /// panicking.
    #[error("Invalid nibble '{nibble}'")]
    InvalidNibble {
        /// The offending group of bits
        nibble: String,
    },

    /// The input contains no digits once prefix and separators are removed.
    #[error("No digits to convert")]
    EmptyInput,
}

impl ConversionError {
    /// Create an invalid digit error.
    pub fn invalid_digit(digit: char, radix: Radix) -> Self {
        Self::InvalidDigit { digit, radix }
    }

    /// Create an invalid nibble error.
    pub fn invalid_nibble(nibble: impl Into<String>) -> Self {
        Self::InvalidNibble {
            nibble: nibble.into(),
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ConversionErrorKind {
        match self {
            Self::InvalidDigit { .. } => ConversionErrorKind::InvalidDigit,
            Self::InvalidNibble { .. } => ConversionErrorKind::InvalidNibble,
            Self::EmptyInput => ConversionErrorKind::EmptyInput,
        }
    }
}

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConversionError>;
