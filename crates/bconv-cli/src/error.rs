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

//! Structured error types for the bconv CLI.
//!
//! All CLI operations return `Result<T, CliError>`; `main` reports the error
//! on stderr and exits with a failure code.

use bconv_core::ConversionError;
use colored::Colorize;
use std::io;
use thiserror::Error;

/// The main error type for bconv CLI operations.
///
/// # Examples
///
/// ```
/// use bconv_cli::error::CliError;
///
/// let err = CliError::malformed_option("--bingroup", "four");
/// assert_eq!(err.to_string(), "Malformed argument '--bingroup=four'");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A grouping option was given without a value, or with a value that is
    /// not a non-negative integer.
    #[error("Malformed argument '{option}={value}'")]
    MalformedOption {
        /// The option name, including the leading dashes
        option: String,
        /// The raw value (empty when missing)
        value: String,
    },

    /// The input could not be converted.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Reading input or writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create a malformed option error.
    pub fn malformed_option(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedOption {
            option: option.into(),
            value: value.into(),
        }
    }

    /// Create an I/O error from the underlying [`io::Error`].
    pub fn io_error(source: io::Error) -> Self {
        Self::Io {
            message: source.to_string(),
        }
    }

    /// Format the error the way it is printed on stderr.
    ///
    /// `error:` is red when colours are enabled.
    pub fn report(&self) -> String {
        format!("bconv: {} {}", "error:".red().bold(), self)
    }
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::io_error(source)
    }
}
