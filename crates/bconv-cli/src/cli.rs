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

//! Command-line definition and option assembly.
//!
//! All flags must come before the number: once the first NUMBER token is
//! seen, every remaining argument is taken as part of the number.

use crate::commands;
use crate::error::CliError;
use bconv_core::FormatOptions;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io::{self, IsTerminal};
use tracing::debug;

const AFTER_HELP: &str = "\
Base Prefixes:
    <value>     Decimal (no prefix)
  0b<value>     Binary
  0x<value>     Hexadecimal

Separators ' ', '-', ''' and '_' inside the number are ignored.
Without a NUMBER, numbers are read from stdin one per line
(exit, quit or q ends the session).

Example:
  bconv --padding --grouping --signed 0xFFAB7100F

      in:   0xFFAB7100F
    -----------------------------------------------------
     dec:   -88'666'097
     bin:   1111 1111 1010 1011 0111 0001 0000 0000 1111
     hex:   F FAB7 100F
    -----------------------------------------------------";

/// bconv - Convert between decimal, binary and hexadecimal
///
/// # Examples
///
/// ```bash
/// # Signed, padded and grouped conversion
/// bconv --signed --padding --grouping 0xFFAB7100F
///
/// # Negative decimal input
/// bconv --signed -42
///
/// # Interactive session
/// bconv --grouping
/// ```
#[derive(Parser, Debug)]
#[command(name = "bconv")]
#[command(author, version, about = "bconv - Convert between decimal, binary and hexadecimal", long_about = None)]
#[command(after_help = AFTER_HELP)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Interpret input as signed (two's complement)
    #[arg(long)]
    pub signed: bool,

    /// Add leading zeroes to binary output
    #[arg(long)]
    pub padding: bool,

    /// Include base prefixes in output
    #[arg(long)]
    pub prefixed: bool,

    /// Group digits for readability
    #[arg(long)]
    pub grouping: bool,

    /// Set number of decimal digits to group together (0 disables)
    #[arg(long, value_name = "N", num_args = 0..=1, require_equals = true)]
    pub decgroup: Option<Option<String>>,

    /// Set number of binary digits to group together (0 disables)
    #[arg(long, value_name = "N", num_args = 0..=1, require_equals = true)]
    pub bingroup: Option<Option<String>>,

    /// Set number of hexadecimal digits to group together (0 disables)
    #[arg(long, value_name = "N", num_args = 0..=1, require_equals = true)]
    pub hexgroup: Option<Option<String>>,

    /// Disable decorative output formatting
    #[arg(long)]
    pub no_decoration: bool,

    /// Disable coloured error output
    #[arg(long)]
    pub no_color: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Number to convert; multiple tokens are joined into one
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub number: Vec<String>,
}

impl Cli {
    /// Assemble the formatting options from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MalformedOption`] when a group size flag has no
    /// value or a value that is not a non-negative integer.
    pub fn format_options(&self) -> Result<FormatOptions, CliError> {
        let defaults = FormatOptions::default();

        let options = FormatOptions::builder()
            .signed(self.signed)
            .padding(self.padding)
            .prefixed(self.prefixed)
            .grouping(self.grouping)
            .dec_group(group_size("--decgroup", &self.decgroup, defaults.dec_group)?)
            .bin_group(group_size("--bingroup", &self.bingroup, defaults.bin_group)?)
            .hex_group(group_size("--hexgroup", &self.hexgroup, defaults.hex_group)?)
            .decoration(!self.no_decoration)
            .build();

        debug!(?options, "resolved format options");
        Ok(options)
    }

    /// Run the invocation: completions, a one-shot conversion, or an
    /// interactive session when no number was given.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed options, a failed one-shot conversion,
    /// or an I/O failure.
    pub fn execute(self) -> Result<(), CliError> {
        if !colors_enabled(self.no_color, io::stderr().is_terminal()) {
            colored::control::set_override(false);
        }

        if let Some(shell) = self.completions {
            let mut cmd = Cli::command();
            return commands::generate_completion(shell, &mut cmd, &mut io::stdout());
        }

        let options = self.format_options()?;

        if self.number.is_empty() {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            commands::run_session(
                stdin.lock(),
                &mut io::stdout(),
                &mut io::stderr(),
                &options,
                prompt,
            )
        } else {
            commands::convert_once(&self.number, &options, &mut io::stdout())
        }
    }
}

/// Whether error output may be coloured.
///
/// Errors go to stderr, so colours are off whenever stderr is not a
/// terminal, regardless of what `colored` infers from stdout.
pub fn colors_enabled(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

fn group_size(
    option: &str,
    value: &Option<Option<String>>,
    default: usize,
) -> Result<usize, CliError> {
    match value {
        None => Ok(default),
        Some(None) => Err(CliError::malformed_option(option, "")),
        Some(Some(raw)) => raw
            .parse::<usize>()
            .map_err(|_| CliError::malformed_option(option, raw.as_str())),
    }
}
