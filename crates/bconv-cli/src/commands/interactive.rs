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

//! Interactive session: one conversion per input line.

use crate::error::CliError;
use bconv_core::{convert, render, FormatOptions};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Prompt shown before each line when input comes from a terminal.
pub const PROMPT: &str = "Enter number to convert: ";

/// Whether a line ends the session (`exit`, `quit` or `q`).
///
/// # Examples
///
/// ```
/// use bconv_cli::commands::is_exit_command;
///
/// assert!(is_exit_command("quit"));
/// assert!(!is_exit_command("0x1F"));
/// ```
pub fn is_exit_command(line: &str) -> bool {
    matches!(line, "exit" | "quit" | "q")
}

/// Read numbers from `input` until an exit command or end of input.
///
/// Each non-empty line is converted with `options` and rendered to `out`. A
/// line that fails to convert is reported on `errors` and the session moves
/// on to the next line. The prompt is written to `out` before every read
/// when `prompt` is set.
///
/// # Errors
///
/// Returns [`CliError::Io`] if reading input or writing output fails.
/// Conversion failures are not returned.
pub fn run_session<R, W, E>(
    input: R,
    out: &mut W,
    errors: &mut E,
    options: &FormatOptions,
    prompt: bool,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    info!(prompt, "starting interactive session");

    let mut lines = input.lines();
    let mut converted = 0usize;
    let mut failed = 0usize;

    loop {
        if prompt {
            out.write_all(PROMPT.as_bytes())?;
            out.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();

        if is_exit_command(line) {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match convert(line, options) {
            Ok(repr) => {
                out.write_all(render(&repr, line, options).as_bytes())?;
                out.flush()?;
                converted += 1;
            }
            Err(e) => {
                debug!(input = line, error = %e, "conversion failed");
                writeln!(errors, "{}", CliError::from(e).report())?;
                failed += 1;
            }
        }
    }

    info!(converted, failed, "interactive session ended");
    Ok(())
}
