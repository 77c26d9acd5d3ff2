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

//! Shell completion generation

use crate::error::CliError;
use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use bconv_cli::cli::Cli;
/// use bconv_cli::commands::generate_completion;
/// use clap::CommandFactory;
/// use clap_complete::Shell;
///
/// let mut script = Vec::new();
/// generate_completion(Shell::Bash, &mut Cli::command(), &mut script).unwrap();
/// assert!(String::from_utf8(script).unwrap().contains("_bconv()"));
/// ```
///
/// # Errors
///
/// Returns [`CliError::Io`] if flushing the output fails.
pub fn generate_completion<W: Write>(
    shell: Shell,
    cmd: &mut Command,
    out: &mut W,
) -> Result<(), CliError> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
    out.flush()?;
    Ok(())
}
