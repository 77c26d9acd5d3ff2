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

//! bconv CLI library for command-line parsing and execution.
//!
//! The `bconv` binary converts a number between decimal, binary and
//! hexadecimal. The radix of the input is taken from its prefix (`0b`, `0x`,
//! or none for decimal).
//!
//! # Modes
//!
//! - **One-shot**: `bconv [OPTIONS] NUMBER...` converts the joined NUMBER
//!   tokens, prints the result and exits. A failed conversion exits with
//!   status 1.
//! - **Interactive**: with no NUMBER, lines are read from stdin and converted
//!   one at a time until `exit`, `quit`, `q` or end of input. A failed line
//!   is reported and the session continues.
//!
//! # Options
//!
//! - `--signed`: two's complement interpretation
//! - `--padding`: pad binary output to whole nibbles
//! - `--prefixed`: add `0b`/`0x` to the output
//! - `--grouping`: group digits, with sizes from `--decgroup=N`,
//!   `--bingroup=N` and `--hexgroup=N`
//! - `--no-decoration`: print only the three values
//! - `--no-color`: plain error output (`NO_COLOR` is honoured as well)
//! - `--completions <SHELL>`: print a completion script
//!
//! # Logging
//!
//! Diagnostics are written to stderr through `tracing`. Set `BCONV_LOG`
//! (default `warn`) to see them.
//!
//! # Examples
//!
//! ```
//! use bconv_cli::commands::convert_tokens;
//! use bconv_core::FormatOptions;
//!
//! let options = FormatOptions::new()
//!     .with_signed(true)
//!     .with_decoration(false);
//! let out = convert_tokens(&["0xFF".to_string()], &options).unwrap();
//! assert!(out.starts_with(" dec: \t-1\n"));
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
