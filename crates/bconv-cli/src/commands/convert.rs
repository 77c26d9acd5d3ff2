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

//! One-shot conversion of the NUMBER arguments.

use crate::error::CliError;
use bconv_core::{convert, render, FormatOptions};
use std::io::Write;

/// Join the NUMBER tokens, convert them and return the rendered output.
///
/// Tokens are concatenated without a separator, so `["0xFF", "AB"]` is
/// converted as `0xFFAB`.
///
/// # Errors
///
/// Returns [`CliError::Conversion`] if the joined input cannot be converted.
///
/// # Examples
///
/// ```
/// use bconv_cli::commands::convert_tokens;
/// use bconv_core::FormatOptions;
///
/// let options = FormatOptions::new().with_decoration(false);
/// let out = convert_tokens(&["0x2".to_string(), "A".to_string()], &options).unwrap();
/// assert_eq!(out, " dec: \t42\n bin: \t00101010\n hex: \t2A\n");
/// ```
pub fn convert_tokens(tokens: &[String], options: &FormatOptions) -> Result<String, CliError> {
    let input = tokens.concat();
    let repr = convert(&input, options)?;
    Ok(render(&repr, input.trim(), options))
}

/// Convert the NUMBER tokens and write the result to `out`.
///
/// # Errors
///
/// Returns an error if the conversion fails or the output cannot be written.
/// Nothing is written on a conversion failure.
pub fn convert_once<W: Write>(
    tokens: &[String],
    options: &FormatOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let rendered = convert_tokens(tokens, options)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bconv_core::{ConversionError, Radix};

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_convert_tokens_joins_arguments() {
        let options = FormatOptions::new().with_decoration(false);
        let joined = convert_tokens(&tokens(&["1", "000"]), &options).unwrap();
        let single = convert_tokens(&tokens(&["1000"]), &options).unwrap();
        assert_eq!(joined, single);
    }

    #[test]
    fn test_convert_tokens_joined_hex_keeps_whole_nibbles() {
        let options = FormatOptions::new().with_decoration(false);
        let out = convert_tokens(&tokens(&["0x2", "A"]), &options).unwrap();
        assert_eq!(out, " dec: \t42\n bin: \t00101010\n hex: \t2A\n");
    }

    #[test]
    fn test_convert_tokens_echoes_input() {
        let out = convert_tokens(&tokens(&["0xff"]), &FormatOptions::default()).unwrap();
        assert!(out.starts_with("\t  in: \t0xff\n"));
        assert!(out.contains("\t hex: \tFF\n"));
    }

    #[test]
    fn test_convert_once_writes_nothing_on_error() {
        let mut out = Vec::new();
        let err = convert_once(&tokens(&["0xG1"]), &FormatOptions::default(), &mut out).unwrap_err();

        assert_eq!(
            err,
            CliError::Conversion(ConversionError::invalid_digit('G', Radix::Hexadecimal))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_convert_once_output() {
        let options = FormatOptions::new()
            .with_signed(true)
            .with_padding(true)
            .with_decoration(false);
        let mut out = Vec::new();
        convert_once(&tokens(&["-42"]), &options, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            " dec: \t-42\n bin: \t11010110\n hex: \tD6\n"
        );
    }
}
