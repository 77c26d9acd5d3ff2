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

//! Conformance tests for documented conversion behaviour.

use bconv_core::{convert, render, ConversionError, ConversionErrorKind, FormatOptions, Radix};
use num_bigint::BigInt;

fn options(signed: bool, padding: bool, grouping: bool) -> FormatOptions {
    FormatOptions::new()
        .with_signed(signed)
        .with_padding(padding)
        .with_grouping(grouping)
}

// ===== Documented examples =====

#[test]
fn test_documented_help_example() {
    let repr = convert("0xFFAB7100F", &options(true, true, true)).unwrap();

    assert_eq!(repr.decimal, "-88'666'097");
    assert_eq!(repr.binary, "1111 1111 1010 1011 0111 0001 0000 0000 1111");
    assert_eq!(repr.hex, "F FAB7 100F");
}

#[test]
fn test_documented_example_unsigned() {
    let repr = convert("0xFFAB7100F", &options(false, true, true)).unwrap();

    assert_eq!(repr.decimal, "68'630'810'639");
    assert_eq!(repr.hex, "F FAB7 100F");
}

#[test]
fn test_documented_help_layout() {
    let opts = options(true, true, true);
    let repr = convert("0xFFAB7100F", &opts).unwrap();
    let out = render(&repr, "0xFFAB7100F", &opts);

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "\t  in: \t0xFFAB7100F");
    assert_eq!(lines[2], "\t dec: \t-88'666'097");
    assert_eq!(lines[3], "\t bin: \t1111 1111 1010 1011 0111 0001 0000 0000 1111");
    assert_eq!(lines[4], "\t hex: \tF FAB7 100F");
    assert_eq!(lines[1], lines[5]);
    assert!(lines[1].trim_start_matches('\t').chars().all(|c| c == '-'));
}

// ===== Zero handling =====

#[test]
fn test_zero_in_every_radix() {
    for input in ["0", "0b0", "0x0"] {
        let repr = convert(input, &FormatOptions::default()).unwrap();
        assert_eq!(repr.decimal, "0", "input {}", input);
        assert_eq!(repr.hex, "0", "input {}", input);
    }
}

#[test]
fn test_zero_padded() {
    let repr = convert("0", &options(false, true, false)).unwrap();
    assert_eq!(repr.binary, "0000");
}

// ===== Signed decimal input =====

#[test]
fn test_negative_decimal_is_sign_extended_twos_complement() {
    let repr = convert("-42", &options(true, true, false)).unwrap();

    assert_eq!(repr.decimal, "-42");
    assert_eq!(repr.binary, "11010110");
    assert_eq!(repr.hex, "D6");
    assert_eq!(repr.binary.len() % 4, 0);
}

#[test]
fn test_negative_one() {
    let repr = convert("-1", &options(true, true, false)).unwrap();

    assert_eq!(repr.binary, "1111");
    assert_eq!(repr.hex, "F");
}

#[test]
fn test_signed_roundtrip_through_hex() {
    // -42 as hex fed back in signed mode gives -42 again
    let encoded = convert("-42", &options(true, false, false)).unwrap();
    let decoded = convert(&format!("0x{}", encoded.hex), &options(true, false, false)).unwrap();
    assert_eq!(decoded.decimal, "-42");
}

// ===== Separators =====

#[test]
fn test_separators_are_ignored() {
    let plain = FormatOptions::default();
    let reference = convert("1234567", &plain).unwrap();

    for input in ["1'234'567", "1_234_567", "1 234 567", "1-234-567"] {
        assert_eq!(convert(input, &plain).unwrap(), reference, "input {}", input);
    }
}

#[test]
fn test_separators_in_prefixed_input() {
    let plain = FormatOptions::default();
    assert_eq!(convert("0xFF_FF", &plain).unwrap().decimal, "65535");
    assert_eq!(convert("0b1111 0000", &plain).unwrap().decimal, "240");
}

// ===== Large values =====

#[test]
fn test_values_beyond_machine_width() {
    let input = "123456789012345678901234567890123456789012345678901234567890";
    let repr = convert(input, &FormatOptions::default()).unwrap();

    assert_eq!(repr.decimal, input);
    assert_eq!(
        repr.value().unwrap(),
        input.parse::<BigInt>().unwrap()
    );

    let back = convert(&format!("0x{}", repr.hex), &FormatOptions::default()).unwrap();
    assert_eq!(back.decimal, input);
}

// ===== Invalid input =====

#[test]
fn test_invalid_hex_reports_digit() {
    let err = convert("0xG1", &FormatOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ConversionErrorKind::InvalidDigit);
    assert_eq!(err, ConversionError::invalid_digit('G', Radix::Hexadecimal));
    assert_eq!(err.to_string(), "Invalid hexadecimal digit 'G'");
}

#[test]
fn test_invalid_digits_per_radix() {
    let cases = [
        ("0b102", '2', Radix::Binary),
        ("12.5", '.', Radix::Decimal),
        ("0xFFZ", 'Z', Radix::Hexadecimal),
        ("+5", '+', Radix::Decimal),
    ];

    for (input, digit, radix) in cases {
        let err = convert(input, &FormatOptions::default()).unwrap_err();
        assert_eq!(err, ConversionError::invalid_digit(digit, radix), "input {}", input);
    }
}

#[test]
fn test_no_digits() {
    for input in ["", "   ", "'", "0b__", "0x _"] {
        let err = convert(input, &FormatOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ConversionErrorKind::EmptyInput, "input {:?}", input);
    }
}
