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

//! Conversion and formatting engine for bconv.
//!
//! This crate turns a single raw token such as `0xFFAB7100F`, `-42` or
//! `0b1010_0001` into its decimal, binary and hexadecimal representations.
//! Values are held with arbitrary precision, so there is no fixed-width
//! overflow.
//!
//! # Pipeline
//!
//! A conversion runs these steps in order:
//!
//! 1. classify the radix from the prefix (`0b`, `0x`, or none)
//! 2. strip the prefix and the separators `' '`, `-`, `'`, `_`
//! 3. derive all three bases
//! 4. apply the signed (two's complement) interpretation
//! 5. pad the binary output to whole nibbles
//! 6. group digits
//! 7. prefix the binary and hexadecimal outputs
//! 8. prepend the minus sign to the decimal output
//!
//! Grouping runs after the two's complement step and the prefix is never
//! grouped.
//!
//! # Examples
//!
//! ```
//! use bconv_core::{convert, FormatOptions};
//!
//! let options = FormatOptions::new()
//!     .with_signed(true)
//!     .with_padding(true)
//!     .with_grouping(true);
//!
//! let repr = convert("0xFFAB7100F", &options).unwrap();
//! assert_eq!(repr.decimal, "-88'666'097");
//! assert_eq!(repr.binary, "1111 1111 1010 1011 0111 0001 0000 0000 1111");
//! assert_eq!(repr.hex, "F FAB7 100F");
//! ```
//!
//! Invalid digits abort the conversion without partial output:
//!
//! ```
//! use bconv_core::{convert, ConversionErrorKind, FormatOptions};
//!
//! let err = convert("0xG1", &FormatOptions::default()).unwrap_err();
//! assert_eq!(err.kind(), ConversionErrorKind::InvalidDigit);
//! ```

pub mod base;
pub mod classify;
pub mod codec;
mod convert;
mod error;
pub mod format;
mod options;
mod radix;
pub mod twos;

pub use classify::{classify, Classified};
pub use convert::{convert, Representation};
pub use error::{ConversionError, ConversionErrorKind, ConvertResult};
pub use format::render;
pub use options::{FormatOptions, FormatOptionsBuilder};
pub use radix::Radix;
pub use twos::Signedness;
