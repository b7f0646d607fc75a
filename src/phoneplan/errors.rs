// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Reasons a raw string fails to decompose into a valid number. These are
/// recovered into `None`/`false` at the `parse`/`is_valid` boundary; only
/// the strict formatter surfaces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Number is empty after cleanup")]
    EmptyAfterCleanup,
    #[error("Non-digit characters remain after prefix peeling")]
    NonDigitResidue,
    #[error("Unknown country key: {0}")]
    UnknownCountry(String),
    #[error("Could not determine a country for the number; pass one explicitly")]
    CountryUndetermined,
    #[error("National number length is not plausible for the numbering plan")]
    ImplausibleLength,
    #[error("Subscriber digits fall outside every allocated block range")]
    BlockRangeMismatch,
    #[error("Number does not match any allowed prefix class")]
    PrefixClassMismatch,
    #[error("Area or central office code violates NANP assignment rules")]
    NanpViolation,
}

/// The strict formatter has no degraded output to fall back on, so it
/// reports failure instead; `format_partial` is the total variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("Number is not valid for the selected numbering plan")]
    InvalidNumber,
}
