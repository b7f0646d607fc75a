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

use super::enums::NumberKind;

/// The structural decomposition of one input string. Produced fresh per
/// call and immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    /// Input after cleanup: digits plus at most one leading plus sign.
    pub input: String,
    /// International marker as consumed: `"+"` or `"00"`.
    pub international: Option<String>,
    /// Country calling code digits, when they were present in the input.
    pub country: Option<String>,
    /// National trunk prefix, when it was present in the input.
    pub national_trunk: Option<String>,
    /// International-style mobile indicator (dialed after the country code).
    pub mobile_marker: Option<String>,
    /// National-style mobile prefix ("15", dialed after the area code).
    pub mobile_prefix: Option<String>,
    pub area_code: Option<String>,
    /// Subscriber number with all prefixes and the area code stripped.
    pub subscriber: String,
    /// Leading block of the subscriber number matched against the allocated
    /// ranges, for the deep-validation country.
    pub block_prefix: Option<String>,
    /// Subscriber digits remaining after the matched block prefix.
    pub given_number: Option<String>,
    /// Special service code (e.g. 911), when the whole input was one.
    pub special: Option<String>,
    /// Specific service prefix (e.g. 0800), when one led the number.
    pub specific: Option<String>,
    pub kind: NumberKind,
}

impl ParsedNumber {
    pub(super) fn with_input(input: String) -> Self {
        Self {
            input,
            international: None,
            country: None,
            national_trunk: None,
            mobile_marker: None,
            mobile_prefix: None,
            area_code: None,
            subscriber: String::new(),
            block_prefix: None,
            given_number: None,
            special: None,
            specific: None,
            kind: NumberKind::None,
        }
    }
}

/// Rendering switches for the formatters. Pure configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prepend the `+<calling code>` token.
    pub include_country_code: bool,
    /// Prepend the national trunk prefix. Only honored for national-style
    /// output, i.e. when the country code token is omitted.
    pub include_national_trunk_prefix: bool,
    /// For mobiles, prefer the international-style marker over the national
    /// "15" prefix when both could be rendered.
    pub prefer_international_mobile_marker: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_country_code: true,
            include_national_trunk_prefix: false,
            prefer_international_mobile_marker: true,
        }
    }
}
