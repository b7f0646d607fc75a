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

use std::collections::{HashMap, HashSet};

use log::{trace, warn};
use regex::Regex;
use strum::IntoEnumIterator;

use crate::{
    generated::AR_BLOCK_RANGES,
    interfaces::ClassMatcherApi,
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexFullMatch,
    string_util::group_digits,
};

use super::{
    enums::NumberKind,
    errors::{FormatError, ParseError},
    helper_constants::{
        DEEP_BARE_LOCAL_MAX, DEEP_BARE_LOCAL_MIN, DEEP_DEFAULT_METRO_AREA_CODE,
        DEEP_TOTAL_NSN_LENGTH, IDD_PREFIX, MIN_AREA_CODE_ENTRIES, NANP_N11_CODES,
        NANP_NSN_LENGTH, NANP_OFFICE_CODE_PATTERN, NATIONAL_MOBILE_PREFIX, PLUS_SIGN,
        SPECIAL_CODES, SPECIFIC_SERVICE_CODES, SPECIFIC_SUBSCRIBER_MAX, SPECIFIC_SUBSCRIBER_MIN,
    },
    helper_functions::{hyphenate_subscriber, is_ascii_digits, normalize},
    helper_types::{FormatOptions, ParsedNumber},
    plan_registry::{self, NumberingPlan},
};

pub struct PhonePlanUtil {
    /// An API for prefix-class checking.
    matcher_api: Box<dyn ClassMatcherApi>,

    /// Block-range allocations keyed by area code, materialized once from
    /// the compiled-in dataset.
    block_range_map: HashMap<&'static str, &'static [(u32, u32)]>,

    /// Area codes ordered longest first, so the greedy segmenter always
    /// consumes the most specific code that matches.
    area_codes_longest_first: Vec<&'static str>,

    /// Shape of a NANP area or central office code.
    nanp_office_code_pattern: Regex,
}

impl PhonePlanUtil {
    pub(super) fn new() -> Self {
        let mut block_range_map: HashMap<&'static str, &'static [(u32, u32)]> =
            HashMap::with_capacity(AR_BLOCK_RANGES.len());
        for (area_code, ranges) in AR_BLOCK_RANGES {
            if area_code.is_empty() || !is_ascii_digits(area_code) || ranges.is_empty() {
                let err_message =
                    format!("Malformed block-range entry for area code {area_code:?}");
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
            if block_range_map.insert(*area_code, *ranges).is_some() {
                let err_message = format!("Duplicate block-range entry for area code {area_code}");
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
        if block_range_map.len() < MIN_AREA_CODE_ENTRIES {
            let err_message = format!(
                "Block-range dataset looks truncated: {} area codes, expected at least {}",
                block_range_map.len(),
                MIN_AREA_CODE_ENTRIES
            );
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }

        let mut area_codes: Vec<&'static str> = block_range_map.keys().copied().collect();
        area_codes.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        // The allocation tables are asserted to be prefix-free, but a few
        // short codes are in fact prefixes of longer ones (e.g. 220 and
        // 2202). Longest-first segmentation keeps those deterministic, so
        // this is reported rather than fatal.
        let nested_codes = area_codes
            .iter()
            .filter(|code| {
                area_codes
                    .iter()
                    .any(|other| other.len() > code.len() && other.starts_with(**code))
            })
            .count();
        if nested_codes > 0 {
            warn!(
                "{nested_codes} area codes are strict prefixes of longer ones; \
                longest-match segmentation resolves them"
            );
        }

        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            block_range_map,
            area_codes_longest_first: area_codes,
            nanp_office_code_pattern: Regex::new(NANP_OFFICE_CODE_PATTERN)
                .expect("Invalid constant pattern!"),
        }
    }

    pub fn supported_regions(&self) -> Vec<&'static str> {
        plan_registry::PLANS.iter().map(|plan| plan.region).collect()
    }

    pub fn supported_calling_codes(&self) -> HashSet<&'static str> {
        plan_registry::PLANS
            .iter()
            .map(|plan| plan.country_calling_code)
            .collect()
    }

    /// Returns the number categories that can be told apart for a region,
    /// or `None` for an unknown region key.
    pub fn supported_kinds_for_region(&self, region_code: &str) -> Option<HashSet<NumberKind>> {
        plan_registry::find_plan(region_code)
            .map(|plan| Self::supported_kinds_for_plan(plan))
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    fn supported_kinds_for_plan(plan: &NumberingPlan) -> HashSet<NumberKind> {
        NumberKind::iter()
            .filter(|kind| match kind {
                NumberKind::Landline => true,
                NumberKind::Mobile => {
                    plan.deep_block_validation
                        || !plan.mobile_prefix_patterns.is_empty()
                        || !plan.mobile_marker.is_empty()
                }
                NumberKind::Special => !plan.special_service_prefix_patterns.is_empty(),
                NumberKind::Specific => plan.deep_block_validation,
                NumberKind::None => false,
            })
            .collect()
    }

    /// Exposes a plan record for inspection; accepts any country key form.
    pub fn plan(&self, key: &str) -> Option<&'static NumberingPlan> {
        plan_registry::find_plan(key)
    }

    /// Checks a raw string against a country's numbering plan. Never
    /// panics; every failure reads as "not (yet) a valid number".
    pub fn is_valid(&self, raw: &str, country: Option<&str>) -> bool {
        let plan = match self.resolve_plan(raw, country) {
            Ok(plan) => plan,
            Err(err) => {
                trace!("No plan resolvable for {raw:?}: {err}");
                return false;
            }
        };
        if plan.deep_block_validation {
            match self.parse_deep(raw, plan) {
                Ok(parsed) => {
                    parsed.special.is_some()
                        || parsed.specific.is_some()
                        || parsed.block_prefix.is_some()
                }
                Err(err) => {
                    trace!("Number {raw:?} rejected: {err}");
                    false
                }
            }
        } else {
            match self.parse_generic(raw, plan) {
                Ok(_) => true,
                Err(err) => {
                    trace!("Number {raw:?} rejected: {err}");
                    false
                }
            }
        }
    }

    /// Decomposes a raw string into its structural components. Returns
    /// `None` instead of failing.
    pub fn parse(&self, raw: &str, country: Option<&str>) -> Option<ParsedNumber> {
        let plan = match self.resolve_plan(raw, country) {
            Ok(plan) => plan,
            Err(err) => {
                trace!("No plan resolvable for {raw:?}: {err}");
                return None;
            }
        };
        let outcome = if plan.deep_block_validation {
            self.parse_deep(raw, plan)
        } else {
            self.parse_generic(raw, plan)
        };
        match outcome {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                trace!("Failed to parse {raw:?}: {err}");
                None
            }
        }
    }

    /// Renders a number in its canonical display form, failing on anything
    /// that does not validly parse for the selected country.
    pub fn format(
        &self,
        raw: &str,
        country: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let Some(plan) = plan_registry::find_plan(country) else {
            warn!("Invalid or unknown country key provided: {}", country);
            return Err(ParseError::UnknownCountry(country.to_owned()).into());
        };
        if plan.deep_block_validation {
            let parsed = self.parse_deep(raw, plan)?;
            if parsed.special.is_none()
                && parsed.specific.is_none()
                && parsed.block_prefix.is_none()
            {
                // Bare local numbers survive parsing but carry no allocated
                // block, so they are not renderable as dialable numbers.
                return Err(FormatError::InvalidNumber);
            }
            Ok(Self::render_deep(plan, &parsed, options))
        } else {
            let parsed = self.parse_generic(raw, plan)?;
            Ok(Self::render_generic(plan, &parsed, options))
        }
    }

    /// Best-effort rendering for input still being typed. Falls back to
    /// heuristic grouping whenever the full pipeline rejects the input;
    /// never fails.
    pub fn format_partial(&self, raw: &str, country: &str, options: &FormatOptions) -> String {
        if let Ok(formatted) = self.format(raw, country, options) {
            return formatted;
        }
        let plan = plan_registry::find_plan(country);
        let cleaned = normalize(raw);
        let mut rest: &str = &cleaned;
        if let Some(stripped) = rest.strip_prefix(PLUS_SIGN) {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(IDD_PREFIX) {
            rest = stripped;
        }
        if let Some(plan) = plan {
            if let Some(stripped) = rest.strip_prefix(plan.country_calling_code) {
                rest = stripped;
            }
            if !plan.trunk_prefix.is_empty() {
                if let Some(stripped) = rest.strip_prefix(plan.trunk_prefix) {
                    rest = stripped;
                }
            }
        }
        if rest.is_empty() || !is_ascii_digits(rest) {
            return String::new();
        }
        let Some(plan) = plan else {
            return group_digits(rest, Self::default_grouping_for_len(rest.len()), " ");
        };
        let grouped = if plan.deep_block_validation {
            Self::partial_deep_grouping(rest)
        } else if plan.display_grouping.is_empty() {
            group_digits(rest, Self::default_grouping_for_len(rest.len()), " ")
        } else {
            group_digits(rest, plan.display_grouping, " ")
        };
        if options.include_country_code {
            fast_cat::concat_str!(PLUS_SIGN, plan.country_calling_code, " ", &grouped)
        } else {
            grouped
        }
    }

    fn resolve_plan(
        &self,
        raw: &str,
        country: Option<&str>,
    ) -> Result<&'static NumberingPlan, ParseError> {
        if let Some(key) = country {
            return plan_registry::find_plan(key).ok_or_else(|| {
                warn!("Invalid or unknown country key provided: {}", key);
                ParseError::UnknownCountry(key.to_owned())
            });
        }
        let cleaned = normalize(raw);
        let Some(digits) = cleaned.strip_prefix(PLUS_SIGN) else {
            return Err(ParseError::CountryUndetermined);
        };
        plan_registry::find_plan_for_calling_code(digits).ok_or(ParseError::CountryUndetermined)
    }

    /// Strips the international marker and the country calling code from
    /// the head of `rest`, recording what was consumed.
    fn peel_international_and_country<'a>(
        plan: &NumberingPlan,
        mut rest: &'a str,
        parsed: &mut ParsedNumber,
    ) -> &'a str {
        if let Some(stripped) = rest.strip_prefix(PLUS_SIGN) {
            parsed.international = Some(PLUS_SIGN.to_owned());
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(IDD_PREFIX) {
            parsed.international = Some(IDD_PREFIX.to_owned());
            rest = stripped;
        }
        if let Some(stripped) = rest.strip_prefix(plan.country_calling_code) {
            parsed.country = Some(plan.country_calling_code.to_owned());
            rest = stripped;
        }
        rest
    }

    /// Strips the trunk prefix (at most once) and, only after a recognized
    /// country code, the international-style mobile marker. A bare leading
    /// marker with no country code is ordinary subscriber content.
    fn peel_trunk_and_marker<'a>(
        plan: &NumberingPlan,
        mut rest: &'a str,
        parsed: &mut ParsedNumber,
    ) -> &'a str {
        if !plan.trunk_prefix.is_empty() {
            if let Some(stripped) = rest.strip_prefix(plan.trunk_prefix) {
                parsed.national_trunk = Some(plan.trunk_prefix.to_owned());
                rest = stripped;
            }
        }
        if parsed.country.is_some() && !plan.mobile_marker.is_empty() {
            if let Some(stripped) = rest.strip_prefix(plan.mobile_marker) {
                parsed.mobile_marker = Some(plan.mobile_marker.to_owned());
                rest = stripped;
            }
        }
        rest
    }

    /// Full decomposition for the deep-validation country: special and
    /// specific service codes, prefix peeling, greedy area-code
    /// segmentation and the block-range check.
    fn parse_deep(
        &self,
        raw: &str,
        plan: &'static NumberingPlan,
    ) -> Result<ParsedNumber, ParseError> {
        let cleaned = normalize(raw);
        if cleaned.is_empty() || cleaned.as_ref() == PLUS_SIGN {
            return Err(ParseError::EmptyAfterCleanup);
        }
        let mut parsed = ParsedNumber::with_input(cleaned.to_string());

        // Special codes match the whole cleaned input, before any peeling.
        if SPECIAL_CODES.contains(&cleaned.as_ref()) {
            trace!("Number '{cleaned}' is a special service code");
            parsed.special = Some(cleaned.to_string());
            parsed.kind = NumberKind::Special;
            return Ok(parsed);
        }

        let mut rest = Self::peel_international_and_country(plan, &cleaned, &mut parsed);

        // Specific service codes carry the trunk digit themselves, so they
        // are recognized before trunk peeling.
        for code in SPECIFIC_SERVICE_CODES {
            if let Some(subscriber) = rest.strip_prefix(code) {
                if (SPECIFIC_SUBSCRIBER_MIN..=SPECIFIC_SUBSCRIBER_MAX).contains(&subscriber.len())
                    && is_ascii_digits(subscriber)
                {
                    trace!("Number '{rest}' is a specific service number");
                    parsed.specific = Some((*code).to_owned());
                    parsed.subscriber = subscriber.to_owned();
                    parsed.kind = NumberKind::Specific;
                    return Ok(parsed);
                }
            }
        }

        rest = Self::peel_trunk_and_marker(plan, rest, &mut parsed);
        if rest.is_empty() {
            return Err(ParseError::EmptyAfterCleanup);
        }
        if !is_ascii_digits(rest) {
            return Err(ParseError::NonDigitResidue);
        }

        // Greedy segmentation: the longest area code that literally
        // prefixes the digits wins and the rest is fixed, no backtracking.
        let mut subscriber: &str = rest;
        for code in &self.area_codes_longest_first {
            if let Some(stripped) = rest.strip_prefix(code) {
                parsed.area_code = Some((*code).to_owned());
                subscriber = stripped;
                break;
            }
        }
        if let Some(stripped) = subscriber.strip_prefix(NATIONAL_MOBILE_PREFIX) {
            parsed.mobile_prefix = Some(NATIONAL_MOBILE_PREFIX.to_owned());
            subscriber = stripped;
        }
        if subscriber.is_empty() {
            return Err(ParseError::ImplausibleLength);
        }

        let length_plausible = match &parsed.area_code {
            Some(area) => area.len() + subscriber.len() == DEEP_TOTAL_NSN_LENGTH,
            None => {
                (DEEP_BARE_LOCAL_MIN..=DEEP_BARE_LOCAL_MAX).contains(&subscriber.len())
            }
        };
        if !length_plausible {
            trace!(
                "Number '{}': area code and subscriber do not recombine to a plausible length",
                parsed.input
            );
            return Err(ParseError::ImplausibleLength);
        }
        parsed.kind = if parsed.mobile_marker.is_some() || parsed.mobile_prefix.is_some() {
            NumberKind::Mobile
        } else {
            NumberKind::Landline
        };
        parsed.subscriber = subscriber.to_owned();

        // Deep validation. Unprefixed eight-digit numbers retry under the
        // default metro code; that legacy assumption is deliberate.
        let lookup_area = parsed.area_code.as_deref().or_else(|| {
            (subscriber.len() == DEEP_BARE_LOCAL_MAX).then_some(DEEP_DEFAULT_METRO_AREA_CODE)
        });
        if let Some(area) = lookup_area {
            match self.find_block_prefix(area, subscriber) {
                Some(block) => {
                    parsed.given_number = Some(subscriber[block.len()..].to_owned());
                    parsed.block_prefix = Some(block);
                }
                None => {
                    trace!(
                        "Number '{}': no allocated block range under area code {area}",
                        parsed.input
                    );
                    return Err(ParseError::BlockRangeMismatch);
                }
            }
        }
        trace!("Number '{}' classified as {:?}", parsed.input, parsed.kind);
        Ok(parsed)
    }

    /// Walks the allocated ranges for `area_code` in declaration order and
    /// returns the first subscriber prefix falling inside one. The compared
    /// prefix length is the digit count of the range's upper bound.
    fn find_block_prefix(&self, area_code: &str, subscriber: &str) -> Option<String> {
        let ranges = self.block_range_map.get(area_code)?;
        let mut buf = itoa::Buffer::new();
        for (min, max) in ranges.iter() {
            let prefix_len = buf.format(*max).len();
            if subscriber.len() < prefix_len {
                continue;
            }
            let prefix = &subscriber[..prefix_len];
            let Ok(value) = prefix.parse::<u32>() else {
                continue;
            };
            if (*min..=*max).contains(&value) {
                return Some(prefix.to_owned());
            }
        }
        None
    }

    /// Length and prefix-class validation for every country without a
    /// block-range table.
    fn parse_generic(
        &self,
        raw: &str,
        plan: &'static NumberingPlan,
    ) -> Result<ParsedNumber, ParseError> {
        let cleaned = normalize(raw);
        if cleaned.is_empty() || cleaned.as_ref() == PLUS_SIGN {
            return Err(ParseError::EmptyAfterCleanup);
        }
        let mut parsed = ParsedNumber::with_input(cleaned.to_string());
        let mut rest = Self::peel_international_and_country(plan, &cleaned, &mut parsed);
        rest = Self::peel_trunk_and_marker(plan, rest, &mut parsed);
        if rest.is_empty() {
            return Err(ParseError::EmptyAfterCleanup);
        }
        if !is_ascii_digits(rest) {
            return Err(ParseError::NonDigitResidue);
        }
        parsed.kind = self.classify_generic(plan, rest, parsed.mobile_marker.is_some())?;
        parsed.subscriber = rest.to_owned();
        trace!("Number '{}' classified as {:?}", parsed.input, parsed.kind);
        Ok(parsed)
    }

    fn classify_generic(
        &self,
        plan: &NumberingPlan,
        national: &str,
        has_mobile_marker: bool,
    ) -> Result<NumberKind, ParseError> {
        if plan.nanp_rules {
            self.check_nanp_rules(national)?;
        }
        let length_ok = plan.national_number_lengths.contains(&national.len());
        let is_special = self
            .matcher_api
            .matches_class(national, plan.special_service_prefix_patterns);
        // Special service numbers are allowed out-of-band lengths.
        if !length_ok && !is_special {
            trace!("Number '{national}' has no accepted length for {}", plan.region);
            return Err(ParseError::ImplausibleLength);
        }
        if is_special {
            trace!("Number '{national}' matches a special service prefix");
            return Ok(NumberKind::Special);
        }
        if has_mobile_marker
            || self
                .matcher_api
                .matches_class(national, plan.mobile_prefix_patterns)
        {
            trace!("Number '{national}' is a mobile number");
            return Ok(NumberKind::Mobile);
        }
        if self
            .matcher_api
            .matches_class(national, plan.fixed_line_prefix_patterns)
        {
            trace!("Number '{national}' is a fixed line number");
            return Ok(NumberKind::Landline);
        }
        if plan.mobile_prefix_patterns.is_empty() && plan.fixed_line_prefix_patterns.is_empty() {
            // The country does not discriminate numbering by prefix; any
            // length-valid number is accepted.
            return Ok(NumberKind::Landline);
        }
        trace!("Number '{national}' matches no prefix class for {}", plan.region);
        Err(ParseError::PrefixClassMismatch)
    }

    fn check_nanp_rules(&self, national: &str) -> Result<(), ParseError> {
        if national.len() != NANP_NSN_LENGTH {
            return Err(ParseError::ImplausibleLength);
        }
        let area = &national[..3];
        let office = &national[3..6];
        for code in [area, office] {
            if !self.nanp_office_code_pattern.full_match(code) || NANP_N11_CODES.contains(&code) {
                trace!("Number '{national}': code {code} violates NANP assignment rules");
                return Err(ParseError::NanpViolation);
            }
        }
        Ok(())
    }

    fn render_deep(plan: &NumberingPlan, parsed: &ParsedNumber, options: &FormatOptions) -> String {
        if let Some(special) = &parsed.special {
            // Special codes render verbatim, whatever the options say.
            return special.clone();
        }
        if let Some(specific) = &parsed.specific {
            return fast_cat::concat_str!(specific, " ", &hyphenate_subscriber(&parsed.subscriber));
        }
        let mut tokens: Vec<&str> = Vec::with_capacity(5);
        let country_token;
        if options.include_country_code {
            country_token = fast_cat::concat_str!(PLUS_SIGN, plan.country_calling_code);
            tokens.push(&country_token);
        }
        if parsed.kind == NumberKind::Mobile {
            if options.prefer_international_mobile_marker && parsed.mobile_marker.is_some() {
                tokens.push(plan.mobile_marker);
            } else if let Some(prefix) = &parsed.mobile_prefix {
                tokens.push(prefix);
            }
        }
        if !options.include_country_code
            && options.include_national_trunk_prefix
            && parsed.national_trunk.is_some()
        {
            tokens.push(plan.trunk_prefix);
        }
        if let Some(area) = &parsed.area_code {
            tokens.push(area);
        }
        let subscriber = hyphenate_subscriber(&parsed.subscriber);
        tokens.push(&subscriber);
        tokens.join(" ")
    }

    fn render_generic(
        plan: &NumberingPlan,
        parsed: &ParsedNumber,
        options: &FormatOptions,
    ) -> String {
        let national = group_digits(&parsed.subscriber, plan.display_grouping, " ");
        if options.include_country_code {
            return fast_cat::concat_str!(PLUS_SIGN, plan.country_calling_code, " ", &national);
        }
        if options.include_national_trunk_prefix && parsed.national_trunk.is_some() {
            return fast_cat::concat_str!(plan.trunk_prefix, " ", &national);
        }
        national
    }

    /// Area-code-first grouping used while the user is still typing a
    /// number for the deep-validation country.
    fn partial_deep_grouping(digits: &str) -> String {
        if digits.len() >= 7 {
            let (area, subscriber) = digits.split_at(3);
            if subscriber.len() > 4 {
                let (head, tail) = subscriber.split_at(4);
                fast_cat::concat_str!(area, "-", head, "-", tail)
            } else {
                fast_cat::concat_str!(area, "-", subscriber)
            }
        } else if digits.len() >= 5 {
            let (area, subscriber) = digits.split_at(3);
            fast_cat::concat_str!(area, "-", subscriber)
        } else {
            digits.to_owned()
        }
    }

    fn default_grouping_for_len(len: usize) -> &'static [usize] {
        if len >= 10 {
            &[3, 3, 4]
        } else if len >= 8 {
            &[4, 4]
        } else {
            &[3, 4]
        }
    }
}
