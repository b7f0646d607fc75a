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

use crate::i18n::RegionCode;

/// One country's numbering rules. The registry is data-driven on purpose:
/// validators are updated by editing these records, not the engine. Only
/// the two capability flags select a different code path.
#[derive(Debug)]
pub struct NumberingPlan {
    /// ISO 3166-1 alpha-2 style registry key.
    pub region: &'static str,
    /// Human readable country name, as displayed to users.
    pub name: &'static str,
    /// International calling code, without the plus sign.
    pub country_calling_code: &'static str,
    /// Accepted national significant number digit counts.
    pub national_number_lengths: &'static [usize],
    /// Prefix classes (pattern sources, matched at the head of the national
    /// number) identifying mobile numbers. Empty when the country does not
    /// discriminate mobiles by prefix.
    pub mobile_prefix_patterns: &'static [&'static str],
    /// Prefix classes identifying fixed-line numbers.
    pub fixed_line_prefix_patterns: &'static [&'static str],
    /// Prefix classes for special, toll-free or emergency services. These
    /// numbers may have lengths outside `national_number_lengths`.
    pub special_service_prefix_patterns: &'static [&'static str],
    /// Domestic long-distance digit, stripped when parsing. Possibly empty.
    pub trunk_prefix: &'static str,
    /// International-style mobile indicator dialed between the country code
    /// and the national number. Only consumed after a recognized country
    /// code; empty for countries without one.
    pub mobile_marker: &'static str,
    /// Digit group sizes used when formatting the national number.
    pub display_grouping: &'static [usize],
    /// Subscriber blocks must additionally fall inside the allocated ranges
    /// of the compiled-in block-range table.
    pub deep_block_validation: bool,
    /// Area and central office codes follow NANP assignment rules.
    pub nanp_rules: bool,
}

pub(crate) static PLANS: &[NumberingPlan] = &[
    NumberingPlan {
        region: RegionCode::ar(),
        name: "Argentina",
        country_calling_code: "54",
        // Total NSN is always ten digits (area code + subscriber).
        national_number_lengths: &[10],
        mobile_prefix_patterns: &["9"],
        // Landlines start with a two- to four-digit area code; there is no
        // universal prefix to test against.
        fixed_line_prefix_patterns: &[],
        special_service_prefix_patterns: &["0800", "0810", "0600", "0609", "0610", "911"],
        trunk_prefix: "0",
        mobile_marker: "9",
        display_grouping: &[2, 4, 4],
        deep_block_validation: true,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::bo(),
        name: "Bolivia",
        country_calling_code: "591",
        national_number_lengths: &[8],
        mobile_prefix_patterns: &["6", "7"],
        fixed_line_prefix_patterns: &["[2-5]"],
        special_service_prefix_patterns: &[r"1\d{2}"],
        trunk_prefix: "",
        mobile_marker: "",
        display_grouping: &[3, 3, 2],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::br(),
        name: "Brasil",
        country_calling_code: "55",
        // Landlines have ten digits, mobiles eleven.
        national_number_lengths: &[10, 11],
        mobile_prefix_patterns: &["9"],
        fixed_line_prefix_patterns: &[r"[2-9]\d[2-8]"],
        special_service_prefix_patterns: &[r"1\d{2}"],
        trunk_prefix: "0",
        mobile_marker: "",
        display_grouping: &[2, 5, 4],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::cl(),
        name: "Chile",
        country_calling_code: "56",
        // Nine digits across the board, with no mobile/fixed distinction.
        national_number_lengths: &[9],
        mobile_prefix_patterns: &[],
        fixed_line_prefix_patterns: &[],
        special_service_prefix_patterns: &[r"1\d{2}"],
        trunk_prefix: "",
        mobile_marker: "",
        display_grouping: &[3, 3, 3],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::co(),
        name: "Colombia",
        country_calling_code: "57",
        national_number_lengths: &[10],
        mobile_prefix_patterns: &["3"],
        fixed_line_prefix_patterns: &["60"],
        special_service_prefix_patterns: &["1800"],
        trunk_prefix: "",
        mobile_marker: "",
        display_grouping: &[3, 3, 4],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::ec(),
        name: "Ecuador",
        country_calling_code: "593",
        // Landlines are eight digits (one-digit area code plus seven),
        // mobiles nine.
        national_number_lengths: &[8, 9],
        mobile_prefix_patterns: &["9[2-9]"],
        fixed_line_prefix_patterns: &["[2-7]"],
        special_service_prefix_patterns: &["800", "900", "700", r"1\d{2}"],
        trunk_prefix: "0",
        mobile_marker: "",
        display_grouping: &[2, 4, 3],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::py(),
        name: "Paraguay",
        country_calling_code: "595",
        national_number_lengths: &[9],
        mobile_prefix_patterns: &["9[2-9]"],
        fixed_line_prefix_patterns: &["[2-8]"],
        special_service_prefix_patterns: &[r"1\d{2}"],
        trunk_prefix: "0",
        mobile_marker: "",
        display_grouping: &[3, 3, 3],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::pe(),
        name: "Perú",
        country_calling_code: "51",
        // Mobiles are nine digits; landline lengths vary by area.
        national_number_lengths: &[6, 7, 8, 9],
        mobile_prefix_patterns: &["9"],
        fixed_line_prefix_patterns: &[r"[1-8]\d"],
        special_service_prefix_patterns: &[r"1\d{2}"],
        trunk_prefix: "0",
        mobile_marker: "",
        display_grouping: &[3, 3, 3],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::uy(),
        name: "Uruguay",
        country_calling_code: "598",
        national_number_lengths: &[8],
        // Mobiles historically begin with 09; after the trunk prefix drops
        // they start with 9.
        mobile_prefix_patterns: &["9"],
        fixed_line_prefix_patterns: &["[24]"],
        special_service_prefix_patterns: &[r"1\d{2}"],
        trunk_prefix: "",
        mobile_marker: "",
        display_grouping: &[4, 4],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::ve(),
        name: "Venezuela",
        country_calling_code: "58",
        national_number_lengths: &[10],
        mobile_prefix_patterns: &["412|414|415|416|424|426"],
        fixed_line_prefix_patterns: &["[235]"],
        special_service_prefix_patterns: &["800", "900", r"1\d{2}"],
        trunk_prefix: "0",
        mobile_marker: "",
        display_grouping: &[3, 4, 3],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::mx(),
        name: "México",
        country_calling_code: "52",
        // Ten digits for every number since the 2019 plan unification; the
        // legacy mobile "1" after +52 is still dialed and gets stripped as
        // the mobile marker.
        national_number_lengths: &[10],
        mobile_prefix_patterns: &[],
        fixed_line_prefix_patterns: &[],
        special_service_prefix_patterns: &["800", "900", r"1\d{2}"],
        trunk_prefix: "",
        mobile_marker: "1",
        display_grouping: &[3, 3, 4],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::es(),
        name: "España",
        country_calling_code: "34",
        national_number_lengths: &[9],
        mobile_prefix_patterns: &[r"6\d|7[1-9]"],
        fixed_line_prefix_patterns: &["9"],
        special_service_prefix_patterns: &["800", "900", r"1\d{2}", r"5\d{2}", r"80\d", r"90\d"],
        trunk_prefix: "",
        mobile_marker: "",
        display_grouping: &[3, 3, 3],
        deep_block_validation: false,
        nanp_rules: false,
    },
    NumberingPlan {
        region: RegionCode::us(),
        name: "Estados Unidos",
        country_calling_code: "1",
        national_number_lengths: &[10],
        // Mobiles share area codes with landlines; the number itself does
        // not reveal the type.
        mobile_prefix_patterns: &[],
        fixed_line_prefix_patterns: &[],
        special_service_prefix_patterns: &[
            "800", "888", "877", "866", "855", "844", "833", "822", "900", r"1\d{2}",
        ],
        trunk_prefix: "1",
        mobile_marker: "",
        display_grouping: &[3, 3, 4],
        deep_block_validation: false,
        nanp_rules: true,
    },
];

/// Looks a plan up by region key, bare calling code or display name, all
/// case-insensitively. A leading plus on the key is ignored.
pub(crate) fn find_plan(key: &str) -> Option<&'static NumberingPlan> {
    let normalized = key.trim().trim_start_matches('+');
    if normalized.is_empty() {
        return None;
    }
    let folded = normalized.to_lowercase();
    PLANS.iter().find(|plan| {
        plan.region.eq_ignore_ascii_case(normalized)
            || plan.country_calling_code == normalized
            || plan.name.to_lowercase() == folded
    })
}

/// Matches the longest calling code leading `digits`. Calling codes are not
/// prefix-free across plans, so the longest candidate must win.
pub(crate) fn find_plan_for_calling_code(digits: &str) -> Option<&'static NumberingPlan> {
    PLANS
        .iter()
        .filter(|plan| digits.starts_with(plan.country_calling_code))
        .max_by_key(|plan| plan.country_calling_code.len())
}

#[cfg(test)]
mod tests {
    use super::{find_plan, find_plan_for_calling_code, PLANS};
    use crate::i18n::RegionCode;

    #[test]
    fn every_plan_is_well_formed() {
        for plan in PLANS {
            assert!(!plan.country_calling_code.is_empty(), "{}", plan.region);
            assert!(!plan.national_number_lengths.is_empty(), "{}", plan.region);
        }
    }

    #[test]
    fn lookup_accepts_equivalent_keys() {
        for key in ["AR", "ar", "54", "+54", "Argentina", "ARGENTINA"] {
            let plan = find_plan(key).expect(key);
            assert_eq!(plan.region, RegionCode::ar());
        }
        let plan = find_plan("méxico").expect("accented name");
        assert_eq!(plan.region, RegionCode::mx());
        assert!(find_plan("XX").is_none());
        assert!(find_plan("").is_none());
    }

    #[test]
    fn calling_code_match_prefers_longest() {
        let plan = find_plan_for_calling_code("59812345678").expect("uruguay");
        assert_eq!(plan.region, RegionCode::uy());
        let plan = find_plan_for_calling_code("5491151234567").expect("argentina");
        assert_eq!(plan.region, RegionCode::ar());
        assert!(find_plan_for_calling_code("99912345678").is_none());
    }
}
