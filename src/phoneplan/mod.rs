mod helper_constants;
mod helper_functions;
pub mod enums;
pub mod errors;
pub mod phoneplanutil;
mod plan_registry;
pub(self) mod helper_types;

use std::sync::LazyLock;

pub use enums::NumberKind;
pub use helper_types::{FormatOptions, ParsedNumber};
pub use plan_registry::NumberingPlan;

use crate::phoneplan::phoneplanutil::PhonePlanUtil;

pub static PHONE_PLAN_UTIL: LazyLock<PhonePlanUtil> = LazyLock::new(PhonePlanUtil::new);

/// Checks a raw user string against a country's numbering plan. With no
/// country, one is inferred from a leading `+` and calling code. Never
/// panics.
pub fn is_valid(raw: &str, country: Option<&str>) -> bool {
    PHONE_PLAN_UTIL.is_valid(raw, country)
}

/// Decomposes a raw string into its structural components; `None` on any
/// failure.
pub fn parse(raw: &str, country: Option<&str>) -> Option<ParsedNumber> {
    PHONE_PLAN_UTIL.parse(raw, country)
}

/// Renders a number in canonical display form; fails when the input does
/// not validly parse for the country.
pub fn format(
    raw: &str,
    country: &str,
    options: &FormatOptions,
) -> Result<String, errors::FormatError> {
    PHONE_PLAN_UTIL.format(raw, country, options)
}

/// Best-effort rendering for possibly incomplete input; never fails.
pub fn format_partial(raw: &str, country: &str, options: &FormatOptions) -> String {
    PHONE_PLAN_UTIL.format_partial(raw, country, options)
}
