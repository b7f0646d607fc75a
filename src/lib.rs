mod generated;
mod interfaces;
pub mod phoneplan;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;


pub use phoneplan::{
    errors::{FormatError, ParseError},
    format, format_partial, is_valid, parse, FormatOptions, NumberKind, NumberingPlan,
    ParsedNumber, PHONE_PLAN_UTIL,
};
