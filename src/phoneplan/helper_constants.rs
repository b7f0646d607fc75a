pub const PLUS_SIGN: &str = "+";

/// International direct-dialing prefix accepted in place of a plus sign.
pub const IDD_PREFIX: &str = "00";

/// Domestic mobile indicator dialed between area code and subscriber number
/// in the deep-validation country ("15" style).
pub const NATIONAL_MOBILE_PREFIX: &str = "15";

// Geographic numbers in the deep-validation country always recombine to ten
// digits (area code + subscriber); numbers dialed without an area code are
// accepted at six to eight digits.
pub const DEEP_TOTAL_NSN_LENGTH: usize = 10;
pub const DEEP_BARE_LOCAL_MIN: usize = 6;
pub const DEEP_BARE_LOCAL_MAX: usize = 8;

/// Unprefixed eight-digit numbers are historically assumed to belong to the
/// largest metro area; block validation retries under this code.
pub const DEEP_DEFAULT_METRO_AREA_CODE: &str = "11";

/// Sanity floor for the compiled-in block-range dataset. A table smaller
/// than this means the asset was truncated or corrupted.
pub const MIN_AREA_CODE_ENTRIES: usize = 250;

/// Short emergency/service numbers with no subscriber segmentation. Matched
/// against the whole cleaned input, before any prefix peeling.
pub const SPECIAL_CODES: &[&str] = &[
    "19", "100", "101", "102", "103", "105", "106", "107", "108", "110", "112", "113", "114",
    "115", "121", "125", "126", "130", "131", "132", "133", "134", "135", "136", "137", "138",
    "139", "144", "145", "147", "911", "000",
];

/// Non-geographic service prefixes (toll-free and similar) followed by a
/// seven- or eight-digit subscriber number. They all begin with the trunk
/// digit, so they are recognized before trunk peeling.
pub const SPECIFIC_SERVICE_CODES: &[&str] = &[
    "0800", "0810", "0822", "0823", "0610", "0611", "0612", "0609", "0600", "0747", "0939",
    "0605", "0603",
];

pub const SPECIFIC_SUBSCRIBER_MIN: usize = 7;
pub const SPECIFIC_SUBSCRIBER_MAX: usize = 8;

/// NANP N11 service triples, reserved and never assignable as an area code
/// or central office code.
pub const NANP_N11_CODES: &[&str] = &["211", "311", "411", "511", "611", "711", "811", "911"];

/// Area and central office codes in the NANP must be `[2-9][0-9]{2}`.
pub const NANP_OFFICE_CODE_PATTERN: &str = "[2-9][0-9]{2}";

pub const NANP_NSN_LENGTH: usize = 10;
