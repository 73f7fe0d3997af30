//! Postcode grammar.
//!
//! Accepted shapes, after trimming and uppercasing:
//!
//! - full postcode: outcode, optional whitespace, digit, two letters (`SW1A 1AA`, `M11AE`)
//! - sector: outcode, whitespace, digit (`SW1A 1`)
//! - outcode alone (`SW1A`)
//!
//! `GIR 0AA` is accepted as a full postcode.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PostcodeError;
use crate::parts::{PostcodeParts, Sector};

const OUTCODE: &str = r"[A-Z]{1,2}[0-9][A-Z0-9]?";

static FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<outcode>{OUTCODE})\s*(?P<digit>[0-9])(?P<unit>[A-Z]{{2}})$"
    ))
    .expect("full postcode pattern compiles")
});

static SECTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?P<outcode>{OUTCODE})\s+(?P<digit>[0-9])$"))
        .expect("sector pattern compiles")
});

static OUTCODE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{OUTCODE}$")).expect("outcode pattern compiles"));

static SUB_DISTRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<district>[A-Z]{1,2}[0-9])[A-Z]$").expect("sub-district pattern compiles")
});

static GIROBANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^GIR\s*0AA$").expect("GIR pattern compiles"));

/// Parses a raw postcode into its outcode, district and sector.
///
/// Case and surrounding whitespace are ignored. Outcode-only input is valid
/// and yields no sector.
pub fn normalize(raw: &str) -> Result<PostcodeParts, PostcodeError> {
    let upper = raw.trim().to_uppercase();
    if upper.is_empty() {
        return Err(PostcodeError::Empty);
    }

    if GIROBANK.is_match(&upper) {
        return Ok(build("GIR", Some('0'), Some("AA")));
    }

    if let Some(caps) = FULL.captures(&upper) {
        return Ok(build(
            &caps["outcode"],
            caps["digit"].chars().next(),
            Some(&caps["unit"]),
        ));
    }

    if let Some(caps) = SECTOR.captures(&upper) {
        return Ok(build(&caps["outcode"], caps["digit"].chars().next(), None));
    }

    if OUTCODE_ONLY.is_match(&upper) {
        return Ok(build(&upper, None, None));
    }

    Err(PostcodeError::Invalid(raw.to_string()))
}

/// Whether `raw` parses as a postcode, sector or outcode.
pub fn is_valid(raw: &str) -> bool {
    normalize(raw).is_ok()
}

/// Whether `token` has the shape of a bare outcode, e.g. `E11` or `SW1A`.
///
/// `token` is expected uppercase with no surrounding whitespace.
pub fn is_outcode(token: &str) -> bool {
    token == "GIR" || OUTCODE_ONLY.is_match(token)
}

/// The outcode with any sub-district letter removed (`SW1A` to `SW1`).
pub fn district_of(outcode: &str) -> &str {
    match SUB_DISTRICT.captures(outcode).and_then(|caps| caps.name("district")) {
        Some(district) => &outcode[..district.end()],
        None => outcode,
    }
}

fn build(outcode: &str, digit: Option<char>, unit: Option<&str>) -> PostcodeParts {
    let sector = digit.map(|digit| Sector::new(outcode, digit));
    let postcode = match (digit, unit) {
        (Some(digit), Some(unit)) => Some(format!("{outcode} {digit}{unit}")),
        _ => None,
    };
    PostcodeParts {
        outcode: outcode.to_string(),
        district: district_of(outcode).to_string(),
        sector,
        postcode,
    }
}
