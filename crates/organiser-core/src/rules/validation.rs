//! Length and format rules for contact and event fields.
//!
//! Every setter composes a length check with a format check as
//! `length_ok && (value.is_empty() || format_ok)`, so the empty string is
//! always accepted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 20;
pub const MAX_ADDRESS_LEN: usize = 50;
pub const MAX_POST_CODE_LEN: usize = 10;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_EMAIL_LEN: usize = 30;
pub const MAX_URL_LEN: usize = 300;
pub const MAX_PHOTO_PATH_LEN: usize = 260;
pub const MAX_TITLE_LEN: usize = 30;
pub const MAX_LOCATION_LEN: usize = 20;
pub const MAX_DESCRIPTION_LEN: usize = 200;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+(([ '-][A-Za-z]+)*)?$").expect("valid name regex"));
static NICK_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_ -]*$").expect("valid nickname regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9-]+\.[A-Za-z]{2,6}(\.[A-Za-z]{2,6})?$")
        .expect("valid email regex")
});
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((https?|ftp)://)?(www\.)?[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,6}(:[0-9]{1,5})?(/\S*)?$",
    )
    .expect("valid url regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{2,19}$").expect("valid phone regex"));

/// How phone numbers are checked beyond their length.
///
/// `Unchecked` is the shipped behaviour: numbers are free text. `Strict`
/// only applies when configuration asks for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneRule {
    #[default]
    Unchecked,
    Strict,
}

fn within(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

fn empty_or(value: &str, re: &Regex) -> bool {
    value.is_empty() || re.is_match(value)
}

pub fn validate_name_length(value: &str) -> bool {
    within(value, MAX_NAME_LEN)
}

pub fn validate_name_format(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn validate_name(value: &str) -> bool {
    validate_name_length(value) && empty_or(value, &NAME_RE)
}

pub fn validate_nick_name_format(value: &str) -> bool {
    NICK_NAME_RE.is_match(value)
}

pub fn validate_nick_name(value: &str) -> bool {
    validate_name_length(value) && empty_or(value, &NICK_NAME_RE)
}

pub fn validate_address(value: &str) -> bool {
    within(value, MAX_ADDRESS_LEN)
}

pub fn validate_post_code(value: &str) -> bool {
    within(value, MAX_POST_CODE_LEN)
}

pub fn validate_phone_length(value: &str) -> bool {
    within(value, MAX_PHONE_LEN)
}

pub fn validate_phone_format(value: &str, rule: PhoneRule) -> bool {
    match rule {
        PhoneRule::Unchecked => true,
        PhoneRule::Strict => PHONE_RE.is_match(value),
    }
}

pub fn validate_phone(value: &str, rule: PhoneRule) -> bool {
    validate_phone_length(value) && (value.is_empty() || validate_phone_format(value, rule))
}

pub fn validate_email_length(value: &str) -> bool {
    within(value, MAX_EMAIL_LEN)
}

pub fn validate_email_format(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_email(value: &str) -> bool {
    validate_email_length(value) && empty_or(value, &EMAIL_RE)
}

pub fn validate_url_length(value: &str) -> bool {
    within(value, MAX_URL_LEN)
}

pub fn validate_url_format(value: &str) -> bool {
    URL_RE.is_match(value)
}

pub fn validate_url(value: &str) -> bool {
    validate_url_length(value) && empty_or(value, &URL_RE)
}

pub fn validate_photo_path(value: &str) -> bool {
    within(value, MAX_PHOTO_PATH_LEN)
}

pub fn validate_title(value: &str) -> bool {
    within(value, MAX_TITLE_LEN)
}

pub fn validate_location(value: &str) -> bool {
    within(value, MAX_LOCATION_LEN)
}

pub fn validate_description(value: &str) -> bool {
    within(value, MAX_DESCRIPTION_LEN)
}
