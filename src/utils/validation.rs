use crate::domain::model::{FieldKind, FieldSpec, Pattern};
use crate::utils::error::{Result, UiError};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("phone pattern"));
static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("zip pattern"));
static CA_LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6,8}$").expect("CA license pattern"));
static TX_LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\d{6}$").expect("TX license pattern"));
static FL_LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\d{7}$").expect("FL license pattern"));
static NY_LICENSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7}$").expect("NY license pattern"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_zip(value: &str) -> bool {
    ZIP_RE.is_match(value)
}

pub fn is_valid_website(value: &str) -> bool {
    matches!(Url::parse(value), Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some())
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Email => is_valid_email(value),
            Pattern::Phone => is_valid_phone(value),
            Pattern::Zip => is_valid_zip(value),
            Pattern::Website => is_valid_website(value),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Pattern::Email => "Please enter a valid email address",
            Pattern::Phone => "Please enter a valid phone number",
            Pattern::Zip => "Please enter a valid ZIP code",
            Pattern::Website => "Please enter a valid website address",
        }
    }
}

/// Checks one field value against its spec, returning the inline message on failure.
///
/// Order matters: required, then minimum length for free text, then pattern.
pub fn check_field(spec: &FieldSpec, raw: &str) -> Option<String> {
    let value = raw.trim();

    if spec.required && value.is_empty() {
        return Some(format!("{} is required", spec.label));
    }

    if spec.kind == FieldKind::Text && !value.is_empty() && value.chars().count() < 2 {
        return Some(format!("{} must be at least 2 characters", spec.label));
    }

    if let Some(pattern) = spec.pattern {
        if !value.is_empty() && !pattern.matches(value) {
            return Some(pattern.message().to_string());
        }
    }

    None
}

/// 各州執照號碼格式，未列出的州只檢查長度
pub fn validate_license_number(license: &str, state: &str) -> bool {
    let pattern: &Regex = match state {
        "CA" => &*CA_LICENSE_RE,
        "TX" => &*TX_LICENSE_RE,
        "FL" => &*FL_LICENSE_RE,
        "NY" => &*NY_LICENSE_RE,
        _ => return license.chars().count() >= 6,
    };
    pattern.is_match(license)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(UiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(UiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
