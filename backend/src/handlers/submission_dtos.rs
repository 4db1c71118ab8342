use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::handlers::api_error::ApiError;
use crate::models::submission_models::{NewContactMessage, NewRegistration};

pub const KNOWN_INTERESTS: [&str; 4] = ["model", "agency", "product_partner", "other"];
pub const KNOWN_PLATFORMS: [&str; 4] = ["onlyfans", "fansly", "patreon", "other"];
pub const DEFAULT_SOURCE: &str = "VLV Registration Form";
pub const DEFAULT_CONTACT_SUBJECT: &str = "Contact Form Submission";
pub const MAX_FIELD_LEN: usize = 5_000;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MISSING_FIELDS: &str = "Please fill out all required fields";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

fn normalize_email(raw: &str) -> Result<String, ApiError> {
    let email = raw.trim().to_lowercase();
    if EMAIL_PATTERN.is_match(&email) && email.len() <= 254 {
        Ok(email)
    } else {
        Err(ApiError::Invalid(INVALID_EMAIL.to_string()))
    }
}

fn optional_text(field: &str, raw: Option<String>) -> Result<Option<String>, ApiError> {
    match raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(value) if value.chars().count() > MAX_FIELD_LEN => Err(ApiError::Invalid(format!("{} is too long", field))),
        other => Ok(other),
    }
}

fn required_text(field: &str, raw: String) -> Result<String, ApiError> {
    optional_text(field, Some(raw))?.ok_or_else(|| ApiError::Invalid(MISSING_FIELDS.to_string()))
}

#[derive(Deserialize, Debug)]
pub struct RegistrationRequest {
    pub email: String,
    pub name: Option<String>,
    pub domain_preference: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub platform: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

impl RegistrationRequest {
    pub fn into_new_registration(self, now: DateTime<Utc>) -> Result<NewRegistration, ApiError> {
        let email = normalize_email(&self.email)?;

        let mut interests: Vec<String> = Vec::new();
        for interest in self.interests {
            let interest = interest.trim().to_lowercase();
            if !KNOWN_INTERESTS.contains(&interest.as_str()) {
                return Err(ApiError::Invalid(format!("Unknown interest: {}", interest)));
            }
            if !interests.contains(&interest) {
                interests.push(interest);
            }
        }

        let platform = optional_text("platform", self.platform)?.map(|p| p.to_lowercase());
        if let Some(platform) = &platform {
            if !KNOWN_PLATFORMS.contains(&platform.as_str()) {
                return Err(ApiError::Invalid(format!("Unknown platform: {}", platform)));
            }
        }

        Ok(NewRegistration {
            email,
            name: optional_text("name", self.name)?,
            domain_preference: optional_text("domain_preference", self.domain_preference)?,
            message: optional_text("message", self.message)?,
            interests: interests.join(","),
            platform,
            source: optional_text("source", self.source)?.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            created_at: self.created_at.unwrap_or(now).timestamp(),
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ContactRequest {
    pub fn into_new_message(self, now: DateTime<Utc>) -> Result<NewContactMessage, ApiError> {
        let name = required_text("name", self.name)?;
        let email = required_text("email", self.email)?;
        let message = required_text("message", self.message)?;

        Ok(NewContactMessage {
            name,
            email: normalize_email(&email)?,
            subject: optional_text("subject", self.subject)?.unwrap_or_else(|| DEFAULT_CONTACT_SUBJECT.to_string()),
            message,
            created_at: self.created_at.unwrap_or(now).timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(email: &str) -> RegistrationRequest {
        RegistrationRequest {
            email: email.to_string(),
            name: None,
            domain_preference: None,
            message: None,
            interests: Vec::new(),
            platform: None,
            created_at: None,
            source: None,
        }
    }

    #[test]
    fn emails_are_trimmed_and_lower_cased() {
        let now = Utc::now();
        let new = request("  Ada@Example.COM ").into_new_registration(now).unwrap();
        assert_eq!(new.email, "ada@example.com");
        assert_eq!(new.source, DEFAULT_SOURCE);
        assert_eq!(new.created_at, now.timestamp());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["", "ada", "ada@example", "a da@example.com", "ada@@example.com"] {
            let err = request(bad).into_new_registration(Utc::now()).unwrap_err();
            assert_eq!(err.to_string(), INVALID_EMAIL, "{bad:?}");
        }
    }

    #[test]
    fn interests_are_checked_and_deduplicated() {
        let mut req = request("ada@example.com");
        req.interests = vec!["model".into(), "Agency".into(), "model".into()];
        assert_eq!(req.into_new_registration(Utc::now()).unwrap().interests, "model,agency");

        let mut req = request("ada@example.com");
        req.interests = vec!["investor".into()];
        assert!(req.into_new_registration(Utc::now()).is_err());
    }

    #[test]
    fn blank_optionals_become_null_and_client_time_is_kept() {
        let when = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let mut req = request("ada@example.com");
        req.name = Some("   ".into());
        req.platform = Some("OnlyFans".into());
        req.source = Some("VLV Sign Up Form".into());
        req.created_at = Some(when);

        let new = req.into_new_registration(Utc::now()).unwrap();
        assert_eq!(new.name, None);
        assert_eq!(new.platform.as_deref(), Some("onlyfans"));
        assert_eq!(new.source, "VLV Sign Up Form");
        assert_eq!(new.created_at, when.timestamp());
    }

    #[test]
    fn contact_requires_name_email_and_message() {
        let req = ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: None,
            message: "  ".into(),
            created_at: None,
        };
        assert_eq!(req.into_new_message(Utc::now()).unwrap_err().to_string(), MISSING_FIELDS);

        let req = ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: Some("".into()),
            message: "Hello".into(),
            created_at: None,
        };
        assert_eq!(req.into_new_message(Utc::now()).unwrap().subject, DEFAULT_CONTACT_SUBJECT);
    }
}
