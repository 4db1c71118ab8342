use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{optional_text, require_email, require_text, ValidationError};

pub const REGISTRATION_SOURCE: &str = "VLV Registration Form";
pub const SIGNUP_SOURCE: &str = "VLV Sign Up Form";
pub const DEFAULT_CONTACT_SUBJECT: &str = "Contact Form Submission";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interest {
    Model,
    Agency,
    ProductPartner,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Model,
        Interest::Agency,
        Interest::ProductPartner,
        Interest::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Interest::Model => "model",
            Interest::Agency => "agency",
            Interest::ProductPartner => "product_partner",
            Interest::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Model => "Model",
            Interest::Agency => "Agency",
            Interest::ProductPartner => "Product Partner",
            Interest::Other => "Other",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Onlyfans,
    Fansly,
    Patreon,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Onlyfans,
        Platform::Fansly,
        Platform::Patreon,
        Platform::Other,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Platform::Onlyfans => "onlyfans",
            Platform::Fansly => "fansly",
            Platform::Patreon => "patreon",
            Platform::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Onlyfans => "OnlyFans",
            Platform::Fansly => "Fansly",
            Platform::Patreon => "Patreon",
            Platform::Other => "Other",
        }
    }

    pub fn from_id(id: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.id() == id)
    }
}

/// What the user has typed into one of the registration forms so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub email: String,
    pub name: String,
    pub domain_preference: String,
    pub message: String,
    pub interests: Vec<Interest>,
    pub platform: Option<Platform>,
}

/// Payload posted to `/api/registrations`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistrationRecord {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub interests: Vec<Interest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub created_at: DateTime<Utc>,
    pub source: String,
}

impl RegistrationDraft {
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    /// Record for the registration dialog: only the email is required.
    pub fn to_record(&self, created_at: DateTime<Utc>) -> Result<RegistrationRecord, ValidationError> {
        require_email(&self.email)?;
        Ok(self.record(REGISTRATION_SOURCE, created_at))
    }

    /// Record for the sign-up call to action, which also asks for a name and
    /// the creator's platform.
    pub fn to_signup_record(&self, created_at: DateTime<Utc>) -> Result<RegistrationRecord, ValidationError> {
        require_email(&self.email)?;
        require_text("name", &self.name)?;
        if self.platform.is_none() {
            return Err(ValidationError::MissingField("platform"));
        }
        Ok(self.record(SIGNUP_SOURCE, created_at))
    }

    fn record(&self, source: &str, created_at: DateTime<Utc>) -> RegistrationRecord {
        RegistrationRecord {
            email: self.email.clone(),
            name: optional_text(&self.name),
            domain_preference: optional_text(&self.domain_preference),
            message: optional_text(&self.message),
            interests: self.interests.clone(),
            platform: self.platform,
            created_at,
            source: source.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Payload posted to `/api/contact`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactDraft {
    pub fn to_message(&self, created_at: DateTime<Utc>) -> Result<ContactMessage, ValidationError> {
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        require_text("message", &self.message)?;
        require_email(&self.email)?;

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.clone(),
            subject: optional_text(&self.subject).unwrap_or_else(|| DEFAULT_CONTACT_SUBJECT.to_string()),
            message: self.message.trim().to_string(),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn toggling_an_interest_twice_removes_it() {
        let mut draft = RegistrationDraft::default();
        draft.toggle_interest(Interest::Agency);
        draft.toggle_interest(Interest::Model);
        draft.toggle_interest(Interest::Agency);
        assert_eq!(draft.interests, vec![Interest::Model]);
    }

    #[test]
    fn registration_payload_matches_the_wire_contract() {
        let draft = RegistrationDraft {
            email: "ada@example.com".into(),
            domain_preference: " ada.com ".into(),
            interests: vec![Interest::ProductPartner],
            ..Default::default()
        };
        let record = draft.to_record(now()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["domain_preference"], "ada.com");
        assert_eq!(json["interests"][0], "product_partner");
        assert_eq!(json["source"], REGISTRATION_SOURCE);
        assert_eq!(json["created_at"], "2025-03-14T09:30:00Z");
        assert!(json.get("message").is_none());
        assert!(json.get("platform").is_none());
    }

    #[test]
    fn registration_requires_a_valid_email() {
        let draft = RegistrationDraft {
            email: "not-an-email".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_record(now()), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn signup_requires_name_and_platform() {
        let mut draft = RegistrationDraft {
            email: "ada@example.com".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_signup_record(now()), Err(ValidationError::MissingField("name")));

        draft.name = "Ada".into();
        assert_eq!(draft.to_signup_record(now()), Err(ValidationError::MissingField("platform")));

        draft.platform = Platform::from_id("fansly");
        let record = draft.to_signup_record(now()).unwrap();
        assert_eq!(record.source, SIGNUP_SOURCE);
        assert_eq!(record.platform, Some(Platform::Fansly));
    }

    #[test]
    fn contact_subject_defaults_when_blank() {
        let draft = ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "  ".into(),
            message: "Hello".into(),
        };
        let message = draft.to_message(now()).unwrap();
        assert_eq!(message.subject, DEFAULT_CONTACT_SUBJECT);
    }

    #[test]
    fn contact_checks_required_fields_before_the_email_shape() {
        let draft = ContactDraft {
            name: "Ada".into(),
            email: "broken".into(),
            ..Default::default()
        };
        assert_eq!(draft.to_message(now()), Err(ValidationError::MissingField("message")));
    }
}
