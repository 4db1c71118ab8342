use diesel::prelude::*;
use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::{
    models::submission_models::{NewContactMessage, NewRegistration},
    schema::{contact_messages, registrations},
    DbPool,
};
#[cfg(test)]
use crate::models::submission_models::{ContactMessage, Registration};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a registration with this email already exists")]
    Duplicate,
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("failed to get a database connection: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for StoreError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => StoreError::Duplicate,
            other => StoreError::Database(other),
        }
    }
}

/// Blocking diesel access to the submission tables. Call from
/// `spawn_blocking` when inside the runtime.
pub struct SubmissionRepository {
    pool: DbPool,
}

impl SubmissionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create_registration(&self, new_registration: &NewRegistration) -> Result<(), StoreError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(registrations::table)
            .values(new_registration)
            .execute(&mut conn)?;
        Ok(())
    }

    pub fn create_contact_message(&self, new_message: &NewContactMessage) -> Result<(), StoreError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(contact_messages::table)
            .values(new_message)
            .execute(&mut conn)?;
        Ok(())
    }
}

// Nothing reads submissions back over HTTP; these back the tests.
#[cfg(test)]
impl SubmissionRepository {
    pub fn find_registration_by_email(&self, email: &str) -> Result<Option<Registration>, StoreError> {
        let mut conn = self.pool.get()?;
        let registration = registrations::table
            .filter(registrations::email.eq(email))
            .select(Registration::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(registration)
    }

    pub fn recent_contact_messages(&self, limit: i64) -> Result<Vec<ContactMessage>, StoreError> {
        let mut conn = self.pool.get()?;
        let messages = contact_messages::table
            .order(contact_messages::created_at.desc())
            .limit(limit)
            .select(ContactMessage::as_select())
            .load(&mut conn)?;
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_pool;

    fn registration(email: &str) -> NewRegistration {
        NewRegistration {
            email: email.to_string(),
            name: None,
            domain_preference: None,
            message: None,
            interests: "model,agency".to_string(),
            platform: None,
            source: "VLV Registration Form".to_string(),
            created_at: 1_740_787_200,
        }
    }

    #[test]
    fn second_insert_of_an_email_is_a_duplicate() {
        let repo = SubmissionRepository::new(test_pool());
        repo.create_registration(&registration("ada@example.com")).unwrap();

        let err = repo.create_registration(&registration("ada@example.com")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate));

        let stored = repo.find_registration_by_email("ada@example.com").unwrap().unwrap();
        assert_eq!(stored.interest_list(), vec!["model", "agency"]);
    }

    #[test]
    fn contact_messages_come_back_newest_first() {
        let repo = SubmissionRepository::new(test_pool());
        for (subject, created_at) in [("older", 10), ("newer", 20)] {
            repo.create_contact_message(&NewContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: subject.to_string(),
                message: "Hello".to_string(),
                created_at,
            })
            .unwrap();
        }

        let subjects: Vec<String> = repo
            .recent_contact_messages(10)
            .unwrap()
            .into_iter()
            .map(|m| m.subject)
            .collect();
        assert_eq!(subjects, vec!["newer", "older"]);
    }
}
