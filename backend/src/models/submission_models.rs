use diesel::prelude::*;

use crate::schema::{contact_messages, registrations};

#[cfg(test)]
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = registrations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Registration {
    pub id: Option<i32>,
    pub email: String, // trimmed and lower-cased, unique
    pub name: Option<String>,
    pub domain_preference: Option<String>,
    pub message: Option<String>,
    pub interests: String, // comma separated interest ids, empty when none were picked
    pub platform: Option<String>,
    pub source: String, // which form produced the row
    pub created_at: i64, // epoch seconds
}

#[cfg(test)]
impl Registration {
    pub fn interest_list(&self) -> Vec<&str> {
        self.interests.split(',').filter(|s| !s.is_empty()).collect()
    }
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = registrations)]
pub struct NewRegistration {
    pub email: String,
    pub name: Option<String>,
    pub domain_preference: Option<String>,
    pub message: Option<String>,
    pub interests: String,
    pub platform: Option<String>,
    pub source: String,
    pub created_at: i64,
}

#[cfg(test)]
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactMessage {
    pub id: Option<i32>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: i64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: i64,
}
