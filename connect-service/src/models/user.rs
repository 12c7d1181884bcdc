use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::services::calendar::{self, CalendarError};

/// One entry of a `/api/createUser` request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_of_birth: String,
    /// Epoch seconds
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_on: i64,
}

/// One entry of a `/api/createUser` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub name: String,
    #[serde(rename = "date_of_week")]
    pub day_of_week: String,
    #[serde(rename = "create_on_rfc")]
    pub created_on_formatted: String,
}

/// A required field was absent or held its zero value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}

impl UserRecord {
    /// Check required fields in wire order, stopping at the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_id == 0 {
            return Err(ValidationError::Required("user_id"));
        }
        if self.name.is_empty() {
            return Err(ValidationError::Required("name"));
        }
        if self.date_of_birth.is_empty() {
            return Err(ValidationError::Required("date_of_birth"));
        }
        if self.created_on == 0 {
            return Err(ValidationError::Required("created_on"));
        }
        Ok(())
    }
}

/// Validate every record before any of them is transformed
pub fn validate_batch(records: &[UserRecord]) -> Result<(), ValidationError> {
    records.iter().try_for_each(UserRecord::validate)
}

impl TryFrom<&UserRecord> for UserResponse {
    type Error = CalendarError;

    fn try_from(record: &UserRecord) -> Result<Self, Self::Error> {
        let date_of_birth = calendar::parse_date_of_birth(&record.date_of_birth)?;

        Ok(Self {
            user_id: record.user_id,
            name: record.name.clone(),
            day_of_week: calendar::weekday_name(date_of_birth),
            created_on_formatted: calendar::format_created_on(record.created_on)?,
        })
    }
}

// `null` behaves like an omitted field so both fail the required check
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
