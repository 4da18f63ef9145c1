/// User profile model
///
/// A profile is three independent sub-objects (personal info, address,
/// preferences) under a server-generated identifier. Each sub-object is
/// replaced wholesale by its own update endpoint; there is no field merge.
///
/// # Wire format
///
/// ```json
/// {
///   "identifier": "0b6a6c1e-3f1d-4a57-9d59-4b2b8f1f9e21",
///   "personalInfo": {
///     "firstName": "Hery",
///     "lastName": "Rakoto",
///     "birthdate": "1998-04-12",
///     "email": "hery@example.com"
///   },
///   "address": {
///     "street": "Lot II A 12",
///     "city": "Antananarivo",
///     "country": "Madagascar",
///     "postalCode": "101"
///   },
///   "preferences": { "needsNewsletter": true, "language": "mg" }
/// }
/// ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::store::Record;

/// Interface language of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Malagasy
    Mg,

    /// French
    Fr,

    /// English
    Eng,
}

/// Identity block of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,

    pub last_name: String,

    /// Date of birth, `YYYY-MM-DD` on the wire
    pub birthdate: NaiveDate,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Postal address block of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
}

/// Preferences block of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub needs_newsletter: bool,
    pub language: Language,
}

/// Payload for creating a profile
///
/// Carries no identifier; one is generated on creation. An `identifier`
/// key sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfile {
    pub personal_info: PersonalInfo,
    pub address: Address,
    pub preferences: Preferences,
}

/// A stored user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-generated identifier (UUID v4, hyphenated)
    pub identifier: String,

    pub personal_info: PersonalInfo,

    pub address: Address,

    pub preferences: Preferences,
}

impl UserProfile {
    /// Composes a profile from a creation payload under a fresh identifier
    pub fn create(data: CreateProfile) -> Self {
        Self {
            identifier: Uuid::new_v4().to_string(),
            personal_info: data.personal_info,
            address: data.address,
            preferences: data.preferences,
        }
    }
}

impl Record for UserProfile {
    type Key = String;

    fn key(&self) -> &String {
        &self.identifier
    }
}
