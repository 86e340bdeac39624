use serde::{Deserialize, Serialize};
use shared::{RegistrationField, RegistrationOrigin, RegistrationRecord};

/// Public part of an account, as shown on the home and settings screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub provider: RegistrationOrigin,
}

impl UserProfile {
    /// Profile created from a normalized registration record
    pub fn from_registration(record: &RegistrationRecord, email: String, provider: RegistrationOrigin) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            birth_date: record.birth_date.clone(),
            phone: record.phone.clone(),
            email,
            provider,
        }
    }

    /// Minimal profile for the built-in demo account
    pub fn demo(email: &str) -> Self {
        Self {
            first_name: "Demo".to_string(),
            last_name: "Usuario".to_string(),
            birth_date: String::new(),
            phone: String::new(),
            email: email.to_string(),
            provider: RegistrationOrigin::Manual,
        }
    }

    fn field(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::BirthDate => &self.birth_date,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Email => &self.email,
            RegistrationField::Password => "",
        }
    }

    /// Percentage (0-100, rounded) of profile fields that are filled in
    pub fn completion(&self) -> u8 {
        let filled = RegistrationField::PROFILE
            .iter()
            .filter(|field| !self.field(**field).trim().is_empty())
            .count();
        let ratio = filled as f64 / RegistrationField::PROFILE.len() as f64;
        (ratio * 100.0).round() as u8
    }
}

/// Stored account: credentials plus profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub password: String,
    pub profile: UserProfile,
}
