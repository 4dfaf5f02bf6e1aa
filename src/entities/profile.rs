// 👤 Profile Entity - one synthetic person
//
// Created once by the synthesizer and immutable afterwards:
// email and password hint are never recomputed.

use serde::{Deserialize, Serialize};

// ============================================================================
// HASH TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashType {
    #[serde(rename = "SHA-512")]
    Sha512,

    #[serde(rename = "SHA-512_SALTED")]
    Sha512Salted,
}

impl HashType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Sha512 => "SHA-512",
            HashType::Sha512Salted => "SHA-512_SALTED",
        }
    }

    /// Hashcat mode number for this hash type
    pub fn hashcat_mode(&self) -> u32 {
        match self {
            HashType::Sha512 => 1700,
            HashType::Sha512Salted => 1710,
        }
    }
}

// ============================================================================
// SOCIAL LINKS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,

    /// Not every profile has a GitHub account (serialized as null)
    pub github: Option<String>,
}

// ============================================================================
// PROFILE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,

    /// M/D/YYYY
    pub birthdate: String,
    pub birth_year: i32,
    pub age: i32,

    pub job_title: String,
    pub company: String,
    pub city: String,
    pub university: String,
    pub graduation_year: i32,

    pub profile_pic: String,
    pub linkedin_connections: u32,
    pub social_profiles: SocialLinks,

    /// RFC 3339
    pub generated_at: String,
    pub url: String,

    // ========================================================================
    // CREDENTIAL HINT (training data, deliberately weak)
    // ========================================================================
    pub password_hint: String,

    /// Lowercase hex SHA-512
    pub password_hash: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,

    pub hash_type: HashType,
}

impl Profile {
    /// Email local part, used as the username in hash exports
    pub fn username(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }

    pub fn is_salted(&self) -> bool {
        self.hash_type == HashType::Sha512Salted
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_profile;
    use super::*;

    #[test]
    fn test_username_is_email_local_part() {
        let profile = sample_profile();
        assert_eq!(profile.username(), "alice.smith");
    }

    #[test]
    fn test_hash_type_serialization() {
        assert_eq!(serde_json::to_string(&HashType::Sha512).unwrap(), "\"SHA-512\"");
        assert_eq!(
            serde_json::to_string(&HashType::Sha512Salted).unwrap(),
            "\"SHA-512_SALTED\""
        );
        assert_eq!(HashType::Sha512Salted.hashcat_mode(), 1710);
    }

    #[test]
    fn test_unsalted_profile_omits_salt_and_keeps_null_github() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert!(value.get("salt").is_none());
        assert!(value["social_profiles"]["github"].is_null());
        assert_eq!(value["hash_type"], "SHA-512");
    }
}
