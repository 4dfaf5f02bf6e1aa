// 📱 Social Profile - activity stats attached to a person

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub id: String,

    /// Id of the owning Profile
    pub person_id: String,
    pub posts: u32,
    pub followers: u32,
    pub following: u32,

    /// RFC 3339
    pub last_active: String,
}
