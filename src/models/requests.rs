use crate::models::domain::{MutualSkill, Profile, Skill};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to persist a user-confirmed pairing
///
/// Field names are what the frontend sends; snake_case is accepted too.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_a_id", rename = "userAId")]
    pub user_a_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "user_b_id", rename = "userBId")]
    pub user_b_id: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub score: f64,
    #[serde(default)]
    #[serde(alias = "mutual_skills", rename = "mutualSkills")]
    pub mutual_skills: Vec<MutualSkill>,
}

/// Replacement profile fields for PUT /api/users/{id}
///
/// The user id comes from the path; everything else is replaced wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub teach_skills: Vec<Skill>,
    #[serde(default)]
    pub learn_skills: Vec<Skill>,
    #[serde(default)]
    pub favorite_ice_cream: Option<String>,
    #[serde(default)]
    pub spirit_animal: Option<String>,
    #[serde(default)]
    pub personal_color: Option<String>,
    #[serde(default)]
    pub personality_type: Option<crate::models::domain::PersonalityType>,
    #[serde(default)]
    pub daily_rhythm: Option<crate::models::domain::DailyRhythm>,
}

impl ProfileUpdate {
    /// Whether either skill list contains a name that is empty after trimming
    pub fn has_blank_skill_names(&self) -> bool {
        self.teach_skills
            .iter()
            .chain(self.learn_skills.iter())
            .any(|s| s.name.trim().is_empty())
    }

    /// Merge the update onto an identity, producing the profile to store
    pub fn into_profile(self, user_id: &str) -> Profile {
        Profile {
            user_id: user_id.to_string(),
            name: self.name,
            bio: self.bio,
            avatar_url: self.avatar_url,
            teach_skills: self.teach_skills,
            learn_skills: self.learn_skills,
            favorite_ice_cream: self.favorite_ice_cream,
            spirit_animal: self.spirit_animal,
            personal_color: self.personal_color,
            personality_type: self.personality_type,
            daily_rhythm: self.daily_rhythm,
            created_at: None,
        }
    }
}

/// Query string for GET /api/matching/find/{userId}
///
/// Parsed as i64 so that zero and negative limits reach the handler and get
/// a proper InvalidArgument envelope instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct FindMatchesQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}
