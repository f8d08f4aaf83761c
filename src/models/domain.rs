use serde::{Deserialize, Serialize};

/// Skill categories offered by the profile editor
///
/// Unrecognized categories deserialize as `Other` so stale clients cannot
/// break profile loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SkillCategory {
    Programming,
    Frontend,
    Backend,
    Mobile,
    AI,
    Design,
    DevOps,
    Database,
    Cloud,
    Other,
}

impl From<String> for SkillCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Programming" => SkillCategory::Programming,
            "Frontend" => SkillCategory::Frontend,
            "Backend" => SkillCategory::Backend,
            "Mobile" => SkillCategory::Mobile,
            "AI" => SkillCategory::AI,
            "Design" => SkillCategory::Design,
            "DevOps" => SkillCategory::DevOps,
            "Database" => SkillCategory::Database,
            "Cloud" => SkillCategory::Cloud,
            _ => SkillCategory::Other,
        }
    }
}

impl Default for SkillCategory {
    fn default() -> Self {
        SkillCategory::Other
    }
}

/// Proficiency levels, ordered from beginner to expert
///
/// Not consumed by scoring today; kept ordered so future weighting can
/// compare levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Default for Proficiency {
    fn default() -> Self {
        Proficiency::Beginner
    }
}

/// A single skill entry in a teach or learn list
///
/// Duplicates by name are permitted and list order is significant for
/// display; nothing here deduplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
    #[serde(default)]
    pub proficiency: Proficiency,
}

impl Skill {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            category: SkillCategory::default(),
            proficiency: Proficiency::default(),
        }
    }
}

/// User profile as stored in Supabase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub teach_skills: Vec<Skill>,
    #[serde(default)]
    pub learn_skills: Vec<Skill>,
    // Soft-matching attributes, stored but not consumed by scoring
    #[serde(default)]
    pub favorite_ice_cream: Option<String>,
    #[serde(default)]
    pub spirit_animal: Option<String>,
    #[serde(default)]
    pub personal_color: Option<String>,
    #[serde(default)]
    pub personality_type: Option<PersonalityType>,
    #[serde(default)]
    pub daily_rhythm: Option<DailyRhythm>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityType {
    Introvert,
    Extrovert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyRhythm {
    EarlyBird,
    NightOwl,
}

/// Which side teaches in a mutual-skill pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchDirection {
    /// The first profile teaches, the second learns
    AToB,
    /// The second profile teaches, the first learns
    BToA,
}

/// One overlapping skill, tagged with who teaches it
///
/// Derived transiently by the scoring engine and frozen into match records
/// at creation time; never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutualSkill {
    pub skill: String,
    pub direction: MatchDirection,
}

/// Persisted match between two users
///
/// `user_a_id` records who initiated; the relationship itself is undirected
/// and at most one record exists per unordered pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: uuid::Uuid,
    pub user_a_id: String,
    pub user_b_id: String,
    pub score: f64,
    pub mutual_skills: Vec<MutualSkill>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Profile summary nested into match listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl From<&Profile> for UserSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.user_id.clone(),
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

/// Persisted match hydrated with both participants for the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWithUsers {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub user_a: UserSummary,
    pub user_b: UserSummary,
}

/// Scored candidate returned by the match finder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub user_id: String,
    pub name: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub score: f64,
    pub teach_skills: Vec<Skill>,
    pub learn_skills: Vec<Skill>,
    pub mutual_skills: Vec<MutualSkill>,
}
