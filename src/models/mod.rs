// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    DailyRhythm, MatchDirection, MatchRecord, MatchWithUsers, MutualSkill, PersonalityType,
    Proficiency, Profile, RankedMatch, Skill, SkillCategory, UserSummary,
};
pub use requests::{CreateMatchRequest, FindMatchesQuery, ProfileUpdate};
pub use responses::{
    CreateMatchResponse, FindMatchesResponse, HealthResponse, ProfileResponse, UserMatchesResponse,
};
