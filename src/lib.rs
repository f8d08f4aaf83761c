//! SkillSwap Algo - reciprocal skill-matching service for the SkillSwap app
//!
//! Users list skills they can teach and skills they want to learn; this
//! library scores how well two users' lists satisfy each other, ranks a
//! candidate pool for one user, and backs the HTTP service that persists
//! confirmed matches.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{filter_ranked, score_profiles, Matcher};
pub use models::{MatchDirection, MutualSkill, Profile, RankedMatch, Skill};
