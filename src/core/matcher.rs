use crate::core::scoring::score_profiles;
use crate::models::{Profile, RankedMatch};

/// Result of ranking a candidate pool
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Ranks a candidate pool against one user's profile
///
/// # Pipeline
/// 1. Exclude the requesting user (the store adapter excludes them too;
///    this guards against stale pools)
/// 2. Score every candidate with the reciprocal scoring engine
/// 3. Drop candidates with no reciprocal value
/// 4. Sort by score descending, tie-break by user id ascending
/// 5. Truncate to the limit
#[derive(Debug, Clone, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Rank `candidates` for `profile`, returning at most `limit` results
    ///
    /// Pure over its inputs: ordering is a function of the profile snapshot
    /// alone, so repeated calls over unchanged data return identical lists.
    pub fn rank_candidates(
        &self,
        profile: &Profile,
        candidates: Vec<Profile>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<RankedMatch> = candidates
            .into_iter()
            .filter(|candidate| candidate.user_id != profile.user_id)
            .filter_map(|candidate| {
                let (score, mutual_skills) = score_profiles(profile, &candidate);

                // No reciprocal value: keep it out of the results entirely
                if score == 0.0 && mutual_skills.is_empty() {
                    return None;
                }

                Some(RankedMatch {
                    user_id: candidate.user_id,
                    name: candidate.name,
                    bio: candidate.bio,
                    avatar_url: candidate.avatar_url,
                    score,
                    teach_skills: candidate.teach_skills,
                    learn_skills: candidate.learn_skills,
                    mutual_skills,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        matches.truncate(limit);

        MatchResult { matches, total_candidates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn profile(user_id: &str, teach: &[&str], learn: &[&str]) -> Profile {
        Profile {
            user_id: user_id.to_string(),
            name: format!("User {}", user_id),
            bio: String::new(),
            avatar_url: None,
            teach_skills: teach.iter().map(|n| Skill::new(n)).collect(),
            learn_skills: learn.iter().map(|n| Skill::new(n)).collect(),
            favorite_ice_cream: None,
            spirit_animal: None,
            personal_color: None,
            personality_type: None,
            daily_rhythm: None,
            created_at: None,
        }
    }

    #[test]
    fn test_rank_candidates_basic() {
        let matcher = Matcher::new();
        let me = profile("me", &["Rust"], &["Python"]);

        let candidates = vec![
            profile("1", &["Python"], &["Rust"]), // reciprocal
            profile("2", &["Figma"], &["Excel"]), // no overlap
        ];

        let result = matcher.rank_candidates(&me, candidates, 10);

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, "1");
    }

    #[test]
    fn test_requesting_user_never_ranked() {
        let matcher = Matcher::new();
        let me = profile("me", &["Rust"], &["Rust"]);

        // A stale pool that still contains the requester
        let candidates = vec![me.clone(), profile("other", &["Rust"], &["Rust"])];

        let result = matcher.rank_candidates(&me, candidates, 10);

        assert!(result.matches.iter().all(|m| m.user_id != "me"));
        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_sorted_by_score_descending() {
        let matcher = Matcher::new();
        let me = profile("me", &["Rust", "Go"], &["Python", "Piano"]);

        let candidates = vec![
            // One-directional overlap only
            profile("weak", &["Piano"], &["Sketching"]),
            // Reciprocal on two names
            profile("strong", &["Python", "Piano"], &["Rust", "Go"]),
        ];

        let result = matcher.rank_candidates(&me, candidates, 10);

        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].user_id, "strong");
        assert!(result.matches[0].score > result.matches[1].score);
    }

    #[test]
    fn test_tie_break_by_user_id_ascending() {
        let matcher = Matcher::new();
        let me = profile("me", &["Rust"], &["Python"]);

        // Identical skill shapes produce identical scores
        let candidates = vec![
            profile("charlie", &["Python"], &["Rust"]),
            profile("alice", &["Python"], &["Rust"]),
            profile("bob", &["Python"], &["Rust"]),
        ];

        let result = matcher.rank_candidates(&me, candidates, 10);

        let ids: Vec<&str> = result.matches.iter().map(|m| m.user_id.as_str()).collect();
        assert_eq!(ids, vec!["alice", "bob", "charlie"]);
    }

    #[test]
    fn test_limit_one_returns_top_candidate() {
        let matcher = Matcher::new();
        let me = profile("me", &["Rust", "Go"], &["Python", "Piano"]);

        let candidates = vec![
            profile("mid", &["Python"], &["Sketching"]),
            profile("top", &["Python", "Piano"], &["Rust", "Go"]),
            profile("none", &["Figma"], &["Excel"]),
        ];

        let result = matcher.rank_candidates(&me, candidates, 1);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].user_id, "top");
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::new();
        let me = profile("me", &["Rust"], &["Python"]);

        let candidates: Vec<Profile> = (0..20)
            .map(|i| profile(&format!("u{:02}", i), &["Python"], &["Rust"]))
            .collect();

        let result = matcher.rank_candidates(&me, candidates, 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_candidate_skill_lists_survive_for_display() {
        let matcher = Matcher::new();
        let me = profile("me", &["Rust"], &["Python"]);
        let candidates = vec![profile("1", &["Python", "Python"], &["Rust"])];

        let result = matcher.rank_candidates(&me, candidates, 10);

        // Display lists keep duplicates; only the mutual-skill set is deduped
        assert_eq!(result.matches[0].teach_skills.len(), 2);
        assert_eq!(result.matches[0].mutual_skills.len(), 2); // rust a->b, python b->a
    }
}
