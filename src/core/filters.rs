use crate::models::RankedMatch;

/// Case-insensitive substring search over an already-ranked match list
///
/// Mirrors the frontend's local search box: purely client-side in the real
/// app, reproduced here as a pure function so the behavior is pinned down.
/// An empty or whitespace-only query keeps every entry; relative order is
/// preserved.
pub fn filter_ranked(matches: &[RankedMatch], query: &str) -> Vec<RankedMatch> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return matches.to_vec();
    }

    matches
        .iter()
        .filter(|m| ranked_match_contains(m, &needle))
        .cloned()
        .collect()
}

/// Whether any display field of a ranked match contains the needle
///
/// Searches candidate name, bio, and every skill name (teach, learn, mutual).
#[inline]
fn ranked_match_contains(m: &RankedMatch, needle: &str) -> bool {
    if m.name.to_lowercase().contains(needle) || m.bio.to_lowercase().contains(needle) {
        return true;
    }

    m.teach_skills
        .iter()
        .chain(m.learn_skills.iter())
        .any(|s| s.name.to_lowercase().contains(needle))
        || m.mutual_skills.iter().any(|s| s.skill.contains(needle))
}
