use crate::models::{MatchDirection, MutualSkill, Profile, Skill};
use std::collections::HashSet;

/// Normalize a skill name for matching: trim surrounding whitespace, lowercase
///
/// "  React " and "react" are the same skill. Category and proficiency never
/// participate in matching.
#[inline]
pub fn normalize_skill_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Collect the distinct normalized names in a skill list
///
/// Names that are empty after trimming are dropped; they can never match.
fn normalized_names(skills: &[Skill]) -> HashSet<String> {
    skills
        .iter()
        .map(|s| normalize_skill_name(&s.name))
        .filter(|n| !n.is_empty())
        .collect()
}

/// Names taught by one side that the other side wants to learn
///
/// Ordered by first occurrence in the teach list, one entry per normalized
/// name. The teach list itself may hold duplicates; those collapse here and
/// only here.
fn directed_overlap(teach: &[Skill], wanted: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut overlap = Vec::new();

    for skill in teach {
        let name = normalize_skill_name(&skill.name);
        if name.is_empty() {
            continue;
        }
        if wanted.contains(&name) && seen.insert(name.clone()) {
            overlap.push(name);
        }
    }

    overlap
}

/// Score the reciprocal compatibility of two profiles
///
/// Scoring formula:
/// ```text
/// a_to_b = { names A teaches that B wants to learn }
/// b_to_a = { names B teaches that A wants to learn }
/// V      = union of both users' teach + learn vocabularies
/// score  = min(1, (|a_to_b| + |b_to_a|) / |V|)
/// ```
///
/// The score is in [0,1], zero exactly when both directions are empty, and
/// non-decreasing in mutual-skill count for a fixed vocabulary. Mutual skills
/// list a->b entries first (in A's teach-list order), then b->a entries (in
/// B's teach-list order); a name reciprocated in both directions appears
/// twice, once per direction.
///
/// Pure and infallible: degenerate inputs (empty lists, blank names) degrade
/// to a zero score rather than erroring.
pub fn score_profiles(a: &Profile, b: &Profile) -> (f64, Vec<MutualSkill>) {
    let a_wants = normalized_names(&a.learn_skills);
    let b_wants = normalized_names(&b.learn_skills);

    let a_to_b = directed_overlap(&a.teach_skills, &b_wants);
    let b_to_a = directed_overlap(&b.teach_skills, &a_wants);

    let mut mutual_skills = Vec::with_capacity(a_to_b.len() + b_to_a.len());
    for name in a_to_b {
        mutual_skills.push(MutualSkill { skill: name, direction: MatchDirection::AToB });
    }
    for name in b_to_a {
        mutual_skills.push(MutualSkill { skill: name, direction: MatchDirection::BToA });
    }

    if mutual_skills.is_empty() {
        return (0.0, mutual_skills);
    }

    let mut vocabulary = normalized_names(&a.teach_skills);
    vocabulary.extend(a_wants);
    vocabulary.extend(normalized_names(&b.teach_skills));
    vocabulary.extend(b_wants);

    let score = (mutual_skills.len() as f64 / vocabulary.len() as f64).min(1.0);

    (score, mutual_skills)
}
