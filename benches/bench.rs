// Criterion benchmarks for SkillSwap Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skillswap_algo::core::{score_profiles, Matcher};
use skillswap_algo::models::{Profile, Skill};

const SKILL_NAMES: &[&str] = &[
    "React", "Vue", "CSS", "Python", "Rust", "Go", "Node.js", "Swift", "Kotlin",
    "PyTorch", "Figma", "Docker", "Kubernetes", "PostgreSQL", "Redis", "AWS",
];

fn create_candidate(id: usize) -> Profile {
    let teach: Vec<Skill> = (0..3)
        .map(|k| Skill::new(SKILL_NAMES[(id + k) % SKILL_NAMES.len()]))
        .collect();
    let learn: Vec<Skill> = (0..3)
        .map(|k| Skill::new(SKILL_NAMES[(id + k + 7) % SKILL_NAMES.len()]))
        .collect();

    Profile {
        user_id: format!("user-{}", id),
        name: format!("User {}", id),
        bio: String::new(),
        avatar_url: None,
        teach_skills: teach,
        learn_skills: learn,
        favorite_ice_cream: None,
        spirit_animal: None,
        personal_color: None,
        personality_type: None,
        daily_rhythm: None,
        created_at: None,
    }
}

fn create_requester() -> Profile {
    Profile {
        user_id: "current_user".to_string(),
        name: "Current User".to_string(),
        bio: String::new(),
        avatar_url: None,
        teach_skills: vec![Skill::new("Rust"), Skill::new("PostgreSQL"), Skill::new("Docker")],
        learn_skills: vec![Skill::new("React"), Skill::new("Figma"), Skill::new("PyTorch")],
        favorite_ice_cream: None,
        spirit_animal: None,
        personal_color: None,
        personality_type: None,
        daily_rhythm: None,
        created_at: None,
    }
}

fn bench_score_profiles(c: &mut Criterion) {
    let requester = create_requester();
    let candidate = create_candidate(3);

    c.bench_function("score_profiles", |b| {
        b.iter(|| score_profiles(black_box(&requester), black_box(&candidate)));
    });
}

fn bench_score_profiles_wide_lists(c: &mut Criterion) {
    // Profiles with 50 skills per list, the pathological editor case
    let mut requester = create_requester();
    let mut candidate = create_candidate(5);
    for i in 0..50 {
        requester.teach_skills.push(Skill::new(SKILL_NAMES[i % SKILL_NAMES.len()]));
        candidate.learn_skills.push(Skill::new(SKILL_NAMES[(i + 3) % SKILL_NAMES.len()]));
    }

    c.bench_function("score_profiles_wide_lists", |b| {
        b.iter(|| score_profiles(black_box(&requester), black_box(&candidate)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::new();
    let requester = create_requester();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank_candidates(
                        black_box(&requester),
                        black_box(candidates.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_profiles,
    bench_score_profiles_wide_lists,
    bench_ranking
);
criterion_main!(benches);
