// Criterion benchmarks for the GBHM matcher

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gbhm_matcher::core::Matcher;
use gbhm_matcher::models::{AlumniProfile, MatchRequest, StudentProfile};

const SKILLS: [&str; 8] = ["Python", "Rust", "SQL", "React", "Go", "Java", "ML", "Excel"];
const INTERESTS: [&str; 4] = ["AI", "Web Development", "Finance", "Music"];
const AREAS: [&str; 3] = ["Career Advice", "Interview Prep", "Resume Review"];

fn pick(items: &[&str], seed: usize, count: usize) -> Vec<String> {
    (0..count).map(|i| items[(seed + i) % items.len()].to_string()).collect()
}

fn create_student(id: usize) -> StudentProfile {
    StudentProfile {
        id: id.to_string(),
        user_id: id.to_string(),
        name: format!("Student {}", id),
        university: "MIT".to_string(),
        degree: "BS".to_string(),
        preferred_industry: Some("Technology".to_string()),
        skills: pick(&SKILLS, id, 4),
        interests: pick(&INTERESTS, id, 2),
        looking_for: pick(&AREAS, id, 2),
        company: None,
        location: None,
    }
}

fn create_alumni(id: usize) -> AlumniProfile {
    AlumniProfile {
        id: id.to_string(),
        user_id: id.to_string(),
        name: format!("Alumni {}", id),
        university: if id % 3 == 0 { "MIT" } else { "Stanford" }.to_string(),
        degree: if id % 2 == 0 { "BS" } else { "MS" }.to_string(),
        industry: if id % 4 == 0 { "Technology" } else { "Finance" }.to_string(),
        skills: pick(&SKILLS, id, 5),
        interests: pick(&INTERESTS, id, 2),
        mentoring_areas: pick(&AREAS, id, 1),
        company: "Acme".to_string(),
        availability: if id % 2 == 0 { "Available" } else { "Busy" }.to_string(),
        location: None,
    }
}

fn bench_calculate_score(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let student = create_student(0);
    let alumni = create_alumni(0);

    c.bench_function("calculate_score", |b| {
        b.iter(|| matcher.calculate_score(black_box(&student), black_box(&alumni)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let student = create_student(0);

    let mut group = c.benchmark_group("rank");

    for alumni_count in [10, 100, 1000, 5000].iter() {
        let alumni: Vec<AlumniProfile> = (0..*alumni_count).map(create_alumni).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", alumni_count),
            alumni_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank(black_box(&student), black_box(&alumni), black_box(Some(20)))
                });
            },
        );
    }

    group.finish();
}

fn bench_rank_batch(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let alumni: Vec<AlumniProfile> = (0..500).map(create_alumni).collect();
    let requests: Vec<MatchRequest> = (0..32)
        .map(|i| MatchRequest {
            student: create_student(i),
            alumni_list: alumni.clone(),
            limit: Some(10),
        })
        .collect();

    c.bench_function("rank_batch_32x500", |b| {
        b.iter(|| matcher.rank_batch(black_box(&requests)));
    });
}

fn bench_explain(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let student = create_student(0);
    let alumni = create_alumni(0);

    c.bench_function("explain", |b| {
        b.iter(|| matcher.explain(black_box(&student), black_box(&alumni)));
    });
}

criterion_group!(
    benches,
    bench_calculate_score,
    bench_rank,
    bench_rank_batch,
    bench_explain
);

criterion_main!(benches);
