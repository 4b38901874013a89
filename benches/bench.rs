// Criterion benchmarks for the ProfileReels review engine

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use profile_reels::core::{indicator_for, GestureTracker, ReviewSession};
use profile_reels::models::{Profile, ProfileId};

fn create_profile(id: ProfileId) -> Profile {
    Profile {
        id,
        name: format!("Candidate {}", id),
        title: "Backend Engineer".to_string(),
        image: format!("https://img.example/{}.jpg", id),
        experience: format!("{} years", id % 10),
        skills: vec!["Rust".to_string(), "AWS".to_string()],
        education: "M.S. Computer Engineering".to_string(),
        bio: "Builds scalable systems.".to_string(),
    }
}

fn bench_indicator(c: &mut Criterion) {
    c.bench_function("indicator_for", |b| {
        b.iter(|| indicator_for(black_box(73.5)));
    });
}

fn bench_gesture_drag(c: &mut Criterion) {
    c.bench_function("gesture_drag_100_moves", |b| {
        b.iter(|| {
            let mut tracker = GestureTracker::new();
            tracker.start(black_box(0.0));
            for step in 0..100 {
                tracker.move_to(black_box(step as f64 * 1.5));
            }
            black_box(tracker.release())
        });
    });
}

fn bench_review_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("review_pass");

    for deck_size in [10u32, 100, 1000].iter() {
        let profiles: Vec<Profile> = (1..=*deck_size).map(create_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("commit_then_undo_all", deck_size),
            deck_size,
            |b, _| {
                b.iter(|| {
                    let mut session = ReviewSession::new(black_box(profiles.clone()));
                    let mut select = true;
                    while session.current_profile().is_some() {
                        if select {
                            session.select();
                        } else {
                            session.reject();
                        }
                        session.settle();
                        select = !select;
                    }
                    while session.undo().is_some() {
                        session.settle();
                    }
                    black_box(session.snapshot())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_indicator,
    bench_gesture_drag,
    bench_review_pass
);

criterion_main!(benches);
