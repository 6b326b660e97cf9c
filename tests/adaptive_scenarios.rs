use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tempfile::TempDir;

use homerow::engine::difficulty::DifficultyModel;
use homerow::engine::key_stats::KeyStatsStore;
use homerow::engine::letter_unlock;
use homerow::engine::profile::LearnerProfile;
use homerow::generator::{self, FALLBACK_TEXT, GenerationMode};
use homerow::session::practice::PracticeSession;
use homerow::store::json_store::JsonStore;

fn practice(profile: &mut LearnerProfile, key: char, correct: u32, incorrect: u32, ms: f64) {
    for _ in 0..correct {
        profile.record_keystroke(key, true, ms);
    }
    for _ in 0..incorrect {
        profile.record_keystroke(key, false, ms);
    }
}

fn profile_with(keys: &str) -> LearnerProfile {
    let unlocked: BTreeSet<char> = keys.chars().collect();
    LearnerProfile::from_parts(KeyStatsStore::default(), unlocked, 0)
}

#[test]
fn test_early_practice_does_not_unlock() {
    let mut profile = LearnerProfile::new();
    for key in ['a', 's', 'd', 'f'] {
        practice(&mut profile, key, 10, 0, 150.0);
        practice(&mut profile, key, 0, 2, 200.0);
    }

    let model = DifficultyModel::new(&profile);
    assert!((profile.accuracy('a') - 83.333).abs() < 0.01);
    let difficulty = model.difficulty('a');
    assert!(difficulty > 0.0 && difficulty < 50.0);
    assert!(!letter_unlock::should_unlock_next(&profile));
}

#[test]
fn test_sustained_fast_accurate_practice_unlocks_g() {
    let mut profile = LearnerProfile::new();
    for key in ['a', 's', 'd', 'f'] {
        practice(&mut profile, key, 10, 0, 150.0);
        practice(&mut profile, key, 0, 2, 200.0);
    }
    let keys: Vec<char> = profile.unlocked_keys().iter().copied().collect();
    for key in keys {
        practice(&mut profile, key, 50, 0, 100.0);
    }

    assert!(letter_unlock::should_unlock_next(&profile));
    assert_eq!(letter_unlock::next_key_to_unlock(&profile), Some('g'));
    assert_eq!(letter_unlock::evaluate(&mut profile), Some('g'));
    assert!(profile.is_unlocked('g'));
    assert_eq!(profile.unlocked_count(), 9);
}

#[test]
fn test_struggling_learner_gets_words_packed_with_weak_keys() {
    let mut profile = profile_with("asdfjkl ghetinro");
    for key in profile.unlocked_letters() {
        if matches!(key, 's' | 'l' | 'f') {
            practice(&mut profile, key, 1, 4, 300.0);
        } else {
            practice(&mut profile, key, 3, 2, 200.0);
        }
    }

    let model = DifficultyModel::new(&profile);
    let top = model.top_difficult_letters(5);
    assert_eq!(top, vec!['f', 'l', 's', 'a', 'd']);
    assert!((model.average_letter_accuracy() - 52.0).abs() < 0.01);

    let mut words_gen = generator::build(GenerationMode::Word, SmallRng::seed_from_u64(11));
    let mut total = 0;
    let mut targeted = 0;
    for _ in 0..250 {
        let text = words_gen.generate(&profile, 8);
        for word in text.split(' ') {
            total += 1;
            let hits = top.iter().filter(|&&k| word.contains(k)).count();
            if hits >= 2 {
                targeted += 1;
            }
        }
    }

    assert_eq!(total, 2000);
    let share = targeted as f64 / total as f64;
    assert!(share >= 0.9, "only {share:.3} of words hit two weak keys");
}

#[test]
fn test_generation_only_uses_unlocked_keys() {
    let mut profile = profile_with("asdfjkl gh");
    practice(&mut profile, 'g', 2, 6, 400.0);

    for mode in [GenerationMode::Word, GenerationMode::Character] {
        let mut text_gen = generator::build(mode, SmallRng::seed_from_u64(5));
        for _ in 0..50 {
            let text = text_gen.generate(&profile, 12);
            assert!(!text.is_empty());
            assert!(
                text.chars().all(|c| profile.is_unlocked(c)),
                "{} produced locked key in {text:?}",
                mode.as_str()
            );
        }
    }
}

#[test]
fn test_empty_unlocked_set_falls_back() {
    let profile = profile_with("");
    for mode in [GenerationMode::Word, GenerationMode::Character] {
        let mut text_gen = generator::build(mode, SmallRng::seed_from_u64(9));
        assert_eq!(text_gen.generate(&profile, 8), FALLBACK_TEXT);
    }
}

#[test]
fn test_session_progress_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");

    let text_gen = generator::build(GenerationMode::Word, SmallRng::seed_from_u64(1));
    let mut session = PracticeSession::new(
        LearnerProfile::new(),
        text_gen,
        Some(JsonStore::with_path(&path)),
        4,
    );
    session.begin();

    let t0 = Instant::now();
    let text: Vec<char> = session.drill().target.clone();
    for (i, &ch) in text.iter().enumerate() {
        session.type_char_at(ch, t0 + Duration::from_millis(150 * (i as u64 + 1)));
    }
    assert!(session.drill().is_complete());
    session.finish().unwrap();

    let restored = JsonStore::with_path(&path).load_profile().unwrap();
    assert_eq!(restored.session_count, 1);
    assert_eq!(restored.total_keystrokes(), text.len() as u64);
    assert_eq!(restored.unlocked_keys(), session.profile().unlocked_keys());
    let first = text[0];
    assert_eq!(restored.accuracy(first), 100.0);
    let speed = restored.average_speed(first);
    assert!((150.0..160.0).contains(&speed), "unexpected speed {speed}");
}
