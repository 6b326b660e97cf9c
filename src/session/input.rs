use std::time::Instant;

use crate::session::drill::DrillState;

#[derive(Clone, Debug, PartialEq)]
pub enum CharStatus {
    Correct,
    Incorrect(char),
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeystrokeEvent {
    /// Statistics are always attributed to the key the text asked for.
    pub expected: char,
    pub actual: char,
    pub correct: bool,
    /// Time since the previous keystroke, or since the text appeared.
    pub latency_ms: f64,
}

pub fn process_char(drill: &mut DrillState, ch: char, now: Instant) -> Option<KeystrokeEvent> {
    let expected = drill.expected()?;
    let correct = ch == expected;
    let latency_ms = now.saturating_duration_since(drill.last_key_at).as_secs_f64() * 1000.0;

    drill.input.push(if correct {
        CharStatus::Correct
    } else {
        CharStatus::Incorrect(ch)
    });
    drill.cursor += 1;
    drill.last_key_at = now;

    if drill.is_complete() {
        drill.finished_at = Some(now);
    }

    Some(KeystrokeEvent {
        expected,
        actual: ch,
        correct,
        latency_ms,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_latency_measured_from_previous_key() {
        let t0 = Instant::now();
        let mut drill = DrillState::shown_at("ab", t0);

        let first = process_char(&mut drill, 'a', t0 + Duration::from_millis(400)).unwrap();
        assert!(first.correct);
        assert!((first.latency_ms - 400.0).abs() < 0.5);

        let second = process_char(&mut drill, 'x', t0 + Duration::from_millis(550)).unwrap();
        assert!(!second.correct);
        assert_eq!(second.expected, 'b');
        assert_eq!(second.actual, 'x');
        assert!((second.latency_ms - 150.0).abs() < 0.5);
        assert_eq!(drill.input[1], CharStatus::Incorrect('x'));
    }

    #[test]
    fn test_no_events_after_completion() {
        let t0 = Instant::now();
        let mut drill = DrillState::shown_at("a", t0);
        assert!(process_char(&mut drill, 'a', t0).is_some());
        assert!(drill.finished_at.is_some());
        assert!(process_char(&mut drill, 'a', t0).is_none());
        assert_eq!(drill.cursor, 1);
    }
}
