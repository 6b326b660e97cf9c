/// How aggressively word selection drills the weakest keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusRegime {
    /// Chance that a word slot is filled with a targeted word.
    pub focus_probability: f64,
    /// Preferred number of distinct difficult keys in a targeted word.
    pub min_difficult_keys: usize,
}

impl FocusRegime {
    /// Struggling learners get concentrated repetition; accurate learners get
    /// mostly natural word choice.
    pub fn for_accuracy(avg_accuracy: f64) -> Self {
        if avg_accuracy < 75.0 {
            Self {
                focus_probability: 0.9,
                min_difficult_keys: 2,
            }
        } else if avg_accuracy < 90.0 {
            Self {
                focus_probability: 0.6,
                min_difficult_keys: 1,
            }
        } else {
            Self {
                focus_probability: 0.3,
                min_difficult_keys: 0,
            }
        }
    }
}

/// Accuracy above which text opens with a sentence starter.
pub const SENTENCE_FLOW_ACCURACY: f64 = 90.0;
