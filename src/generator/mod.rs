pub mod char_stream;
pub mod dictionary;
pub mod phonetic;
pub mod transition_table;
pub mod word;

use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::engine::profile::LearnerProfile;
use crate::generator::char_stream::CharStreamGenerator;
use crate::generator::word::WordGenerator;

/// Emitted whenever nothing else can be generated.
pub const FALLBACK_TEXT: &str = "asdf";

pub trait TextGenerator {
    /// `count` is a word count or a symbol count depending on the strategy.
    fn generate(&mut self, profile: &LearnerProfile, count: usize) -> String;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Real dictionary words chosen to exercise weak keys.
    #[default]
    Word,
    /// Weighted stream of individual keys.
    Character,
}

impl GenerationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::Word => "word",
            GenerationMode::Character => "character",
        }
    }
}

pub fn build(mode: GenerationMode, rng: SmallRng) -> Box<dyn TextGenerator> {
    match mode {
        GenerationMode::Word => Box::new(WordGenerator::new(rng)),
        GenerationMode::Character => Box::new(CharStreamGenerator::new(rng)),
    }
}
