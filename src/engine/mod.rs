pub mod difficulty;
pub mod filter;
pub mod focus;
pub mod key_stats;
pub mod letter_unlock;
pub mod profile;

pub use difficulty::DifficultyModel;
pub use profile::LearnerProfile;
