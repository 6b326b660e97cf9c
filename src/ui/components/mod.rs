pub mod key_difficulty;
pub mod stats_header;
pub mod typing_area;
