pub mod drill;
pub mod input;
pub mod practice;
