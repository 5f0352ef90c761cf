pub mod assistant;
pub mod common;
pub mod day;
pub mod food;
pub mod tracker;
pub mod workout;
