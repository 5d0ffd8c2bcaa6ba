pub mod common;
pub mod driver;
pub mod event;
pub mod leaderboard;
pub mod prediction;
pub mod result;
