pub mod drivers;
pub mod events;
pub mod leaderboard;
pub mod predictions;
pub mod results;
