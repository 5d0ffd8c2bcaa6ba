pub mod lock;
pub mod scoring;
pub mod submission;
