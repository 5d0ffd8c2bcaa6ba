mod driver;
mod event;
mod prediction;
mod session;
mod team;

pub use driver::Driver;
pub use event::{Event, EventResult, DNF};
pub use prediction::Prediction;
pub use session::{Session, SessionType};
pub use team::Team;
