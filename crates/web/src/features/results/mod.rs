pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::{event_routes, routes};
