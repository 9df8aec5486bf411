pub mod ask;
pub mod health;

pub use ask::{ask, AskRequest, AskResponse};
pub use health::{health, HealthResponse};
