mod classify;
mod service;

pub use classify::classify;
pub use service::*;
