//! Contact form domain: submission validation, message composition and the
//! mail transport seam used by the web handler.

mod error;
mod message;
mod response;
mod service;
mod submission;
mod transport;

pub use error::*;
pub use message::*;
pub use response::*;
pub use service::*;
pub use submission::*;
pub use transport::*;
