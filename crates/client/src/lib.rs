//! Contact form controller: local validation, submit-button state and toast
//! notifications around a single `POST /api/contact`.

mod api;
mod controller;
mod toast;
mod validation;
mod view;

pub use api::*;
pub use controller::*;
pub use toast::*;
pub use validation::*;
pub use view::*;
