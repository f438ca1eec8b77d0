mod check;
mod server;
mod submit;

pub use check::check_config;
pub use server::serve;
pub use submit::{SubmitArgs, submit};
