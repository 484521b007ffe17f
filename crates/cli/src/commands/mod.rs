//! CLI command implementations

mod info;
mod send;
mod validate;

pub use info::run_info;
pub use send::run_send;
pub use validate::run_validate;
