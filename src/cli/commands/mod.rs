//! Command implementations

mod compare;
mod init;
mod resolve;
mod rules;

pub use compare::compare;
pub use init::init;
pub use resolve::resolve;
pub use rules::rules;
