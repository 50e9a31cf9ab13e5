//! Command logic, independent of terminal output.

pub mod add;
pub mod context;
pub mod error;
pub mod project;
pub mod remove;
pub mod search;

pub use context::Context;
pub use error::OpError;
