mod employees;
mod leaves;
mod notifications;
mod tasks;
mod users;

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;
