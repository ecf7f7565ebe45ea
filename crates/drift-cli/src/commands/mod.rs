//! CLI command implementations

pub mod assess;
pub mod detect;
pub mod impact;
pub mod respond;
