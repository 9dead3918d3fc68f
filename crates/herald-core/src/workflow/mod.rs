//! Release workflow building blocks

mod changelog;
mod release;

pub use changelog::*;
pub use release::*;
