//! Herald Strategies - Version strategies for release automation
//!
//! This crate turns the signals of classified commits into the next semantic
//! version.

mod calculator;
mod semver;
mod traits;
pub mod types;

pub use crate::calculator::{NextVersion, VersionCalculator};
pub use crate::semver::SemVerStrategy;
pub use crate::traits::VersionStrategy;
pub use crate::types::{BumpType, Version};
