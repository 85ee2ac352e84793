//! Inversion engine implementations.

pub mod batch;
pub mod dehoog;
pub mod iseger;
pub mod stehfest;

pub use batch::{invert_sequence, invert_sequence_parallel};
pub use dehoog::DeHoogEngine;
pub use iseger::IsegerEngine;
pub use stehfest::StehfestEngine;
