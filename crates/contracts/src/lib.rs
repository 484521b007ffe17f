//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-module data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Delivery Model
//! - `push` is exactly one attempt per call; acknowledgement and retry belong to the caller
//! - Forwarders are immutable after construction and safe to share across messages

mod entry;
mod error;
mod forwarder;
mod publish;

pub use entry::*;
pub use error::*;
pub use forwarder::{Forwarder, LocalForwarder};
pub use publish::*;
