//! # Teamnet Common
//!
//! Shared data model for the team subnet deriver: team identifiers, the
//! derived subnet descriptor, the error taxonomy and the runtime config.

pub mod config;
pub mod error;
pub mod macros;
pub mod network;
pub mod team;

pub use error::{Octet, SubnetError};

#[doc(hidden)]
pub use tracing as __tracing;
