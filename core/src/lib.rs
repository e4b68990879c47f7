//! # Teamnet Core
//!
//! The **Subnet Deriver** and everything built directly on top of it.
//!
//! * **[`deriver`]**: team number to `10.<second>.<third>.0/24`. Pure, no I/O.
//! * **[`projection`]**: the CIDR-string and details-record views of one derivation.
//! * **[`batch`]**: many identifiers at once, strict or skipping.
//! * **[`lookup`]**: subnet back to team number.
//! * **[`filters`]**: named functions a templating host can bind.
//!
//! **Architectural Note:**
//! Only [`deriver`] validates and decomposes identifiers. Every other module
//! goes through it, so the two output shapes can never drift apart.

pub mod batch;
pub mod deriver;
pub mod filters;
pub mod lookup;
pub mod projection;
