//! # Lotto Common
//!
//! Value types shared by every crate in the workspace.
//!
//! * **[`lotto`]**: numbers, tickets and ticket collections.
//! * **[`error`]**: the single error type returned by the library crates.
//! * **[`config`]**: runtime settings resolved from the command line.

pub mod config;
pub mod error;
pub mod lotto;

pub use error::LottoError;

/// Price of a single ticket in currency units.
pub const TICKET_PRICE: u64 = 1_000;

/// Most tickets a single purchase may buy.
pub const MAX_TICKET_COUNT: u64 = 100_000;
