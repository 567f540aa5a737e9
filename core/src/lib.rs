//! # Lotto Core
//!
//! The scoring engine of the game.
//!
//! * **[`tier`]**: prize categories and their cash value.
//! * **[`strategy`]**: how a single ticket is classified against a draw.
//! * **[`statistics`]**: tallies every ticket and derives the earnings rate.
//! * **[`purchase`]**: turns a purchase amount into manual and automatic tickets.
//! * **[`generator`]**: random ticket generation behind an injected RNG.
//!
//! Nothing in here performs I/O; the command line crate drives it.

pub mod generator;
pub mod purchase;
pub mod statistics;
pub mod strategy;
pub mod tier;
