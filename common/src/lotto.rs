//! # Lotto Value Objects
//!
//! * [`number::LottoNumber`]: a single number in `[1, 45]`.
//! * [`ticket::Ticket`]: six distinct numbers, used for both tickets and the winning draw.
//! * [`bonus::BonusNumber`]: the extra draw, never part of the winning set.
//! * [`tickets::Tickets`]: every ticket a player holds, in purchase order.
//!
//! All of them are immutable once constructed; constructors validate and fail fast.

pub mod bonus;
pub mod number;
pub mod ticket;
pub mod tickets;
