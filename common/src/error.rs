use thiserror::Error;

use crate::lotto::number::{MAX_NUMBER, MIN_NUMBER};
use crate::lotto::ticket::TICKET_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LottoError {
    #[error(
        "invalid lotto number '{0}': expected an integer between {min} and {max}",
        min = MIN_NUMBER,
        max = MAX_NUMBER
    )]
    InvalidNumber(String),

    #[error("invalid ticket: expected {size} distinct numbers, got {0}", size = TICKET_SIZE)]
    InvalidTicket(String),

    #[error("bonus number {0} is already one of the winning numbers")]
    InvalidBonus(u8),

    #[error("earnings rate is undefined when nothing was spent")]
    DivisionByZero,

    #[error("invalid purchase amount '{0}'")]
    InvalidAmount(String),

    #[error("invalid ticket quantity '{0}'")]
    InvalidQuantity(String),

    #[error("invalid manual ticket count: requested {requested}, available {available}")]
    InvalidManualCount { requested: usize, available: usize },
}
