//! Shared fixtures for the integration tests.

use lotto_common::lotto::number::LottoNumber;
use lotto_common::lotto::ticket::Ticket;

/// Ticket holding every number from `start` to `end`, both inclusive.
pub fn ticket_range(start: u8, end: u8) -> Ticket {
    let values: Vec<u8> = (start..=end).collect();
    Ticket::from_values(&values).expect("fixture range must hold six valid numbers")
}

pub fn ticket(values: &[u8]) -> Ticket {
    Ticket::from_values(values).expect("fixture ticket must be valid")
}

pub fn number(value: u8) -> LottoNumber {
    LottoNumber::new(value).expect("fixture number must be in range")
}
