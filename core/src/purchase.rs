use lotto_common::lotto::tickets::Tickets;
use lotto_common::{LottoError, MAX_TICKET_COUNT, TICKET_PRICE};
use rand::Rng;
use tracing::debug;

use crate::generator;

/// How many tickets an amount buys, and how many of them the player picks by hand.
///
/// Change left over from the amount is never spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    ticket_count: usize,
    manual_count: usize,
}

impl Purchase {
    /// Fails with [`LottoError::InvalidAmount`] when `amount` buys no ticket or
    /// more than [`MAX_TICKET_COUNT`] tickets.
    pub fn new(amount: u64, manual_count: usize) -> Result<Self, LottoError> {
        let ticket_count = amount / TICKET_PRICE;
        if ticket_count == 0 || ticket_count > MAX_TICKET_COUNT {
            return Err(LottoError::InvalidAmount(amount.to_string()));
        }

        let ticket_count = usize::try_from(ticket_count)
            .map_err(|_| LottoError::InvalidAmount(amount.to_string()))?;

        if manual_count > ticket_count {
            return Err(LottoError::InvalidManualCount {
                requested: manual_count,
                available: ticket_count,
            });
        }

        Ok(Self {
            ticket_count,
            manual_count,
        })
    }

    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    pub fn manual_count(&self) -> usize {
        self.manual_count
    }

    pub fn auto_count(&self) -> usize {
        self.ticket_count - self.manual_count
    }

    pub fn amount_spent(&self) -> u64 {
        self.ticket_count as u64 * TICKET_PRICE
    }

    /// Completes `manual` with randomly generated tickets.
    ///
    /// Manual tickets come first in the returned collection.
    pub fn issue<R: Rng + ?Sized>(&self, manual: &Tickets, rng: &mut R) -> Result<Tickets, LottoError> {
        if manual.len() != self.manual_count {
            return Err(LottoError::InvalidManualCount {
                requested: manual.len(),
                available: self.manual_count,
            });
        }

        let auto = generator::generate(self.auto_count(), rng);
        debug!(manual = manual.len(), auto = auto.len(), "tickets issued");
        Ok(manual.append(&auto))
    }
}

/// Parses a purchase amount in currency units.
pub fn parse_amount(input: &str) -> Result<u64, LottoError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| LottoError::InvalidAmount(input.to_string()))
}

/// Parses the number of manually picked tickets.
pub fn parse_manual_count(input: &str) -> Result<usize, LottoError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| LottoError::InvalidQuantity(input.to_string()))
}
