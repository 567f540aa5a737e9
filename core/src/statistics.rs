//! # Statistics Engine
//!
//! Applies a [`WinningStrategy`] to every ticket of a collection, counts the
//! resulting tiers and relates the total prize to the amount spent.
//!
//! The result always carries every [`Tier`], zero-filled, so reports can print
//! a fixed table regardless of what was actually won.

use std::collections::BTreeMap;

use lotto_common::lotto::number::LottoNumber;
use lotto_common::lotto::ticket::Ticket;
use lotto_common::lotto::tickets::Tickets;
use lotto_common::{LottoError, TICKET_PRICE};
use tracing::debug;

use crate::strategy::WinningStrategy;
use crate::tier::Tier;

mod rate;

pub use rate::EarningsRate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    counts: BTreeMap<Tier, usize>,
    total_prize: u64,
    amount_spent: u64,
    earnings_rate: EarningsRate,
}

impl Statistics {
    pub fn count_for(&self, tier: Tier) -> usize {
        self.counts.get(&tier).copied().unwrap_or_default()
    }

    /// Every tier with its count, in ascending prize order.
    pub fn counts(&self) -> impl Iterator<Item = (Tier, usize)> + '_ {
        self.counts.iter().map(|(tier, count)| (*tier, *count))
    }

    pub fn ticket_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn total_prize(&self) -> u64 {
        self.total_prize
    }

    pub fn amount_spent(&self) -> u64 {
        self.amount_spent
    }

    pub fn earnings_rate(&self) -> EarningsRate {
        self.earnings_rate
    }
}

/// Classifies every ticket with `strategy` and derives the earnings rate.
///
/// Fails with [`LottoError::DivisionByZero`] when `amount_spent` is zero, before
/// any ticket is looked at.
pub fn compute_statistics(
    tickets: &Tickets,
    strategy: &WinningStrategy,
    amount_spent: u64,
) -> Result<Statistics, LottoError> {
    if amount_spent == 0 {
        return Err(LottoError::DivisionByZero);
    }

    let mut counts: BTreeMap<Tier, usize> = Tier::ALL.into_iter().map(|tier| (tier, 0)).collect();
    for ticket in tickets {
        *counts.entry(strategy.evaluate(ticket)).or_default() += 1;
    }

    let total_prize: u64 = counts
        .iter()
        .map(|(tier, count)| tier.cash_prize() * *count as u64)
        .sum();
    let earnings_rate = EarningsRate::new(total_prize, amount_spent)?;

    debug!(
        tickets = tickets.len(),
        total_prize,
        amount_spent,
        "statistics computed"
    );

    Ok(Statistics {
        counts,
        total_prize,
        amount_spent,
        earnings_rate,
    })
}

/// Scores `tickets` against a draw, charging [`TICKET_PRICE`] per ticket.
///
/// A bonus number selects [`WinningStrategy::MatchWithBonus`], otherwise
/// [`WinningStrategy::BasicMatch`] is used.
pub fn compute(
    tickets: &Tickets,
    winning: &Ticket,
    bonus: Option<LottoNumber>,
) -> Result<Statistics, LottoError> {
    let strategy = WinningStrategy::from_draw(winning.clone(), bonus)?;
    let amount_spent = TICKET_PRICE * tickets.len() as u64;
    compute_statistics(tickets, &strategy, amount_spent)
}
