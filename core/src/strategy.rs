//! Ticket classification against a draw.
//!
//! A [`WinningStrategy`] owns the winning numbers (and, for the bonus variant,
//! the bonus number) and turns any ticket into a [`Tier`]. The set of variants
//! is closed: callers pick one through [`WinningStrategy::from_draw`] and only
//! ever talk to [`WinningStrategy::evaluate`].

use lotto_common::LottoError;
use lotto_common::lotto::bonus::BonusNumber;
use lotto_common::lotto::number::LottoNumber;
use lotto_common::lotto::ticket::Ticket;
use tracing::debug;

use crate::tier::Tier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinningStrategy {
    /// Classifies on the number of matches alone.
    BasicMatch { winning: Ticket },
    /// Like `BasicMatch`, but five matches plus the bonus number is its own tier.
    MatchWithBonus { winning: Ticket, bonus: BonusNumber },
}

impl WinningStrategy {
    pub fn basic(winning: Ticket) -> Self {
        WinningStrategy::BasicMatch { winning }
    }

    /// Fails with [`LottoError::InvalidBonus`] when `bonus` is one of the winning numbers.
    pub fn with_bonus(winning: Ticket, bonus: LottoNumber) -> Result<Self, LottoError> {
        let bonus = BonusNumber::new(bonus, &winning)?;
        Ok(WinningStrategy::MatchWithBonus { winning, bonus })
    }

    /// Picks the variant from the draw: a bonus number selects `MatchWithBonus`.
    pub fn from_draw(winning: Ticket, bonus: Option<LottoNumber>) -> Result<Self, LottoError> {
        let strategy = match bonus {
            Some(bonus) => Self::with_bonus(winning, bonus)?,
            None => Self::basic(winning),
        };
        debug!(strategy = strategy.name(), "winning strategy selected");
        Ok(strategy)
    }

    pub fn evaluate(&self, ticket: &Ticket) -> Tier {
        match self {
            WinningStrategy::BasicMatch { winning } => {
                Tier::from_matches(ticket.match_count(winning), false)
            }
            WinningStrategy::MatchWithBonus { winning, bonus } => {
                let match_count = ticket.match_count(winning);
                let bonus_matched = match_count == 5 && ticket.contains(&bonus.number());
                Tier::from_matches(match_count, bonus_matched)
            }
        }
    }

    pub fn winning(&self) -> &Ticket {
        match self {
            WinningStrategy::BasicMatch { winning } => winning,
            WinningStrategy::MatchWithBonus { winning, .. } => winning,
        }
    }

    pub fn bonus(&self) -> Option<BonusNumber> {
        match self {
            WinningStrategy::BasicMatch { .. } => None,
            WinningStrategy::MatchWithBonus { bonus, .. } => Some(*bonus),
        }
    }

    /// Prize tiers this strategy can produce, in report order.
    pub fn prize_tiers(&self) -> Vec<Tier> {
        let with_bonus = self.bonus().is_some();
        Tier::ALL
            .into_iter()
            .filter(|tier| tier.is_prize())
            .filter(|tier| with_bonus || !tier.requires_bonus())
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            WinningStrategy::BasicMatch { .. } => "basic match",
            WinningStrategy::MatchWithBonus { .. } => "match with bonus",
        }
    }
}
