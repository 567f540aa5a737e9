use std::fmt;

/// A prize category.
///
/// Variants are declared in ascending prize order, which is also the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    NoPrize,
    ThreeMatches,
    FourMatches,
    FiveMatches,
    FiveAndBonusMatches,
    SixMatches,
}

impl Tier {
    pub const ALL: [Tier; 6] = [
        Tier::NoPrize,
        Tier::ThreeMatches,
        Tier::FourMatches,
        Tier::FiveMatches,
        Tier::FiveAndBonusMatches,
        Tier::SixMatches,
    ];

    /// Classifies a ticket by its number of matches with the winning set.
    ///
    /// `bonus_matched` only matters for five matches; it never downgrades or
    /// upgrades any other count.
    pub fn from_matches(match_count: usize, bonus_matched: bool) -> Tier {
        match (match_count, bonus_matched) {
            (6, _) => Tier::SixMatches,
            (5, true) => Tier::FiveAndBonusMatches,
            (5, false) => Tier::FiveMatches,
            (4, _) => Tier::FourMatches,
            (3, _) => Tier::ThreeMatches,
            _ => Tier::NoPrize,
        }
    }

    pub const fn cash_prize(self) -> u64 {
        match self {
            Tier::NoPrize => 0,
            Tier::ThreeMatches => 5_000,
            Tier::FourMatches => 50_000,
            Tier::FiveMatches => 1_500_000,
            Tier::FiveAndBonusMatches => 30_000_000,
            Tier::SixMatches => 2_000_000_000,
        }
    }

    /// Matches a ticket needs for this tier. `0` for [`Tier::NoPrize`].
    pub const fn match_count(self) -> usize {
        match self {
            Tier::NoPrize => 0,
            Tier::ThreeMatches => 3,
            Tier::FourMatches => 4,
            Tier::FiveMatches | Tier::FiveAndBonusMatches => 5,
            Tier::SixMatches => 6,
        }
    }

    pub const fn requires_bonus(self) -> bool {
        matches!(self, Tier::FiveAndBonusMatches)
    }

    pub const fn is_prize(self) -> bool {
        !matches!(self, Tier::NoPrize)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::NoPrize => f.write_str("no prize"),
            Tier::FiveAndBonusMatches => f.write_str("5 matches + bonus"),
            tier => write!(f, "{} matches", tier.match_count()),
        }
    }
}
