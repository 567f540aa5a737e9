use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::LottoError;
use crate::lotto::number::LottoNumber;

pub const TICKET_SIZE: usize = 6;
const DELIMITER: char = ',';

/// Six distinct lotto numbers.
///
/// Used both for the tickets a player holds and for the winning draw.
/// Numbers are kept in ascending order, which is also the display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: BTreeSet<LottoNumber>,
}

impl Ticket {
    /// Builds a ticket from exactly six distinct numbers.
    ///
    /// The input itself must hold exactly six values with no repeats: a sequence such
    /// as `[1, 1, 2, 3, 4, 5, 6]` is rejected even though its distinct values number six.
    /// Fails with [`LottoError::InvalidTicket`] otherwise.
    pub fn new<I>(numbers: I) -> Result<Self, LottoError>
    where
        I: IntoIterator<Item = LottoNumber>,
    {
        let given: Vec<LottoNumber> = numbers.into_iter().collect();
        let numbers: BTreeSet<LottoNumber> = given.iter().copied().collect();

        if given.len() != TICKET_SIZE || numbers.len() != TICKET_SIZE {
            return Err(LottoError::InvalidTicket(describe(&given)));
        }

        Ok(Self { numbers })
    }

    /// Shorthand for building a ticket from raw values.
    pub fn from_values(values: &[u8]) -> Result<Self, LottoError> {
        let numbers = values
            .iter()
            .map(|&value| LottoNumber::new(value))
            .collect::<Result<Vec<LottoNumber>, LottoError>>()?;
        Self::new(numbers)
    }

    /// Draws six distinct numbers uniformly, without replacement.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let pool: Vec<LottoNumber> = LottoNumber::all().collect();
        let numbers: BTreeSet<LottoNumber> = pool.choose_multiple(rng, TICKET_SIZE).copied().collect();
        Self { numbers }
    }

    pub fn contains(&self, number: &LottoNumber) -> bool {
        self.numbers.contains(number)
    }

    /// Number of values this ticket shares with `other`, in `[0, 6]`.
    pub fn match_count(&self, other: &Ticket) -> usize {
        self.numbers.intersection(&other.numbers).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LottoNumber> {
        self.numbers.iter()
    }
}

impl FromStr for Ticket {
    type Err = LottoError;

    /// Parses a comma separated list such as `"1, 2, 3, 4, 5, 6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split(DELIMITER)
            .map(LottoNumber::from_str)
            .collect::<Result<Vec<LottoNumber>, LottoError>>()?;

        Self::new(numbers)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers: Vec<LottoNumber> = self.numbers.iter().copied().collect();
        f.write_str(&describe(&numbers))
    }
}

fn describe(numbers: &[LottoNumber]) -> String {
    let joined: Vec<String> = numbers.iter().map(LottoNumber::to_string).collect();
    format!("[{}]", joined.join(", "))
}
