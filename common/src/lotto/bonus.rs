use std::fmt;

use crate::error::LottoError;
use crate::lotto::number::LottoNumber;
use crate::lotto::ticket::Ticket;

/// The extra number drawn alongside a winning ticket.
///
/// Always one of the numbers *not* in the winning set it was built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BonusNumber(LottoNumber);

impl BonusNumber {
    pub fn new(number: LottoNumber, winning: &Ticket) -> Result<Self, LottoError> {
        if winning.contains(&number) {
            return Err(LottoError::InvalidBonus(number.value()));
        }
        Ok(Self(number))
    }

    pub fn number(&self) -> LottoNumber {
        self.0
    }
}

impl fmt::Display for BonusNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_winning_number() {
        let winning = Ticket::from_values(&[1, 2, 3, 4, 5, 6]).unwrap();
        let six = LottoNumber::new(6).unwrap();

        assert_eq!(BonusNumber::new(six, &winning), Err(LottoError::InvalidBonus(6)));
    }

    #[test]
    fn accepts_any_remaining_number() {
        let winning = Ticket::from_values(&[1, 2, 3, 4, 5, 6]).unwrap();
        let remaining = LottoNumber::all().filter(|n| !winning.contains(n));

        for number in remaining {
            assert_eq!(BonusNumber::new(number, &winning).unwrap().number(), number);
        }
    }
}
