use std::fmt;

use lotto_common::LottoError;
use num_rational::Ratio;

const DEFAULT_PRECISION: usize = 2;

/// Total prize divided by amount spent, kept as an exact fraction.
///
/// Formatting honours the standard precision flag and rounds half up:
/// `format!("{:.1}", rate)`. Without a precision two digits are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EarningsRate(Ratio<u64>);

impl EarningsRate {
    pub fn new(total_prize: u64, amount_spent: u64) -> Result<Self, LottoError> {
        if amount_spent == 0 {
            return Err(LottoError::DivisionByZero);
        }
        Ok(Self(Ratio::new(total_prize, amount_spent)))
    }

    pub fn as_ratio(&self) -> Ratio<u64> {
        self.0
    }

    /// The same rate scaled by 100.
    pub fn percent(&self) -> Self {
        Self(self.0 * Ratio::from_integer(100))
    }

    /// Below break-even.
    pub fn is_loss(&self) -> bool {
        self.0 < Ratio::from_integer(1)
    }
}

impl fmt::Display for EarningsRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_PRECISION);
        let denom = u128::from(*self.0.denom());
        let numer = u128::from(*self.0.numer());

        // Long division, one digit at a time; `remainder < denom` keeps `* 10` in range.
        let mut integer = numer / denom;
        let mut remainder = numer % denom;
        let mut fraction: Vec<u8> = Vec::with_capacity(digits);
        for _ in 0..digits {
            remainder *= 10;
            fraction.push((remainder / denom) as u8);
            remainder %= denom;
        }

        if remainder * 2 >= denom {
            let mut carry = true;
            for digit in fraction.iter_mut().rev() {
                if *digit == 9 {
                    *digit = 0;
                } else {
                    *digit += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                integer += 1;
            }
        }

        write!(f, "{integer}")?;
        if digits > 0 {
            let fraction: String = fraction.iter().map(|d| char::from(b'0' + d)).collect();
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}
