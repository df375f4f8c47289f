// core/src/money.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Separator between the currency symbol and the amount, as `Intl.NumberFormat('pt-BR')` emits it.
pub const CURRENCY_SEPARATOR: char = '\u{a0}';

/// A non-negative amount of Brazilian reais, stored in centavos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
  pub const ZERO: Money = Money(0);

  pub const fn from_cents(cents: u64) -> Self {
    Money(cents)
  }

  pub const fn cents(self) -> u64 {
    self.0
  }

  /// Unit price times a line quantity. Saturates instead of wrapping.
  pub fn times(self, quantity: u32) -> Money {
    Money(self.0.saturating_mul(u64::from(quantity)))
  }
}

impl Add for Money {
  type Output = Money;

  fn add(self, rhs: Money) -> Money {
    Money(self.0.saturating_add(rhs.0))
  }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
    iter.fold(Money::ZERO, Add::add)
  }
}

// R$ 1.234,56
impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let units = (self.0 / 100).to_string();
    let centavos = self.0 % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
      if i > 0 && (units.len() - i) % 3 == 0 {
        grouped.push('.');
      }
      grouped.push(digit);
    }

    write!(f, "R${}{},{:02}", CURRENCY_SEPARATOR, grouped, centavos)
  }
}
