use rust_decimal::Decimal;
use serde::Serialize;

use crate::accounts;

const MAX_PRECISION: u32 = 2;

/// A monthly summary used to serialize into a CSV file
#[derive(Debug, PartialEq, Serialize)]
pub struct MonthlySummary {
  month: &'static str,
  birthdays: String,
  created_balance: Decimal,
}

impl From<accounts::MonthlySummary> for MonthlySummary {
  /// A conversion between the domain representation of a monthly summary into a serializable structure
  fn from(summary: accounts::MonthlySummary) -> Self {
    MonthlySummary {
      month: summary.month.name(),
      birthdays: summary.birthday_first_names,
      created_balance: with_max_precision(summary.created_balance),
    }
  }
}

fn with_max_precision(mut value: Decimal) -> Decimal {
  if value.scale() > MAX_PRECISION {
    value.rescale(MAX_PRECISION);
  }
  if value.is_zero() {
    value = Decimal::ZERO;
  }
  value
}
