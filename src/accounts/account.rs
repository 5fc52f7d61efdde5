use chrono::{Datelike, Month, NaiveDate};
use rust_decimal::Decimal;

/// Alias for an account ID
pub type AccountId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
  Male,
  Female,
}

/// This represents a client account as handed over to the query engine.
/// Accounts are owned by the caller, the engine only observes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
  pub id: AccountId,
  pub first_name: String,
  pub last_name: String,
  pub email: String,
  pub sex: Sex,
  pub birthday: NaiveDate,
  pub creation_date: NaiveDate,
  pub balance: Decimal,
}

impl Account {
  /// The part of the email after the `@`, or an empty string for an email without one.
  pub fn email_domain(&self) -> &str {
    self
      .email
      .split_once('@')
      .map(|(_, domain)| domain)
      .unwrap_or("")
  }

  pub fn is_male(&self) -> bool {
    self.sex == Sex::Male
  }

  pub fn birthday_month(&self) -> Month {
    month_of(&self.birthday)
  }

  pub fn creation_month(&self) -> Month {
    month_of(&self.creation_date)
  }
}

fn month_of(date: &NaiveDate) -> Month {
  (0..date.month0()).fold(Month::January, |month, _| month.succ())
}

/// Per month figures used to export a report of the accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
  pub month: Month,
  /// First names of the accounts born in this month, joined by `", "`.
  pub birthday_first_names: String,
  /// Total balance of the accounts created in this month.
  pub created_balance: Decimal,
}

impl MonthlySummary {
  pub fn new(month: Month, birthday_first_names: String, created_balance: Decimal) -> Self {
    Self {
      month,
      birthday_first_names,
      created_balance,
    }
  }
}

#[cfg(test)]
pub(crate) mod tests {

  use rust_decimal_macros::dec;

  use super::*;

  pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
  }

  /// Builds an account with the fields relevant to most queries, leaving the rest with fixed values.
  pub(crate) fn account(id: AccountId, first_name: &str, last_name: &str, email: &str) -> Account {
    Account {
      id,
      first_name: first_name.to_string(),
      last_name: last_name.to_string(),
      email: email.to_string(),
      sex: Sex::Female,
      birthday: date(1990, 1, 1),
      creation_date: date(2020, 1, 1),
      balance: Decimal::ZERO,
    }
  }

  #[test]
  fn account_email_domain() {
    assert_eq!(account(1, "Ann", "Lee", "ann@gmail.com").email_domain(), "gmail.com");
    assert_eq!(account(2, "Bob", "Lee", "bob.at.nowhere").email_domain(), "");
  }

  #[test]
  fn account_is_male() {
    let female = account(1, "Ann", "Lee", "ann@gmail.com");
    let male = Account {
      sex: Sex::Male,
      ..account(2, "Bob", "Lee", "bob@yahoo.com")
    };

    assert!(!female.is_male());
    assert!(male.is_male());
  }

  #[test]
  fn account_months() {
    let account = Account {
      birthday: date(1985, 12, 31),
      creation_date: date(2019, 3, 1),
      ..account(1, "Ann", "Lee", "ann@gmail.com")
    };

    assert_eq!(account.birthday_month(), Month::December);
    assert_eq!(account.creation_month(), Month::March);
  }

  #[test]
  fn month_of_every_month() {
    for number in 1..=12 {
      let month = month_of(&date(2021, number, 15));

      assert_eq!(month.number_from_month(), number);
    }
    assert_eq!(month_of(&date(2021, 1, 1)), Month::January);
    assert_eq!(month_of(&date(2021, 12, 31)), Month::December);
  }

  #[test]
  fn monthly_summary_constructor() {
    assert_eq!(
      MonthlySummary::new(Month::May, "Ann, Bob".to_string(), dec!(10)),
      MonthlySummary {
        month: Month::May,
        birthday_first_names: "Ann, Bob".to_string(),
        created_balance: dec!(10),
      }
    );
  }
}
