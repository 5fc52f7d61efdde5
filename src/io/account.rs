use std::convert::TryFrom;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::accounts::{self, AccountId};

/// Reasons for a well formatted record to be rejected as an account.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidAccountRecord {
  #[error("Malformed email for account {0}: {1}")]
  MalformedEmail(AccountId, String),

  #[error("Negative balance for account {0}")]
  NegativeBalance(AccountId),
}

/// The sexes supported by the reader
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
  Male,
  Female,
}

/// A deserializable account
#[derive(Debug, Deserialize)]
pub struct Account {
  id: AccountId,
  first_name: String,
  last_name: String,
  email: String,
  sex: Sex,
  birthday: NaiveDate,
  creation_date: NaiveDate,
  balance: Decimal,
}

impl From<Sex> for accounts::Sex {
  fn from(sex: Sex) -> Self {
    match sex {
      Sex::Male => accounts::Sex::Male,
      Sex::Female => accounts::Sex::Female,
    }
  }
}

impl TryFrom<Account> for accounts::Account {
  type Error = InvalidAccountRecord;

  /// Conversion from a deserializable Account into one that can be queried by the domain logic.
  /// The email needs exactly one `@` with something on both sides, and the balance can not be negative.
  fn try_from(account: Account) -> Result<Self, Self::Error> {
    if !is_well_formed_email(&account.email) {
      Err(InvalidAccountRecord::MalformedEmail(
        account.id,
        account.email,
      ))
    } else if account.balance < Decimal::ZERO {
      Err(InvalidAccountRecord::NegativeBalance(account.id))
    } else {
      Ok(accounts::Account {
        id: account.id,
        first_name: account.first_name,
        last_name: account.last_name,
        email: account.email,
        sex: account.sex.into(),
        birthday: account.birthday,
        creation_date: account.creation_date,
        balance: account.balance,
      })
    }
  }
}

fn is_well_formed_email(email: &str) -> bool {
  match email.split_once('@') {
    Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
    None => false,
  }
}
