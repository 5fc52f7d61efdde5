use std::convert::TryFrom;

use anyhow::Result;
use tokio::io::AsyncRead;
use tokio_stream::{Stream, StreamExt};

use crate::accounts::Account;

/// Interface to read accounts from an external source
pub trait AccountsReader {
  /// Read accounts and return an [`Stream`] of possibly valid accounts.
  /// Each item yielded by the stream is either `Ok` if the account was read successfully,
  /// or `Err` if there was any kind of problem (like wrong format or a malformed email).
  fn read_accounts<'a>(&'a mut self) -> Box<dyn Stream<Item = Result<Account>> + Unpin + 'a>;
}

/// Implementation of [`AccountsReader`] for the CSV format.
///
/// The columns are `id,first_name,last_name,email,sex,birthday,creation_date,balance`.
pub struct CsvAccountsReader<R>(R);

impl<R> CsvAccountsReader<R>
where
  R: AsyncRead + Unpin + Send + Sync,
{
  pub fn new(reader: R) -> Self {
    Self(reader)
  }
}

impl<R> AccountsReader for CsvAccountsReader<R>
where
  R: AsyncRead + Unpin + Send + Sync,
{
  fn read_accounts<'a>(&'a mut self) -> Box<dyn Stream<Item = Result<Account>> + Unpin + 'a> {
    Box::new(
      csv_async::AsyncReaderBuilder::new()
        .flexible(true)
        .create_reader(&mut self.0)
        .into_records()
        .map(|maybe_record| {
          maybe_record
            .and_then(|mut record| {
              record.trim();
              record.deserialize::<super::account::Account>(None)
            })
            .map_err(anyhow::Error::from)
            .and_then(|account| Account::try_from(account).map_err(anyhow::Error::from))
        }),
    )
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::accounts::{test_date, Sex};
  use indoc::indoc;
  use rust_decimal_macros::dec;

  #[tokio::test]
  async fn read_accounts_with_format_errors() {
    let input = indoc! { "
      id, first_name, last_name,           email,    sex,   birthday, creation_date, balance
      1
      2,       Polly,     Adams,   polly@ukr.net, female, 1992-03-02,    2020-07-21
      3,       Clark,      Kent, clark@gmail.com,  robot, 1979-11-30,    2020-01-09,   75.25
      4,         Ada,     Clark,   ada@yahoo.com, female, 2001-02-30,    2020-02-17,     310
      5,       Dylan,     Clark,  dylan.gmail.com,  male, 1988-03-14,    2019-07-02,  1200.5
      6,       Dylan,     Clark, dylan@gmail.com,   male, 1988-03-14,    2019-07-02,     -10
      x,       Dylan,     Clark, dylan@gmail.com,   male, 1988-03-14,    2019-07-02,      10
    " }
    .as_bytes();

    let mut reader = CsvAccountsReader::new(input);

    let accounts = reader
      .read_accounts()
      .map(|account| account.map(|_| "ok").unwrap_or_else(|_| "err"))
      .collect::<Vec<&str>>()
      .await;

    assert_eq!(accounts.iter().filter(|v| **v == "err").count(), 7);
    assert_eq!(accounts.iter().filter(|v| **v == "ok").count(), 0);
  }

  #[tokio::test]
  async fn read_accounts_success() {
    let input = indoc! { "
      id, first_name, last_name,           email,    sex,   birthday, creation_date, balance
      1,       Dylan,     Clark, dylan@gmail.com,   male, 1988-03-14,    2019-07-02,  1200.5
       2,      Polly,     Adams,   polly@ukr.net, female, 1992-03-02,    2020-07-21,    8000
    " }
    .as_bytes();

    let mut reader = CsvAccountsReader::new(input);

    let accounts = reader
      .read_accounts()
      .map(|account| account.map_err(|err| err.to_string()))
      .collect::<Vec<Result<Account, String>>>()
      .await;

    assert_eq!(
      accounts,
      vec![
        Ok(Account {
          id: 1,
          first_name: "Dylan".to_string(),
          last_name: "Clark".to_string(),
          email: "dylan@gmail.com".to_string(),
          sex: Sex::Male,
          birthday: test_date(1988, 3, 14),
          creation_date: test_date(2019, 7, 2),
          balance: dec!(1200.5),
        }),
        Ok(Account {
          id: 2,
          first_name: "Polly".to_string(),
          last_name: "Adams".to_string(),
          email: "polly@ukr.net".to_string(),
          sex: Sex::Female,
          birthday: test_date(1992, 3, 2),
          creation_date: test_date(2020, 7, 21),
          balance: dec!(8000),
        }),
      ]
    )
  }

  #[tokio::test]
  async fn read_accounts_reports_invalid_email() {
    let input = indoc! { "
      id,first_name,last_name,email,sex,birthday,creation_date,balance
      5,Dylan,Clark,dylan.gmail.com,male,1988-03-14,2019-07-02,1200.5
    " }
    .as_bytes();

    let mut reader = CsvAccountsReader::new(input);

    let accounts = reader
      .read_accounts()
      .map(|account| account.map_err(|err| err.to_string()))
      .collect::<Vec<Result<Account, String>>>()
      .await;

    assert_eq!(
      accounts,
      vec![Err(
        "Malformed email for account 5: dylan.gmail.com".to_string()
      )]
    );
  }
}
