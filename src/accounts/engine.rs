use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Month};
use rust_decimal::Decimal;
use thiserror::Error;

use super::account::{Account, AccountId, MonthlySummary};

pub type Result<T> = core::result::Result<T, AccountQueryError>;

/// Possible errors returned by the queries over accounts.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountQueryError {
  #[error("Cannot find Account by email={0}")]
  NotFound(String),

  #[error("Duplicated account id: {0}")]
  DuplicatedId(AccountId),

  #[error("Duplicated account email: {0}")]
  DuplicatedEmail(String),
}

/// Read-only queries over a collection of accounts owned by the caller.
///
/// Nothing is cached, every query walks the accounts again.
#[derive(Debug, Clone, Copy)]
pub struct AccountQueryEngine<'a> {
  accounts: &'a [Account],
}

impl<'a> AccountQueryEngine<'a> {
  pub fn new(accounts: &'a [Account]) -> Self {
    Self { accounts }
  }

  pub fn len(&self) -> usize {
    self.accounts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.accounts.is_empty()
  }

  /// The account with the highest balance, if any. When several accounts share it, any of them is returned.
  pub fn find_richest_person(&self) -> Option<&'a Account> {
    self.accounts.iter().max_by_key(|account| account.balance)
  }

  pub fn find_accounts_by_birthday_month(&self, month: Month) -> Vec<&'a Account> {
    self
      .accounts
      .iter()
      .filter(|account| account.birthday_month() == month)
      .collect()
  }

  /// Accounts split by sex, where the key `true` holds the male accounts.
  pub fn partition_by_sex(&self) -> HashMap<bool, Vec<&'a Account>> {
    group_by(self.accounts, Account::is_male)
  }

  pub fn group_by_email_domain(&self) -> HashMap<&'a str, Vec<&'a Account>> {
    group_by(self.accounts, Account::email_domain)
  }

  pub fn total_name_letter_count(&self) -> usize {
    self
      .accounts
      .iter()
      .map(|account| account.first_name.chars().count() + account.last_name.chars().count())
      .sum()
  }

  pub fn total_balance(&self) -> Decimal {
    self.accounts.iter().map(|account| account.balance).sum()
  }

  /// A new list sorted by first name, and by last name for equal first names.
  pub fn sort_by_first_then_last_name(&self) -> Vec<&'a Account> {
    let mut sorted = self.accounts.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| {
      a.first_name
        .cmp(&b.first_name)
        .then_with(|| a.last_name.cmp(&b.last_name))
    });
    sorted
  }

  pub fn has_email_domain(&self, domain: &str) -> bool {
    self
      .accounts
      .iter()
      .any(|account| account.email_domain() == domain)
  }

  pub fn balance_by_email(&self, email: &str) -> Result<Decimal> {
    self
      .accounts
      .iter()
      .find(|account| account.email == email)
      .map(|account| account.balance)
      .ok_or_else(|| {
        log::debug!("No account found for email {}", email);
        AccountQueryError::NotFound(email.to_string())
      })
  }

  /// Index the accounts by id. Ids are expected to be unique, and a duplicated one is reported as an error.
  pub fn index_by_id(&self) -> Result<HashMap<AccountId, &'a Account>> {
    let mut index = HashMap::with_capacity(self.accounts.len());
    for account in self.accounts {
      if index.insert(account.id, account).is_some() {
        return Err(AccountQueryError::DuplicatedId(account.id));
      }
    }
    Ok(index)
  }

  /// Balances by email of the accounts created in the given year.
  /// Two accounts of that year sharing the same email are reported as an error.
  pub fn balances_by_email_for_year(&self, year: i32) -> Result<HashMap<&'a str, Decimal>> {
    let mut balances = HashMap::new();
    for account in self
      .accounts
      .iter()
      .filter(|account| account.creation_date.year() == year)
    {
      if balances
        .insert(account.email.as_str(), account.balance)
        .is_some()
      {
        return Err(AccountQueryError::DuplicatedEmail(account.email.clone()));
      }
    }
    Ok(balances)
  }

  pub fn first_names_by_last_name(&self) -> HashMap<&'a str, HashSet<&'a str>> {
    let mut names: HashMap<&'a str, HashSet<&'a str>> = HashMap::new();
    for account in self.accounts {
      names
        .entry(account.last_name.as_str())
        .or_default()
        .insert(account.first_name.as_str());
    }
    names
  }

  /// First names joined by `", "` for every birthday month, keeping the order of the accounts.
  pub fn comma_joined_first_names_by_birthday_month(&self) -> HashMap<Month, String> {
    let mut names: HashMap<Month, String> = HashMap::new();
    for account in self.accounts {
      let joined = names.entry(account.birthday_month()).or_default();
      if !joined.is_empty() {
        joined.push_str(", ");
      }
      joined.push_str(&account.first_name);
    }
    names
  }

  pub fn total_balance_by_creation_month(&self) -> HashMap<Month, Decimal> {
    let mut balances: HashMap<Month, Decimal> = HashMap::new();
    for account in self.accounts {
      *balances
        .entry(account.creation_month())
        .or_insert(Decimal::ZERO) += account.balance;
    }
    balances
  }

  pub fn letter_frequency_in_first_names(&self) -> HashMap<char, usize> {
    count_chars(
      self
        .accounts
        .iter()
        .flat_map(|account| account.first_name.chars()),
    )
  }

  /// Same as [`Self::letter_frequency_in_first_names`] but over first and last names, both lower-cased.
  ///
  /// Every name is lower-cased as a whole, so context dependent mappings (like the Greek final sigma) apply.
  pub fn letter_frequency_ignore_case_in_full_names(&self) -> HashMap<char, usize> {
    count_chars(self.accounts.iter().flat_map(|account| {
      let mut full_name = account.first_name.to_lowercase();
      full_name.push_str(&account.last_name.to_lowercase());
      full_name.chars().collect::<Vec<char>>()
    }))
  }

  /// Birthdays and created balances for every month having any of them, from January to December.
  pub fn monthly_summaries(&self) -> Vec<MonthlySummary> {
    let mut birthdays = self.comma_joined_first_names_by_birthday_month();
    let mut balances = self.total_balance_by_creation_month();

    let mut months = birthdays
      .keys()
      .chain(balances.keys())
      .copied()
      .collect::<HashSet<Month>>()
      .into_iter()
      .collect::<Vec<_>>();
    months.sort_by_key(|month| month.number_from_month());

    months
      .into_iter()
      .map(|month| {
        MonthlySummary::new(
          month,
          birthdays.remove(&month).unwrap_or_default(),
          balances.remove(&month).unwrap_or(Decimal::ZERO),
        )
      })
      .collect()
  }
}

fn group_by<'a, K, F>(accounts: &'a [Account], key: F) -> HashMap<K, Vec<&'a Account>>
where
  K: Eq + std::hash::Hash,
  F: Fn(&'a Account) -> K,
{
  let mut groups: HashMap<K, Vec<&'a Account>> = HashMap::new();
  for account in accounts {
    groups.entry(key(account)).or_default().push(account);
  }
  groups
}

fn count_chars<I>(chars: I) -> HashMap<char, usize>
where
  I: Iterator<Item = char>,
{
  let mut frequencies = HashMap::new();
  for c in chars {
    *frequencies.entry(c).or_insert(0) += 1;
  }
  frequencies
}
