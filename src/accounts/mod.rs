//! This module contains the domain logic to query accounts
//!
//! The [`AccountQueryEngine`] borrows a collection of [`Account`] owned by the caller and answers read-only queries over it
//! (filters, groupings and aggregations). It never mutates nor caches anything.
//

mod account;
mod engine;

pub use account::{Account, AccountId, MonthlySummary, Sex};
pub use engine::{AccountQueryEngine, AccountQueryError, Result as QueryResult};

#[cfg(test)]
pub(crate) use account::tests::{account as test_account, date as test_date};
