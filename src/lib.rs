//! Read-only queries over a collection of accounts (filters, groupings and aggregations),
//! together with the IO needed to load accounts from CSV and to report on them.

pub mod accounts;
pub mod io;
pub mod processors;
