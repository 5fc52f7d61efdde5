//! Processors wire an [`AccountsReader`](crate::io::AccountsReader), the [`AccountQueryEngine`](crate::accounts::AccountQueryEngine)
//! and a [`MonthlyReportWriter`](crate::io::MonthlyReportWriter) together.

pub mod simple;
