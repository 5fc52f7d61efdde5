//! This module contains all the components needed to read and write data from files (specifically CSV)
//!
//! The [`reader`] module contains a reader of accounts from CSV and the [`writer`] module contains a monthly report writer into CSV.
//! It would be possible to add new file formats by implementing the traits [`AccountsReader`] and [`MonthlyReportWriter`] respectively.
//!
//! The [`account`] and [`summary`] modules contain structs needed to serialize/deserialize data.
//! They are intentionally duplicated from the domain model to decouple the IO details from the domain logic and allow their evolution independently.
//!
//! The [`file`] module reads a whole text file at once.
//!

mod account;
mod file;
mod reader;
mod summary;
mod writer;

pub use account::InvalidAccountRecord;
pub use file::{read_whole_file, FileReadError};
pub use reader::{AccountsReader, CsvAccountsReader};
pub use writer::{CsvMonthlyReportWriter, MonthlyReportWriter};
