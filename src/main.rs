use std::io::Cursor;

use anyhow::Result;
use tokio::io::AsyncRead;

use account_queries::io::{read_whole_file, CsvAccountsReader, CsvMonthlyReportWriter};
use account_queries::processors;

#[tokio::main]
async fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let reader = get_accounts_async_read().await?;
  let accounts_reader = CsvAccountsReader::new(reader);
  let monthly_report_writer = CsvMonthlyReportWriter::new(tokio::io::stdout());

  processors::simple::run(accounts_reader, monthly_report_writer).await
}

type AccountsAsyncRead = Box<dyn AsyncRead + Unpin + Send + Sync>;

/// This allows to use either a file if the path is specified in the command line,
/// or the stdin otherwise, which might be more convenient for pipe the data.
async fn get_accounts_async_read() -> Result<AccountsAsyncRead> {
  match std::env::args().nth(1) {
    Some(path) => {
      let content = read_whole_file(&path).await?;
      log::debug!("Read {} bytes from {}", content.len(), path);
      Ok(Box::new(Cursor::new(content.into_bytes())) as AccountsAsyncRead)
    }
    None => Ok(Box::new(tokio::io::stdin()) as AccountsAsyncRead),
  }
}
