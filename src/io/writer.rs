use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncWrite;

use crate::accounts::MonthlySummary;

/// Destination of the per-month report built from the accounts
#[async_trait(?Send)]
pub trait MonthlyReportWriter {
  /// Write one row per summary, in the order they are yielded (January first when they come from the engine).
  /// An empty report writes nothing at all.
  async fn write_monthly_report<'a, T>(&'a mut self, report: T) -> Result<()>
  where
    T: Iterator<Item = MonthlySummary> + 'a;
}

/// Writes the monthly report as CSV with the columns `month,birthdays,created_balance`.
///
/// Months are written by their English name and balances with at most two decimals.
pub struct CsvMonthlyReportWriter<W>(W);

impl<W> CsvMonthlyReportWriter<W>
where
  W: AsyncWrite + Unpin + Send + Sync,
{
  pub fn new(writer: W) -> Self {
    Self(writer)
  }
}

#[async_trait(?Send)]
impl<W> MonthlyReportWriter for CsvMonthlyReportWriter<W>
where
  W: AsyncWrite + Unpin + Send + Sync,
{
  async fn write_monthly_report<'a, T>(&'a mut self, report: T) -> Result<()>
  where
    T: Iterator<Item = MonthlySummary> + 'a,
  {
    let mut serializer = csv_async::AsyncSerializer::from_writer(&mut self.0);
    let mut rows = 0usize;
    for summary in report.map(super::summary::MonthlySummary::from) {
      serializer.serialize(summary).await?;
      rows += 1;
    }
    serializer.flush().await?;
    log::debug!("Monthly report written with {} rows", rows);
    Ok(())
  }
}
