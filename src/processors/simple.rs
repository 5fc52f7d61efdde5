use anyhow::Result;
use tokio_stream::StreamExt;

use crate::accounts::AccountQueryEngine;
use crate::io::{AccountsReader, MonthlyReportWriter};

/// This is a simple processor of accounts that
/// - reads accounts from an [`AccountsReader`]
/// - queries them using an [`AccountQueryEngine`]
/// - writes a monthly report using a [`MonthlyReportWriter`]
///
/// Records that can not be read as accounts are skipped with a warning,
/// so a single broken line doesn't prevent reporting on the rest.
pub async fn run<R, W>(mut accounts_reader: R, mut monthly_report_writer: W) -> Result<()>
where
  R: AccountsReader,
  W: MonthlyReportWriter,
{
  let mut accounts = Vec::new();
  let mut skipped = 0usize;

  let mut records = accounts_reader.read_accounts();
  while let Some(maybe_account) = records.next().await {
    match maybe_account {
      Ok(account) => accounts.push(account),
      Err(err) => {
        skipped += 1;
        log::warn!("Skipping account record: {:#}", err);
      }
    }
  }
  drop(records);

  let engine = AccountQueryEngine::new(&accounts);

  log::info!(
    "Loaded {} accounts ({} skipped), total balance {}, {} email domains",
    engine.len(),
    skipped,
    engine.total_balance(),
    engine.group_by_email_domain().len()
  );
  if let Some(richest) = engine.find_richest_person() {
    log::info!(
      "Richest account is {} {} <{}> with {}",
      richest.first_name,
      richest.last_name,
      richest.email,
      richest.balance
    );
  }

  monthly_report_writer
    .write_monthly_report(engine.monthly_summaries().into_iter())
    .await
}
