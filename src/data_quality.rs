// Date Range Repair
//
// Statement periods are about a month long. When a run of transactions spans
// more than that, the stragglers are dates the export lost (blank cells that
// became the 1970 placeholder, misparsed day/month) and are pinned to a day in
// the statement's month. A heuristic: it trusts the middle and the last
// transaction of the run.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::ledger::Transaction;

// ============================================================================
// SETTINGS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRepairSettings {
    /// Longest plausible statement period
    pub max_period_days: i64,
    /// Day of month given to repaired dates
    pub repaired_day: u32,
}

impl Default for DateRepairSettings {
    fn default() -> Self {
        DateRepairSettings {
            max_period_days: 45,
            repaired_day: 20,
        }
    }
}

// ============================================================================
// REPAIR REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    /// Latest minus earliest date before repair
    pub period_days: i64,
    /// Date of the positional middle transaction, when repair ran
    pub reference: Option<NaiveDate>,
    pub repaired_date: Option<NaiveDate>,
    /// Transactions whose date was overwritten
    pub adjusted: usize,
}

impl RepairReport {
    fn untouched(period_days: i64) -> Self {
        RepairReport {
            period_days,
            reference: None,
            repaired_date: None,
            adjusted: 0,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.adjusted == 0
    }

    pub fn summary(&self) -> String {
        match self.repaired_date {
            Some(date) => format!(
                "period {} days, {} date(s) set to {}",
                self.period_days, self.adjusted, date
            ),
            None => format!("period {} days, no repair", self.period_days),
        }
    }
}

// ============================================================================
// REPAIR
// ============================================================================

/// Pins outliers to `repaired_day` of the reference month; the reference is
/// the lower middle transaction, position `(len - 1) / 2`.
pub fn repair_dates(transactions: &mut [Transaction], settings: &DateRepairSettings) -> RepairReport {
    let (Some(earliest), Some(latest)) = (
        transactions.iter().map(|t| t.date).min(),
        transactions.iter().map(|t| t.date).max(),
    ) else {
        return RepairReport::untouched(0);
    };

    let period_days = (latest - earliest).num_days();
    if transactions.len() < 2 || period_days <= settings.max_period_days {
        return RepairReport::untouched(period_days);
    }

    let reference = transactions[(transactions.len() - 1) / 2].date;
    let Some(repaired) = reference.with_day(settings.repaired_day) else {
        warn!(
            reference = %reference,
            day = settings.repaired_day,
            "repair day does not exist in reference month, dates left as-is"
        );
        return RepairReport::untouched(period_days);
    };

    let last = transactions[transactions.len() - 1].date;
    let mut adjusted = 0;
    for tx in transactions.iter_mut() {
        if (last - tx.date).num_days() > settings.max_period_days {
            debug!(payee = %tx.payee, from = %tx.date, to = %repaired, "date repaired");
            tx.date = repaired;
            adjusted += 1;
        }
    }

    let report = RepairReport {
        period_days,
        reference: Some(reference),
        repaired_date: Some(repaired),
        adjusted,
    };
    if !report.is_noop() {
        warn!("date range repair: {}", report.summary());
    }
    report
}
