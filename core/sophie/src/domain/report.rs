//! 月次の gasto 集計

use crate::domain::category::Category;
use crate::domain::clp::format_clp;
use crate::domain::record::ExpenseRecord;
use chrono::Datelike;
use common::error::Error;
use std::collections::BTreeMap;
use std::fmt;

/// `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn parse(s: &str) -> Result<Self, Error> {
        let invalid = || Error::invalid_argument(format!("Invalid month '{}': expected YYYY-MM", s));
        let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { year, month })
    }

    pub fn contains(&self, record: &ExpenseRecord) -> bool {
        record
            .date
            .as_date()
            .map(|d| d.year() == self.year && d.month() == self.month)
            .unwrap_or(false)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseReport {
    /// None は全期間
    pub month: Option<YearMonth>,
    pub expense_clp: u64,
    pub count: usize,
    pub by_category: BTreeMap<Category, u64>,
}

impl ExpenseReport {
    /// month が指定されていれば、その月に日付があるものだけ集計する（日付未指定は除外）
    pub fn from_records(month: Option<YearMonth>, records: &[ExpenseRecord]) -> Self {
        let mut report = Self {
            month,
            ..Default::default()
        };
        for r in records
            .iter()
            .filter(|r| month.map(|m| m.contains(r)).unwrap_or(true))
        {
            report.expense_clp = report.expense_clp.saturating_add(r.amount_clp);
            report.count += 1;
            let slot = report.by_category.entry(r.category).or_insert(0);
            *slot = slot.saturating_add(r.amount_clp);
        }
        report
    }

    /// CLI 表示用
    pub fn render(&self) -> String {
        let period = self
            .month
            .map(|m| m.to_string())
            .unwrap_or_else(|| "todo".to_string());
        let mut out = format!(
            "[Lawrence] Resumen {}: ${} CLP en {} gasto(s)",
            period,
            format_clp(self.expense_clp),
            self.count
        );
        for (cat, amount) in &self.by_category {
            out.push_str(&format!("\n  {:<11} ${} CLP", cat.as_str(), format_clp(*amount)));
        }
        out
    }
}
