//! 月次集計のユースケース

use common::error::Error;
use std::sync::Arc;

use crate::domain::{ExpenseReport, YearMonth};
use crate::ports::inbound::ReportExpenses;
use crate::ports::outbound::ExpenseLedger;

pub struct ReportUseCase {
    ledger: Arc<dyn ExpenseLedger>,
}

impl ReportUseCase {
    pub fn new(ledger: Arc<dyn ExpenseLedger>) -> Self {
        Self { ledger }
    }
}

impl ReportExpenses for ReportUseCase {
    fn monthly_report(&self, month: Option<YearMonth>) -> Result<ExpenseReport, Error> {
        let records = self.ledger.load_all()?;
        Ok(ExpenseReport::from_records(month, &records))
    }
}
