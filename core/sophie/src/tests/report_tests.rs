//! ReportUseCase のテスト（CSV に追記した行を集計する）

use std::sync::Arc;

use chrono::NaiveDate;
use common::adapter::StdFileSystem;

use crate::adapter::memory_sinks::MemoryExpenseSink;
use crate::adapter::CsvExpenseSink;
use crate::domain::{Category, ExpenseKind, ExpenseRecord, ResolvedDate, YearMonth};
use crate::ports::inbound::ReportExpenses;
use crate::ports::outbound::ExpenseSink;
use crate::usecase::ReportUseCase;

fn record(date: Option<(i32, u32, u32)>, category: Category, amount_clp: u64) -> ExpenseRecord {
    ExpenseRecord {
        date: date
            .map(|(y, m, d)| ResolvedDate::On(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
            .unwrap_or(ResolvedDate::Unspecified),
        concept: "x".to_string(),
        category,
        amount_clp,
        kind: ExpenseKind::Futuro,
    }
}

#[test]
fn test_monthly_report_over_csv() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(CsvExpenseSink::new(Arc::new(StdFileSystem), dir.path()));
    for r in [
        record(Some((2026, 10, 15)), Category::Comida, 4500),
        record(Some((2026, 10, 16)), Category::Transporte, 3000),
        record(Some((2026, 10, 31)), Category::Comida, 1500),
        record(Some((2026, 11, 1)), Category::Ocio, 8000),
        record(None, Category::Hogar, 20000),
    ] {
        store.append(&r).unwrap();
    }

    let usecase = ReportUseCase::new(store);
    let october = usecase
        .monthly_report(Some(YearMonth { year: 2026, month: 10 }))
        .unwrap();
    assert_eq!(october.count, 3);
    assert_eq!(october.expense_clp, 9000);
    assert_eq!(
        october.by_category.into_iter().collect::<Vec<_>>(),
        vec![(Category::Comida, 6000), (Category::Transporte, 3000)]
    );

    let all = usecase.monthly_report(None).unwrap();
    assert_eq!(all.count, 5);
    assert_eq!(all.expense_clp, 37000);
}

#[test]
fn test_empty_ledger() {
    let usecase = ReportUseCase::new(Arc::new(MemoryExpenseSink::default()));
    let report = usecase.monthly_report(None).unwrap();
    assert_eq!(report.count, 0);
    assert_eq!(report.expense_clp, 0);
    assert!(report.by_category.is_empty());
}
