//! テスト用: メモリに保持する保存先

use common::error::Error;
use std::sync::Mutex;

use crate::domain::{ExpenseRecord, StudyRecord};
use crate::ports::outbound::{ExpenseLedger, ExpenseSink, StudySink};

#[derive(Default)]
pub struct MemoryExpenseSink {
    records: Mutex<Vec<ExpenseRecord>>,
    /// Some のとき append は常にこのエラーを返す
    fail_with: Option<Error>,
}

impl MemoryExpenseSink {
    pub fn failing(err: Error) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_with: None,
        }
    }

    pub fn records(&self) -> Vec<ExpenseRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl ExpenseSink for MemoryExpenseSink {
    fn append(&self, record: &ExpenseRecord) -> Result<(), Error> {
        if let Some(e) = &self.fail_with {
            return Err(e.clone());
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

impl ExpenseLedger for MemoryExpenseSink {
    fn load_all(&self) -> Result<Vec<ExpenseRecord>, Error> {
        Ok(self.records())
    }
}

#[derive(Default)]
pub struct MemoryStudySink {
    records: Mutex<Vec<StudyRecord>>,
}

impl MemoryStudySink {
    pub fn records(&self) -> Vec<StudyRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl StudySink for MemoryStudySink {
    fn save(&self, record: &StudyRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
