//! gastos.csv への追記と読み出し
//!
//! ヘッダは最初の書き込み時にだけ書く。書き込みは Mutex で 1 本に直列化する。

use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{Category, ExpenseKind, ExpenseRecord, ResolvedDate};
use crate::ports::outbound::{ExpenseLedger, ExpenseSink};

pub const EXPENSE_FILE_NAME: &str = "gastos.csv";
const HEADER: [&str; 5] = ["fecha", "concepto", "categoria", "monto_clp", "tipo"];

/// CSV の 1 行
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRow {
    fecha: String,
    concepto: String,
    categoria: String,
    monto_clp: u64,
    tipo: String,
}

impl From<&ExpenseRecord> for ExpenseRow {
    fn from(r: &ExpenseRecord) -> Self {
        Self {
            fecha: r.date.to_string(),
            concepto: r.concept.clone(),
            categoria: r.category.as_str().to_string(),
            monto_clp: r.amount_clp,
            tipo: r.kind.as_str().to_string(),
        }
    }
}

impl From<ExpenseRow> for ExpenseRecord {
    fn from(row: ExpenseRow) -> Self {
        Self {
            date: ResolvedDate::parse(&row.fecha).unwrap_or(ResolvedDate::Unspecified),
            concept: row.concepto,
            category: Category::parse(&row.categoria).unwrap_or_default(),
            amount_clp: row.monto_clp,
            kind: ExpenseKind::Futuro,
        }
    }
}

pub struct CsvExpenseSink {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvExpenseSink {
    /// data_dir 直下の gastos.csv を使う
    pub fn new(fs: Arc<dyn FileSystem>, data_dir: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: data_dir.as_ref().join(EXPENSE_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> bool {
        self.fs
            .metadata(&self.path)
            .map(|m| m.is_empty())
            .unwrap_or(true)
    }
}

fn csv_err(e: csv::Error) -> Error {
    Error::io_msg(format!("csv: {}", e))
}

impl ExpenseSink for CsvExpenseSink {
    fn append(&self, record: &ExpenseRecord) -> Result<(), Error> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| Error::io_msg("expense writer lock poisoned"))?;
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let write_header = self.needs_header();
        let file = self.fs.open_append(&self.path)?;
        let mut w = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if write_header {
            w.write_record(HEADER).map_err(csv_err)?;
        }
        w.serialize(ExpenseRow::from(record)).map_err(csv_err)?;
        w.flush().map_err(|e| Error::io_msg(e.to_string()))?;
        Ok(())
    }
}

impl ExpenseLedger for CsvExpenseSink {
    fn load_all(&self) -> Result<Vec<ExpenseRecord>, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Vec::new());
        }
        let contents = self.fs.read_to_string(&self.path)?;
        let mut rdr = csv::Reader::from_reader(contents.as_bytes());
        let mut out = Vec::new();
        for row in rdr.deserialize::<ExpenseRow>() {
            let row = row.map_err(|e| {
                Error::io_msg(format!("{}: {}", self.path.display(), e))
            })?;
            out.push(row.into());
        }
        Ok(out)
    }
}
