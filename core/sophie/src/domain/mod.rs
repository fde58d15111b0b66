//! sophie 固有のドメイン型（型と不変条件）

pub mod category;
pub mod clp;
pub mod command;
pub mod config;
pub mod date;
pub mod error;
pub mod intent;
pub mod keywords;
pub mod message;
pub mod record;
pub mod report;
pub mod summary;

pub use category::Category;
pub use command::SophieCommand;
pub use config::SophieConfig;
pub use date::ResolvedDate;
pub use error::{ExtractionUnavailable, ProcessError};
pub use intent::{Intent, IntentFlags};
pub use keywords::{KeywordSet, Keywords};
pub use message::RawMessage;
pub use record::{ExpenseKind, ExpenseRecord, StudyRecord};
pub use report::{ExpenseReport, YearMonth};
pub use summary::ActionSummaryLine;
