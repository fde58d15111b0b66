//! Outbound ポート: アプリが外界（LLM・保存先）を使うための trait
//!
//! 時刻・FS・環境変数・ログは common::ports::outbound を使う。

pub mod completion;
pub mod expense_sink;
pub mod study_sink;

pub use completion::Completion;
pub use expense_sink::{ExpenseLedger, ExpenseSink};
pub use study_sink::StudySink;
