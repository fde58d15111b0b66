//! sophie のアダプター（Outbound ポートの標準実装と、テスト用の実装）

pub(crate) mod config;
pub(crate) mod csv_expense_sink;
pub(crate) mod provider_completion;
pub(crate) mod study_plan_sink;

#[cfg(test)]
pub(crate) mod memory_sinks;
#[cfg(test)]
pub(crate) mod stub_completion;

pub(crate) use config::load_sophie_config;
pub(crate) use csv_expense_sink::CsvExpenseSink;
pub(crate) use provider_completion::ProviderCompletion;
pub(crate) use study_plan_sink::StudyPlanSink;
