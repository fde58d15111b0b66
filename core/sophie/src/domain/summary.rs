//! 記録 1 件につき 1 行の要約（表示専用、保存しない）

use crate::domain::clp::format_clp;
use crate::domain::record::{ExpenseRecord, StudyRecord};
use std::fmt;

pub const EXPENSE_LABEL: &str = "[Lawrence]";
pub const STUDY_LABEL: &str = "[Haru]";
pub const ASSISTANT_LABEL: &str = "[Sophie]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSummaryLine(String);

impl ActionSummaryLine {
    pub fn expense(record: &ExpenseRecord) -> Self {
        let concept = if record.concept.is_empty() {
            "(sin concepto)"
        } else {
            record.concept.as_str()
        };
        Self(format!(
            "{} Gasto registrado: {} | {} | ${} CLP | {} | {}",
            EXPENSE_LABEL,
            concept,
            record.category,
            format_clp(record.amount_clp),
            record.date,
            record.kind
        ))
    }

    pub fn study(record: &StudyRecord) -> Self {
        let objective = if record.objective.is_empty() {
            "(sin objetivo)"
        } else {
            record.objective.as_str()
        };
        let kanji = if record.kanji.is_empty() {
            "-".to_string()
        } else {
            record
                .kanji
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        Self(format!(
            "{} Plan de estudio: {} | kanjis: {} | {} min | {}",
            STUDY_LABEL, objective, kanji, record.duration_minutes, record.date
        ))
    }

    /// 意図が検出されなかったときの案内（記録はしない）
    pub fn no_action() -> Self {
        Self(format!("{} No se detectaron acciones", ASSISTANT_LABEL))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 改行区切りで結合する
    pub fn join(lines: &[ActionSummaryLine]) -> String {
        lines
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ActionSummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
