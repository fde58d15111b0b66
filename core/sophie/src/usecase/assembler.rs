//! メッセージ 1 件の処理（日付解決 → 意図判定 → 意図ごとに抽出・保存 → 要約）

use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

use crate::domain::{
    ActionSummaryLine, Intent, ProcessError, RawMessage, ResolvedDate,
};
use crate::ports::inbound::ProcessMessage;
use crate::ports::outbound::{ExpenseSink, StudySink};
use crate::usecase::{DateResolver, ExtractionRequester, IntentClassifier};

pub struct ActionAssembler {
    date_resolver: DateResolver,
    classifier: IntentClassifier,
    requester: ExtractionRequester,
    expense_sink: Arc<dyn ExpenseSink>,
    study_sink: Arc<dyn StudySink>,
    log: Arc<dyn Log>,
}

impl ActionAssembler {
    pub fn new(
        date_resolver: DateResolver,
        classifier: IntentClassifier,
        requester: ExtractionRequester,
        expense_sink: Arc<dyn ExpenseSink>,
        study_sink: Arc<dyn StudySink>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            date_resolver,
            classifier,
            requester,
            expense_sink,
            study_sink,
            log,
        }
    }

    /// 抽出 → 保存 → 要約行。保存は抽出が成功したときだけ行う。
    fn run_intent(
        &self,
        intent: Intent,
        message: &RawMessage,
        date: ResolvedDate,
        completed: &[ActionSummaryLine],
    ) -> Result<ActionSummaryLine, ProcessError> {
        let unavailable = |source| ProcessError::ExtractionUnavailable {
            intent,
            source,
            completed: completed.to_vec(),
        };
        let persistence = |e: common::error::Error| ProcessError::Persistence {
            intent,
            reason: e.to_string(),
            completed: completed.to_vec(),
        };
        let line = match intent {
            Intent::Expense => {
                let record = self
                    .requester
                    .extract_expense(message, date)
                    .map_err(unavailable)?;
                self.expense_sink.append(&record).map_err(persistence)?;
                ActionSummaryLine::expense(&record)
            }
            Intent::Study => {
                let record = self
                    .requester
                    .extract_study(message, date)
                    .map_err(unavailable)?;
                self.study_sink.save(&record).map_err(persistence)?;
                ActionSummaryLine::study(&record)
            }
        };
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "record persisted")
                .layer("usecase")
                .kind("persistence")
                .field("intent", intent.as_str())
                .field("date", date.to_string()),
        );
        Ok(line)
    }
}

impl ProcessMessage for ActionAssembler {
    fn process(&self, message: &RawMessage) -> Result<String, ProcessError> {
        let date = self.date_resolver.resolve(message);
        let flags = self.classifier.classify(message);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "intent classified")
                .layer("usecase")
                .kind("intent")
                .field("is_expense", flags.is_expense)
                .field("is_study", flags.is_study)
                .field("date", date.to_string()),
        );

        if flags.is_empty() {
            return Ok(ActionSummaryLine::no_action().to_string());
        }

        let mut lines: Vec<ActionSummaryLine> = Vec::with_capacity(2);
        for intent in flags.intents() {
            match self.run_intent(intent, message, date, &lines) {
                Ok(line) => lines.push(line),
                Err(e) => {
                    let _ = self.log.log(
                        &LogRecord::new(LogLevel::Error, e.to_string())
                            .layer("usecase")
                            .kind("error")
                            .field("intent", intent.as_str())
                            .field("completed", e.completed().len()),
                    );
                    return Err(e);
                }
            }
        }
        Ok(ActionSummaryLine::join(&lines))
    }
}
