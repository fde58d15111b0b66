//! ActionAssembler のシナリオテスト（StubCompletion とメモリの保存先を使用）

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};
use common::adapter::{FixedClock, NoopLog};
use common::error::Error;

use crate::adapter::memory_sinks::{MemoryExpenseSink, MemoryStudySink};
use crate::adapter::stub_completion::StubCompletion;
use crate::domain::{
    Category, ExtractionUnavailable, Intent, Keywords, ProcessError, RawMessage, ResolvedDate,
};
use crate::ports::inbound::ProcessMessage;
use crate::usecase::extraction::DEFAULT_TEMPERATURE;
use crate::usecase::{ActionAssembler, DateResolver, ExtractionRequester, IntentClassifier};

const COMBO_MESSAGE: &str =
    "Mañana quiero comerme un combo cuarto de libra ($4.500) y después repasar kanjis.";
const EXPENSE_RESPONSE: &str =
    "FECHA=2026-10-16\nCONCEPTO=combo cuarto de libra\nCATEGORIA=comida\nMONTO_CLP=4500\nTIPO=futuro";
const STUDY_RESPONSE: &str =
    "FECHA=2026-10-16\nOBJETIVO=Repasar kanjis\nKANJIS=日,本,語\nDURACION_MIN=25";

struct Fixture {
    assembler: ActionAssembler,
    completion: Arc<StubCompletion>,
    expenses: Arc<MemoryExpenseSink>,
    studies: Arc<MemoryStudySink>,
}

fn fixture_with_sink(
    responses: Vec<Result<String, ExtractionUnavailable>>,
    expenses: MemoryExpenseSink,
) -> Fixture {
    // 15:00 UTC = 12:00 America/Santiago
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2026, 10, 15, 15, 0, 0).unwrap(),
    ));
    let completion = Arc::new(StubCompletion::new(responses));
    let expenses = Arc::new(expenses);
    let studies = Arc::new(MemoryStudySink::default());
    let assembler = ActionAssembler::new(
        DateResolver::new(clock, chrono_tz::America::Santiago),
        IntentClassifier::new(Keywords::default()),
        ExtractionRequester::new(completion.clone(), Arc::new(NoopLog), DEFAULT_TEMPERATURE),
        expenses.clone(),
        studies.clone(),
        Arc::new(NoopLog),
    );
    Fixture {
        assembler,
        completion,
        expenses,
        studies,
    }
}

fn fixture(responses: Vec<Result<String, ExtractionUnavailable>>) -> Fixture {
    fixture_with_sink(responses, MemoryExpenseSink::default())
}

fn ok(s: &str) -> Result<String, ExtractionUnavailable> {
    Ok(s.to_string())
}

fn day(d: u32) -> ResolvedDate {
    ResolvedDate::On(NaiveDate::from_ymd_opt(2026, 10, d).unwrap())
}

#[test]
fn test_combo_and_kanji_message_produces_two_lines_in_order() {
    let f = fixture(vec![ok(EXPENSE_RESPONSE), ok(STUDY_RESPONSE)]);
    let summary = f.assembler.process(&RawMessage::new(COMBO_MESSAGE)).unwrap();

    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "[Lawrence] Gasto registrado: combo cuarto de libra | comida | $4.500 CLP | 2026-10-16 | futuro"
    );
    assert_eq!(
        lines[1],
        "[Haru] Plan de estudio: Repasar kanjis | kanjis: 日, 本, 語 | 25 min | 2026-10-16"
    );

    let calls = f.completion.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].system_prompt.contains("MONTO_CLP"));
    assert!(calls[0].user_prompt.contains("Fecha resuelta: 2026-10-16"));
    assert!(calls[0].user_prompt.contains("Monto detectado (CLP): 4500"));
    assert!(calls[1].system_prompt.contains("KANJIS"));
    assert!(!calls[1].user_prompt.contains("Monto detectado"));
    assert!(calls.iter().all(|c| (c.temperature - 0.2).abs() < 1e-6));

    let expenses = f.expenses.records();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].amount_clp, 4500);
    assert_eq!(expenses[0].category, Category::Comida);
    assert_eq!(expenses[0].date, day(16));
    let studies = f.studies.records();
    assert_eq!(studies.len(), 1);
    assert_eq!(studies[0].kanji, vec!['日', '本', '語']);
}

#[test]
fn test_amount_falls_back_to_message_hint() {
    let f = fixture(vec![
        ok("FECHA=2026-10-16\nCONCEPTO=combo\nCATEGORIA=comida\nTIPO=futuro"),
        ok(STUDY_RESPONSE),
    ]);
    let summary = f.assembler.process(&RawMessage::new(COMBO_MESSAGE)).unwrap();
    assert!(summary.contains("$4.500 CLP"));
    assert_eq!(f.expenses.records()[0].amount_clp, 4500);
}

#[test]
fn test_supermarket_today_is_single_expense_line() {
    let f = fixture(vec![ok(
        "FECHA=no especificada\nCONCEPTO=supermercado\nCATEGORIA=Hogar\nMONTO_CLP=\nTIPO=futuro",
    )]);
    let summary = f
        .assembler
        .process(&RawMessage::new("hoy fui al supermercado"))
        .unwrap();

    assert_eq!(summary.lines().count(), 1);
    assert!(summary.starts_with("[Lawrence] "));
    assert_eq!(f.completion.calls().len(), 1);
    let expenses = f.expenses.records();
    assert_eq!(expenses[0].date, day(15));
    assert_eq!(expenses[0].category, Category::Hogar);
    assert_eq!(expenses[0].amount_clp, 0);
    assert!(f.studies.records().is_empty());
}

#[test]
fn test_greeting_has_no_action_and_no_calls() {
    let f = fixture(vec![]);
    let summary = f
        .assembler
        .process(&RawMessage::new("hola, ¿cómo estás?"))
        .unwrap();
    assert_eq!(summary, "[Sophie] No se detectaron acciones");
    assert!(f.completion.calls().is_empty());
    assert!(f.expenses.records().is_empty());
    assert!(f.studies.records().is_empty());
}

#[test]
fn test_malformed_output_degrades_to_defaults() {
    let f = fixture(vec![ok("Lo siento, no puedo ayudar con eso.")]);
    let summary = f
        .assembler
        .process(&RawMessage::new("pasado mañana estudiar kanji"))
        .unwrap();
    assert_eq!(
        summary,
        "[Haru] Plan de estudio: (sin objetivo) | kanjis: - | 25 min | 2026-10-17"
    );
}

#[test]
fn test_study_failure_after_expense_reports_completed_line() {
    let f = fixture(vec![
        ok(EXPENSE_RESPONSE),
        Err(ExtractionUnavailable::new("rate limited")),
    ]);
    let err = f
        .assembler
        .process(&RawMessage::new(COMBO_MESSAGE))
        .unwrap_err();

    assert_eq!(err.intent(), Intent::Study);
    assert!(matches!(err, ProcessError::ExtractionUnavailable { .. }));
    assert_eq!(err.completed().len(), 1);
    assert!(err.completed()[0].as_str().starts_with("[Lawrence] "));
    assert!(err.to_string().contains("rate limited"));
    // gasto は保存済み、estudio は保存しない
    assert_eq!(f.expenses.records().len(), 1);
    assert!(f.studies.records().is_empty());
    assert_eq!(f.completion.calls().len(), 2);
}

#[test]
fn test_first_extraction_failure_persists_nothing() {
    let f = fixture(vec![Err(ExtractionUnavailable::new("connection refused"))]);
    let err = f
        .assembler
        .process(&RawMessage::new(COMBO_MESSAGE))
        .unwrap_err();
    assert_eq!(err.intent(), Intent::Expense);
    assert!(err.completed().is_empty());
    assert!(f.expenses.records().is_empty());
    assert!(f.studies.records().is_empty());
    // estudio には進まない
    assert_eq!(f.completion.calls().len(), 1);
}

#[test]
fn test_persistence_failure_stops_processing() {
    let f = fixture_with_sink(
        vec![ok(EXPENSE_RESPONSE), ok(STUDY_RESPONSE)],
        MemoryExpenseSink::failing(Error::io_msg("disk full")),
    );
    let err = f
        .assembler
        .process(&RawMessage::new(COMBO_MESSAGE))
        .unwrap_err();
    match &err {
        ProcessError::Persistence { intent, reason, completed } => {
            assert_eq!(*intent, Intent::Expense);
            assert!(reason.contains("disk full"));
            assert!(completed.is_empty());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(f.completion.calls().len(), 1);
    assert!(f.studies.records().is_empty());
}
