//! LLM による構造化抽出（KEY=VALUE 形式）
//!
//! 意図ごとに固定の system プロンプトで 1 回だけ完了呼び出しを行い、応答を既定値の上に
//! マージしてから正規化する。応答の形式崩れは既定値への置き換えで吸収し（warn ログのみ）、
//! 呼び出し自体の失敗だけを ExtractionUnavailable として返す。

use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::domain::record::{collect_kanji, DEFAULT_DURATION_MIN};
use crate::domain::{
    Category, ExpenseKind, ExpenseRecord, ExtractionUnavailable, Intent, RawMessage,
    ResolvedDate, StudyRecord,
};
use crate::ports::outbound::Completion;
use crate::usecase::amount::extract_amount;

/// 構造化抽出向けの低い温度
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

pub const KEY_FECHA: &str = "FECHA";
pub const KEY_CONCEPTO: &str = "CONCEPTO";
pub const KEY_CATEGORIA: &str = "CATEGORIA";
pub const KEY_MONTO_CLP: &str = "MONTO_CLP";
pub const KEY_TIPO: &str = "TIPO";
pub const KEY_OBJETIVO: &str = "OBJETIVO";
pub const KEY_KANJIS: &str = "KANJIS";
pub const KEY_DURACION_MIN: &str = "DURACION_MIN";

/// 既知のキーと既定値
const DEFAULTS: &[(&str, &str)] = &[
    (KEY_FECHA, "no especificada"),
    (KEY_CONCEPTO, ""),
    (KEY_OBJETIVO, ""),
    (KEY_CATEGORIA, "otros"),
    (KEY_MONTO_CLP, "0"),
    (KEY_TIPO, "futuro"),
    (KEY_KANJIS, ""),
    (KEY_DURACION_MIN, "25"),
];

pub fn expense_system_prompt() -> String {
    format!(
        "Eres Lawrence, el asistente de finanzas personales de Sophie.\n\
         Extrae UN gasto del mensaje del usuario.\n\
         Responde EXACTAMENTE 5 lineas con formato CLAVE=VALOR, sin texto adicional ni comillas:\n\
         {KEY_FECHA}=<YYYY-MM-DD o no especificada>\n\
         {KEY_CONCEPTO}=<descripcion breve del gasto>\n\
         {KEY_CATEGORIA}=<{}>\n\
         {KEY_MONTO_CLP}=<entero en pesos chilenos, sin decimales ni separadores>\n\
         {KEY_TIPO}=futuro",
        Category::choices_for_prompt()
    )
}

pub fn study_system_prompt() -> String {
    format!(
        "Eres Haru, el tutor de japones de Sophie.\n\
         Arma UN plan de estudio a partir del mensaje del usuario.\n\
         Responde EXACTAMENTE 4 lineas con formato CLAVE=VALOR, sin texto adicional ni comillas:\n\
         {KEY_FECHA}=<YYYY-MM-DD o no especificada>\n\
         {KEY_OBJETIVO}=<objetivo breve de la sesion>\n\
         {KEY_KANJIS}=<de 3 a 5 kanjis separados por coma>\n\
         {KEY_DURACION_MIN}=<minutos enteros>"
    )
}

pub fn expense_user_prompt(message: &RawMessage, date: ResolvedDate, amount_hint: u64) -> String {
    format!(
        "Mensaje: {}\nFecha resuelta: {}\nMonto detectado (CLP): {}",
        &**message, date, amount_hint
    )
}

pub fn study_user_prompt(message: &RawMessage, date: ResolvedDate) -> String {
    format!("Mensaje: {}\nFecha resuelta: {}", &**message, date)
}

/// 既定値の上に応答の KEY=VALUE をマージした結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    values: BTreeMap<&'static str, String>,
    /// 応答に現れた既知キー
    supplied: BTreeSet<&'static str>,
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self {
            values: DEFAULTS
                .iter()
                .map(|(k, v)| (*k, v.to_string()))
                .collect(),
            supplied: BTreeSet::new(),
        }
    }
}

impl ExtractedFields {
    /// 行ごとに最初の `=` で分割し、既知キーだけを上書きする（後勝ち）
    ///
    /// `=` を含まない行・未知のキーは無視する。キーは前後の空白と箇条書き記号を除いて大文字化する。
    pub fn parse(response: &str) -> Self {
        let mut fields = Self::default();
        for line in response.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key
                .trim()
                .trim_start_matches(|c: char| c == '-' || c == '*' || c.is_whitespace())
                .to_uppercase();
            if let Some(&(known, _)) = DEFAULTS.iter().find(|(k, _)| *k == key) {
                fields.values.insert(known, value.trim().to_string());
                fields.supplied.insert(known);
            }
        }
        fields
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn is_supplied(&self, key: &str) -> bool {
        self.supplied.contains(key)
    }
}

/// 正規化で値を置き換えた記録（warn ログ用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub field: &'static str,
    pub raw: String,
    pub used: String,
}

impl Substitution {
    fn new(field: &'static str, raw: &str, used: impl ToString) -> Self {
        Self {
            field,
            raw: raw.to_string(),
            used: used.to_string(),
        }
    }
}

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `30` / `30 min` のような正の整数だけを受け付ける
fn parse_minutes(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let number = trimmed
        .strip_suffix("min")
        .or_else(|| trimmed.strip_suffix("MIN"))
        .unwrap_or(trimmed)
        .trim_end();
    number.parse::<u32>().ok().filter(|n| *n > 0)
}

/// ISO 日付ならそれを、それ以外は解決済みの日付を使う
fn normalize_date(
    fields: &ExtractedFields,
    resolved: ResolvedDate,
    subs: &mut Vec<Substitution>,
) -> ResolvedDate {
    let raw = fields.get(KEY_FECHA);
    match ResolvedDate::parse(raw) {
        Some(d @ ResolvedDate::On(_)) => d,
        _ => {
            if raw != resolved.to_string() {
                subs.push(Substitution::new(KEY_FECHA, raw, resolved));
            }
            resolved
        }
    }
}

/// gasto の正規化。MONTO_CLP が無い（または数字を含まない）場合だけ本文から推定した金額を使う。
pub fn normalize_expense(
    fields: &ExtractedFields,
    resolved: ResolvedDate,
    amount_hint: u64,
) -> (ExpenseRecord, Vec<Substitution>) {
    let mut subs = Vec::new();
    let date = normalize_date(fields, resolved, &mut subs);

    let raw_category = fields.get(KEY_CATEGORIA);
    let category = Category::parse(raw_category).unwrap_or_else(|| {
        subs.push(Substitution::new(KEY_CATEGORIA, raw_category, Category::Otros));
        Category::Otros
    });

    let raw_amount = fields.get(KEY_MONTO_CLP);
    let digits = digits_only(raw_amount);
    let amount_clp = if !fields.is_supplied(KEY_MONTO_CLP) || digits.is_empty() {
        if fields.is_supplied(KEY_MONTO_CLP) || amount_hint > 0 {
            subs.push(Substitution::new(KEY_MONTO_CLP, raw_amount, amount_hint));
        }
        amount_hint
    } else {
        let parsed = digits.parse::<u64>().unwrap_or(0);
        if digits != raw_amount.trim() {
            subs.push(Substitution::new(KEY_MONTO_CLP, raw_amount, parsed));
        }
        parsed
    };

    let raw_kind = fields.get(KEY_TIPO);
    if !raw_kind.eq_ignore_ascii_case(ExpenseKind::Futuro.as_str()) {
        subs.push(Substitution::new(KEY_TIPO, raw_kind, ExpenseKind::Futuro));
    }

    let record = ExpenseRecord {
        date,
        concept: fields.get(KEY_CONCEPTO).to_string(),
        category,
        amount_clp,
        kind: ExpenseKind::Futuro,
    };
    (record, subs)
}

/// estudio の正規化。KANJIS に漢字がなければ本文中の漢字を使う。
pub fn normalize_study(
    fields: &ExtractedFields,
    resolved: ResolvedDate,
    message: &RawMessage,
) -> (StudyRecord, Vec<Substitution>) {
    let mut subs = Vec::new();
    let date = normalize_date(fields, resolved, &mut subs);

    let raw_kanji = fields.get(KEY_KANJIS);
    let items: Vec<&str> = raw_kanji
        .split([',', '、', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let mut kanji = collect_kanji(items.iter().copied());
    if kanji.is_empty() {
        kanji = collect_kanji([&**message]);
        if !raw_kanji.is_empty() || !kanji.is_empty() {
            subs.push(Substitution::new(KEY_KANJIS, raw_kanji, kanji_text(&kanji)));
        }
    } else if kanji.len() != items.len() {
        subs.push(Substitution::new(KEY_KANJIS, raw_kanji, kanji_text(&kanji)));
    }

    let raw_duration = fields.get(KEY_DURACION_MIN);
    let duration_minutes = match parse_minutes(raw_duration) {
        Some(n) => {
            if n.to_string() != raw_duration.trim() {
                subs.push(Substitution::new(KEY_DURACION_MIN, raw_duration, n));
            }
            n
        }
        _ => {
            subs.push(Substitution::new(
                KEY_DURACION_MIN,
                raw_duration,
                DEFAULT_DURATION_MIN,
            ));
            DEFAULT_DURATION_MIN
        }
    };

    let record = StudyRecord {
        date,
        objective: fields.get(KEY_OBJETIVO).to_string(),
        kanji,
        duration_minutes,
    };
    (record, subs)
}

fn kanji_text(kanji: &[char]) -> String {
    kanji
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// 意図ごとに 1 回だけ完了呼び出しを行い、レコードを組み立てる
pub struct ExtractionRequester {
    completion: Arc<dyn Completion>,
    log: Arc<dyn Log>,
    temperature: f32,
}

impl ExtractionRequester {
    pub fn new(completion: Arc<dyn Completion>, log: Arc<dyn Log>, temperature: f32) -> Self {
        Self {
            completion,
            log,
            temperature,
        }
    }

    pub fn extract_expense(
        &self,
        message: &RawMessage,
        date: ResolvedDate,
    ) -> Result<ExpenseRecord, ExtractionUnavailable> {
        let hint = extract_amount(message);
        let response = self.completion.complete(
            &expense_system_prompt(),
            &expense_user_prompt(message, date, hint),
            self.temperature,
        )?;
        let fields = ExtractedFields::parse(&response);
        let (record, subs) = normalize_expense(&fields, date, hint);
        self.log_substitutions(Intent::Expense, &subs);
        Ok(record)
    }

    pub fn extract_study(
        &self,
        message: &RawMessage,
        date: ResolvedDate,
    ) -> Result<StudyRecord, ExtractionUnavailable> {
        let response = self.completion.complete(
            &study_system_prompt(),
            &study_user_prompt(message, date),
            self.temperature,
        )?;
        let fields = ExtractedFields::parse(&response);
        let (record, subs) = normalize_study(&fields, date, message);
        self.log_substitutions(Intent::Study, &subs);
        Ok(record)
    }

    fn log_substitutions(&self, intent: Intent, subs: &[Substitution]) {
        for s in subs {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Warn, "malformed model output")
                    .layer("usecase")
                    .kind("extraction")
                    .field("intent", intent.as_str())
                    .field("field", s.field)
                    .field("raw", s.raw.as_str())
                    .field("used", s.used.as_str()),
            );
        }
    }
}
