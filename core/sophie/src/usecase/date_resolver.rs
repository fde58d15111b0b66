//! 相対日付（hoy / mañana / pasado mañana）を暦日に解決する

use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use common::ports::outbound::Clock;
use std::sync::Arc;

use crate::domain::{RawMessage, ResolvedDate};

/// 基準日（Clock の現在時刻を tz に変換した日付）から相対日付を解決する
pub struct DateResolver {
    clock: Arc<dyn Clock>,
    tz: Tz,
}

impl DateResolver {
    pub fn new(clock: Arc<dyn Clock>, tz: Tz) -> Self {
        Self { clock, tz }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.tz).date_naive()
    }

    pub fn resolve(&self, message: &RawMessage) -> ResolvedDate {
        resolve_relative(&message.lowered(), self.reference_date())
    }
}

/// 小文字化済みの本文を上から順に照合し、最初に一致したものを採用する
///
/// 「pasado mañana」は「mañana」を含むので、必ず先に調べる。
pub fn resolve_relative(lowered: &str, reference: NaiveDate) -> ResolvedDate {
    let offset = if lowered.contains("hoy") {
        0
    } else if lowered.contains("pasado mañana") || lowered.contains("pasado manana") {
        2
    } else if lowered.contains("mañana") || lowered.contains("manana") {
        1
    } else {
        return ResolvedDate::Unspecified;
    };
    reference
        .checked_add_days(Days::new(offset))
        .map(ResolvedDate::On)
        .unwrap_or(ResolvedDate::Unspecified)
}
