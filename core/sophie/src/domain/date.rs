//! 解決済みの日付（具体的な暦日、または「未指定」）

use chrono::NaiveDate;
use std::fmt;

/// 日付未指定の表示文字列
pub const UNSPECIFIED_DATE: &str = "no especificada";

/// メッセージごとに 1 回だけ解決し、抽出処理間で読み取り専用に共有する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedDate {
    On(NaiveDate),
    Unspecified,
}

impl ResolvedDate {
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::On(d) => Some(*d),
            Self::Unspecified => None,
        }
    }

    /// `YYYY-MM-DD` を厳密に解釈する。`no especificada` は Unspecified。
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(UNSPECIFIED_DATE) {
            return Some(Self::Unspecified);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self::On)
    }
}

impl fmt::Display for ResolvedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Unspecified => f.write_str(UNSPECIFIED_DATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let d = ResolvedDate::On(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(d.to_string(), "2026-10-16");
        assert_eq!(ResolvedDate::parse("2026-10-16"), Some(d));
        assert_eq!(ResolvedDate::Unspecified.to_string(), "no especificada");
        assert_eq!(
            ResolvedDate::parse(" No especificada "),
            Some(ResolvedDate::Unspecified)
        );
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(ResolvedDate::parse("16/10/2026"), None);
        assert_eq!(ResolvedDate::parse("mañana"), None);
        assert_eq!(ResolvedDate::parse("2026-02-30"), None);
    }
}
