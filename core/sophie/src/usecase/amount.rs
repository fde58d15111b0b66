//! 本文から CLP 金額を推定するヒューリスティック
//!
//! LLM が金額を返さなかったときの代替値と、プロンプトに渡すヒントに使う。

use regex::Regex;
use std::sync::OnceLock;

fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // 区切りありの形を先に試す（4500 を 450 と読まないよう、区切りは 1 つ以上必須）
    RE.get_or_init(|| {
        Regex::new(r"(?:\$|clp\s*)?(\d{1,3}(?:[.,]\d{3})+|\d+)").expect("static amount regex")
    })
}

/// 最初に見つかった金額（区切り除去後の整数）。見つからなければ 0。
pub fn extract_amount(text: &str) -> u64 {
    let lowered = text.to_lowercase();
    amount_regex()
        .captures(&lowered)
        .and_then(|c| c.get(1))
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect::<String>()
        })
        .and_then(|digits| digits.parse::<u64>().ok())
        .unwrap_or(0)
}
