//! CLP（チリ・ペソ、小数なし）の表示

/// 3 桁ごとに `.` で区切る（例: 4500 → `4.500`）
pub fn format_clp(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
