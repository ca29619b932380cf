/// Display formatting helpers for counts, dollar amounts, and durations.
///
/// All measures stay numeric internally; floating point formatting only
/// happens at the display boundary.

/// Format a dollar amount, e.g. `$1,234.50`.
///
/// Whole-dollar amounts drop the cents (`$1,234`) because KPI tiles for
/// integer-valued totals read better without a trailing `.00`.
pub fn format_money(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let cents = ((amount - amount.trunc()).abs() * 100.0).round() as u64;
    if cents == 0 {
        format!("${}", format_count(whole.unsigned_abs()))
    } else {
        format!("${}.{:02}", format_count(whole.unsigned_abs()), cents)
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a duration in seconds into the largest sensible unit.
pub fn format_duration_secs(secs: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = MINUTE * 60.0;
    const DAY: f64 = HOUR * 24.0;

    if secs < MINUTE {
        format!("{secs:.0}s")
    } else if secs < HOUR {
        format!("{:.1}m", secs / MINUTE)
    } else if secs < DAY {
        format!("{:.1}h", secs / HOUR)
    } else {
        format!("{:.1}d", secs / DAY)
    }
}
