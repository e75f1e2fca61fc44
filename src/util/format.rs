use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    OffsetDateTime,
};

const SHORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:short] [year], [hour]:[minute]");
const LONG_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:long] [year], [hour]:[minute]");
const REPORT_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Current UTC time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| OffsetDateTime::now_utc().unix_timestamp().to_string())
}

pub fn today_label() -> String {
    OffsetDateTime::now_utc()
        .format(REPORT_DATE)
        .unwrap_or_default()
}

/// `18 Oct 2026, 14:05`, or with the full month name when `long` is set.
/// Text that is not RFC 3339 is returned unchanged.
pub fn format_timestamp(timestamp: &str, long: bool) -> String {
    let Ok(parsed) = OffsetDateTime::parse(timestamp, &Rfc3339) else {
        return timestamp.to_string();
    };
    let layout = if long { LONG_DATE } else { SHORT_DATE };
    parsed
        .format(layout)
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Two decimals with Indian digit grouping: `12,34,567.89`.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = if whole.len() <= 3 {
        whole.to_string()
    } else {
        let (head, last_three) = whole.split_at(whole.len() - 3);
        let mut pairs: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            pairs.push(&head[start..end]);
            end = start;
        }
        pairs.reverse();
        format!("{},{}", pairs.join(","), last_three)
    };

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
