use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Monday on or before the given date. Grouping key for weekly totals.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    let back = d.weekday().num_days_from_monday() as u64;
    d.checked_sub_days(Days::new(back)).unwrap_or(d)
}

/// Mon–Fri check; only workdays participate in weekly totals.
pub fn is_workday(w: Weekday) -> bool {
    !matches!(w, Weekday::Sat | Weekday::Sun)
}

/// Korean single-char weekday label as found in chat-log date headers
/// (`월요일`, `화요일`, ...).
pub fn weekday_from_korean(c: char) -> Option<Weekday> {
    match c {
        '월' => Some(Weekday::Mon),
        '화' => Some(Weekday::Tue),
        '수' => Some(Weekday::Wed),
        '목' => Some(Weekday::Thu),
        '금' => Some(Weekday::Fri),
        '토' => Some(Weekday::Sat),
        '일' => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn weekday_korean(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}
