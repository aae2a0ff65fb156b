//! 日期工具：月份区间、D-day 与韩文星期

use chrono::{Datelike, NaiveDate, Weekday};

/// 某月的第一天和最后一天
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

/// D-day：距离开始日期的天数，已过去时为负数
pub fn days_until(start: NaiveDate, today: NaiveDate) -> i64 {
    (start - today).num_days()
}

pub fn korean_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

fn short_date(date: NaiveDate) -> String {
    format!(
        "{}/{}({})",
        date.month(),
        date.day(),
        korean_weekday(date.weekday())
    )
}

/// `M/d(요일)`，结束日期不同时为 `M/d(요일) ~ M/d(요일)`
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    match end {
        Some(end) if end != start => format!("{} ~ {}", short_date(start), short_date(end)),
        _ => short_date(start),
    }
}

/// 当前学年内的学期：3~8 月为第 1 学期，其余为第 2 学期
pub fn semester_of(date: NaiveDate) -> i32 {
    if (3..=8).contains(&date.month()) { 1 } else { 2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2024, 2), Some((d(2024, 2, 1), d(2024, 2, 29))));
        assert_eq!(month_bounds(2025, 12), Some((d(2025, 12, 1), d(2025, 12, 31))));
        assert_eq!(month_bounds(2025, 13), None);
    }

    #[test]
    fn test_days_until() {
        let today = d(2025, 3, 10);
        assert_eq!(days_until(d(2025, 3, 15), today), 5);
        assert_eq!(days_until(today, today), 0);
        assert_eq!(days_until(d(2025, 3, 8), today), -2);
    }

    #[test]
    fn test_format_date_range() {
        // 2025-03-03 是星期一
        assert_eq!(format_date_range(d(2025, 3, 3), None), "3/3(월)");
        assert_eq!(format_date_range(d(2025, 3, 3), Some(d(2025, 3, 3))), "3/3(월)");
        assert_eq!(
            format_date_range(d(2025, 3, 3), Some(d(2025, 3, 9))),
            "3/3(월) ~ 3/9(일)"
        );
    }

    #[test]
    fn test_semester_of() {
        assert_eq!(semester_of(d(2025, 3, 2)), 1);
        assert_eq!(semester_of(d(2025, 9, 1)), 2);
        assert_eq!(semester_of(d(2026, 1, 15)), 2);
    }
}
