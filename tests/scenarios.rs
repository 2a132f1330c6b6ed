use chrono::{FixedOffset, Local, TimeZone};
use nongli::chinese::{LunarYear, leap_month};
use nongli::{Error, Month, convert, convert_from_timestamp};

#[test]
fn convert_2018_05_20() {
    let date = convert(2018, 5, 20).unwrap();
    assert_eq!(2018, date.year);
    assert_eq!(Month::Common(4), date.month);
    assert_eq!((4, 6), (date.month_index, date.day_index));
    assert_eq!(("四月", "初六"), (date.month_text.as_str(), date.day_text.as_str()));
    assert_eq!(("戊戌", "狗"), (date.year_name.as_str(), date.zodiac));
}

#[test]
fn first_supported_new_year() {
    let new_year = LunarYear::new(1892).unwrap().new_year();
    assert_eq!("1892-01-30", new_year.iso_gregorian());
    let date = convert(1892, 1, 30).unwrap();
    assert_eq!((1892, 1, 1), (date.year, date.month_index, date.day_index));
    assert_eq!("壬辰年(龙) 正月初一", date.to_string());
}

#[test]
fn range_bounds_are_inclusive() {
    assert!(convert(1892, 1, 1).is_ok());
    assert!(convert(2100, 12, 31).is_ok());
    for year in [1891, 2101] {
        assert_eq!(
            Err(Error::OutOfRange {
                year,
                min: 1892,
                max: 2100
            }),
            convert(year, 1, 1)
        );
    }
}

#[test]
fn leap_months() {
    for (year, expected) in [(2017, Some(6)), (2018, None), (2020, Some(4)), (2033, Some(11))] {
        assert_eq!(Ok(expected), leap_month(year), "{year}");
    }
    assert!(leap_month(1891).is_err());
}

#[test]
fn intercalary_month_spans() {
    for ((y, m, d), text) in [
        ((2020, 5, 22), "四月三十"),
        ((2020, 5, 23), "闰四月初一"),
        ((2020, 6, 20), "闰四月廿九"),
        ((2020, 6, 21), "五月初一"),
        ((2023, 3, 22), "闰二月初一"),
        ((2023, 4, 20), "三月初一"),
    ] {
        let date = convert(y, m, d).unwrap();
        assert_eq!(text, date.month_text.clone() + &date.day_text, "{y}-{m}-{d}");
    }
}

#[test]
fn timestamp_matches_civil_date() {
    let cst = FixedOffset::east_opt(8 * 3600).unwrap();
    let instant = cst.with_ymd_and_hms(2024, 2, 10, 0, 30, 0).unwrap();
    let date = convert_from_timestamp(&instant).unwrap();
    assert_eq!(("甲辰", "龙", 1, 1), (date.year_name.as_str(), date.zodiac, date.month_index, date.day_index));

    let local = Local.with_ymd_and_hms(2018, 5, 20, 12, 0, 0).unwrap();
    assert_eq!(convert(2018, 5, 20), convert_from_timestamp(&local));
}
