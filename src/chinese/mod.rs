//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製的農曆年表推算夏曆，見 [`table`]。支持公曆 1892 年至 2100 年。

use std::fmt::{self as std_fmt, Display};

use chrono::{DateTime, Datelike, TimeZone};
use tracing::{debug, trace};

use crate::date::{Date, days_between};
use crate::error::Error;

pub mod fmt;
pub mod table;

use table::YearEntry;

/// 支持的首個公曆年。年表雖含 1891 年，但該年不接受查詢。
pub const MIN_YEAR: i32 = table::FIRST_YEAR + 1;
/// 支持的末個公曆年
pub const MAX_YEAR: i32 = table::LAST_YEAR;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「腊月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 農曆年，自正月初一至除夕，以正月初一所在公曆年編號。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{LunarYear, Month::*};
///
/// let year = LunarYear::new(2017).unwrap();
///
/// assert_eq!("2017-01-28", year.new_year().iso_gregorian());
/// assert_eq!(Some(6), year.leap_month());
/// assert_eq!(Leap(6), year.months()[6]);
/// assert_eq!(384, year.days());
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 正月初一所在公曆年
    pub year: i32,
    /// 該年的年表數據
    pub entry: &'static YearEntry,
    month_lengths: Vec<u32>,
}

impl LunarYear {
    /// 取得正月初一在公曆 `year` 年的農曆年。
    ///
    /// 若年表無該年資料則返回 `None`。
    pub fn new(year: i32) -> Option<Self> {
        let entry = YearEntry::get(year)?;
        Some(Self {
            year,
            entry,
            month_lengths: entry.month_lengths(),
        })
    }

    fn lookup(year: i32) -> Self {
        let entry = YearEntry::lookup(year);
        Self {
            year,
            entry,
            month_lengths: entry.month_lengths(),
        }
    }

    /// 正月初一所在公曆日期
    pub fn new_year(&self) -> Date {
        let (m, d) = (self.entry.new_year_month, self.entry.new_year_day);
        Date::from_gregorian(self.year, m.into(), d.into())
            .unwrap_or_else(|| panic!("invalid new year date for {}", self.year))
    }

    /// 閏月所隨之平月，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.entry.leap_month {
            0 => None,
            m => Some(m.into()),
        }
    }

    /// 各月日數，閏月在其所隨平月之後。
    pub fn month_lengths(&self) -> &[u32] {
        &self.month_lengths
    }

    /// 各月末日距正月初一的日數，見 [`table::cumulative`]。
    pub fn month_bounds(&self) -> Vec<u32> {
        table::cumulative(&self.month_lengths)
    }

    /// 全年日數
    pub fn days(&self) -> u32 {
        table::total(&self.month_lengths)
    }

    /// 全年各月月名，依月序排列。
    pub fn months(&self) -> Vec<Month> {
        (1..=self.month_lengths.len() as u32)
            .map(|slot| self.month_at(slot))
            .collect()
    }

    /// 取得第 `slot` 個月（自 1 起，閏月亦計）的月名。
    ///
    /// 閏月與其前一平月同名；閏月之後各月的序號比實際月份多一。
    pub fn month_at(&self, slot: u32) -> Month {
        match self.leap_month() {
            Some(leap) if slot == leap + 1 => Month::Leap(slot - 1),
            Some(leap) if slot > leap + 1 => Month::Common(slot - 1),
            _ => Month::Common(slot),
        }
    }

    /// 由距正月初一的日數求月序（閏月亦計）及日，返回 `(月序, 日)`。
    ///
    /// 偏移恰為某月末界時，即次月初一。
    ///
    /// # Panics
    ///
    /// 若 `offset` 不小於全年日數則 panic。
    pub fn locate(&self, offset: u32) -> (u32, u32) {
        let bounds = self.month_bounds();
        let idx = bounds.partition_point(|&bound| bound <= offset);
        assert!(
            idx < bounds.len(),
            "offset {} past end of lunar year {}",
            offset,
            self.year
        );
        let start = if idx == 0 { 0 } else { bounds[idx - 1] };
        (idx as u32 + 1, offset - start + 1)
    }

    /// 由距正月初一的日數求農曆日期。
    pub fn date_at(&self, offset: u32) -> LunarDate {
        let (slot, day) = self.locate(offset);
        let month = self.month_at(slot);
        LunarDate {
            year: self.year,
            month,
            month_index: slot,
            day_index: day,
            month_text: fmt::month(month),
            day_text: fmt::day(day),
            year_name: year_name(self.year),
            zodiac: zodiac_for_year(self.year),
        }
    }
}

/// 換算所得的農曆日期
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// 農曆年，正月前的日期屬前一年
    pub year: i32,
    /// 月名
    pub month: Month,
    /// 月序，自 1 起，閏月亦計，故可為 13
    pub month_index: u32,
    /// 日，`1..=30`
    pub day_index: u32,
    /// 月名文本，閏月冠以「闰」
    pub month_text: String,
    /// 日名文本
    pub day_text: String,
    /// 年干支
    pub year_name: String,
    /// 生肖
    pub zodiac: &'static str,
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(
            f,
            "{}年({}) {}{}",
            self.year_name, self.zodiac, self.month_text, self.day_text
        )
    }
}

/// 將公曆日期換算為農曆。
///
/// # Errors
///
/// 年份不在 [`MIN_YEAR`]`..=`[`MAX_YEAR`] 間時回報 [`Error::OutOfRange`]，此檢查先於其他；公曆月日無效時回報 [`Error::InvalidMonth`] 或 [`Error::InvalidDay`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::{convert, Month::*};
///
/// let date = convert(2018, 5, 20).unwrap();
///
/// assert_eq!((2018, Common(4), 6), (date.year, date.month, date.day_index));
/// assert_eq!("戊戌年(狗) 四月初六", date.to_string());
/// ```
#[tracing::instrument]
pub fn convert(year: i32, month: u32, day: u32) -> Result<LunarDate, Error> {
    check_year(year)?;
    let date = Date::new(year, month, day)?;
    let new_year = LunarYear::lookup(year).new_year();
    Ok(resolve(year, days_between(date, new_year)))
}

/// 取時刻在其所帶時區的公曆日期，再換算為農曆。傳入 [`chrono::Local`] 時刻即按本地日曆。
///
/// # Errors
///
/// 同 [`convert`]。
///
/// # 用例
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use nongli::chinese::convert_from_timestamp;
///
/// let cst = FixedOffset::east_opt(8 * 3600).unwrap();
/// let instant = cst.with_ymd_and_hms(2018, 5, 20, 1, 0, 0).unwrap();
///
/// assert_eq!("初六", convert_from_timestamp(&instant).unwrap().day_text);
/// ```
pub fn convert_from_timestamp<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<LunarDate, Error> {
    let date = instant.date_naive();
    convert(date.year(), date.month(), date.day())
}

/// 取得正月初一在公曆 `year` 年的農曆年的閏月，無閏月則為 `None`。
///
/// # Errors
///
/// 年份不受支持時回報 [`Error::OutOfRange`]。
///
/// # 用例
///
/// ```
/// use nongli::chinese::leap_month;
///
/// assert_eq!(Ok(Some(6)), leap_month(2017));
/// assert_eq!(Ok(None), leap_month(2018));
/// ```
pub fn leap_month(year: i32) -> Result<Option<u32>, Error> {
    check_year(year)?;
    Ok(LunarYear::lookup(year).leap_month())
}

/// 以公曆 `civil_year` 年正月初一為基準，由日數偏移求農曆日期。
///
/// 偏移為負時，日期屬前一農曆年，改以前一年末日倒數。
///
/// # Panics
///
/// 年表無所需年份，或偏移超出該年時 panic；公開入口已先行校驗。
pub fn resolve(civil_year: i32, offset: i32) -> LunarDate {
    let (lunar_year, offset) = if offset < 0 {
        let prev = LunarYear::lookup(civil_year - 1);
        let offset = prev.days() as i32 + offset;
        debug!(year = prev.year, offset, "date precedes new year, using previous lunar year");
        (prev, offset)
    } else {
        (LunarYear::lookup(civil_year), offset)
    };
    let offset = u32::try_from(offset)
        .unwrap_or_else(|_| panic!("offset {} before lunar year {}", offset, lunar_year.year));
    let date = lunar_year.date_at(offset);
    trace!(%date, month_index = date.month_index, "resolved");
    date
}

fn check_year(year: i32) -> Result<(), Error> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::OutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Ok(())
}

/// 取得所給公元年的干支。
///
/// # 用例
///
/// ```
/// use nongli::chinese::sexagenary_for_year;
///
/// assert_eq!(1, sexagenary_for_year(-2696));
/// ```
pub fn sexagenary_for_year(year: i32) -> u32 {
    (year.rem_euclid(60) as u32 + 2696) % 60 + 1
}

/// 取得所給農曆年的干支名。
///
/// # 用例
///
/// ```
/// use nongli::chinese::year_name;
///
/// assert_eq!("戊戌", year_name(2018));
/// ```
pub fn year_name(year: i32) -> String {
    fmt::sexagenary(sexagenary_for_year(year))
}

/// 取得所給農曆年的生肖。
///
/// # 用例
///
/// ```
/// use nongli::chinese::zodiac_for_year;
///
/// assert_eq!("狗", zodiac_for_year(2018));
/// ```
pub fn zodiac_for_year(year: i32) -> &'static str {
    fmt::zodiac(sexagenary_for_year(year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        use Month::*;
        let data = [
            ((2018, 5, 20), (2018, Common(4), 4, 6, "四月", "初六")),
            ((2017, 1, 27), (2016, Common(12), 12, 30, "腊月", "三十")),
            ((2017, 1, 28), (2017, Common(1), 1, 1, "正月", "初一")),
            ((2017, 7, 22), (2017, Common(6), 6, 29, "六月", "廿九")),
            ((2017, 7, 23), (2017, Leap(6), 7, 1, "闰六月", "初一")),
            ((2000, 1, 1), (1999, Common(11), 11, 25, "冬月", "廿五")),
            ((1892, 1, 1), (1891, Common(12), 12, 2, "腊月", "初二")),
            ((2100, 12, 31), (2100, Common(12), 12, 1, "腊月", "初一")),
            ((2001, 6, 20), (2001, Leap(4), 5, 29, "闰四月", "廿九")),
            ((2001, 6, 21), (2001, Common(5), 6, 1, "五月", "初一")),
            ((2033, 12, 22), (2033, Leap(11), 12, 1, "闰冬月", "初一")),
            ((2034, 1, 20), (2033, Common(12), 13, 1, "腊月", "初一")),
            ((2024, 2, 9), (2023, Common(12), 13, 30, "腊月", "三十")),
        ];
        for ((y, m, d), (year, month, slot, day, month_text, day_text)) in data {
            let date = convert(y, m, d).unwrap();
            assert_eq!(
                (year, month, slot, day, month_text, day_text),
                (
                    date.year,
                    date.month,
                    date.month_index,
                    date.day_index,
                    date.month_text.as_str(),
                    date.day_text.as_str()
                ),
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn year_identity() {
        for (year, name, zodiac) in [
            (1891, "辛卯", "兔"),
            (1999, "己卯", "兔"),
            (2000, "庚辰", "龙"),
            (2016, "丙申", "猴"),
            (2017, "丁酉", "鸡"),
            (2018, "戊戌", "狗"),
            (2020, "庚子", "鼠"),
            (2033, "癸丑", "牛"),
            (2100, "庚申", "猴"),
        ] {
            assert_eq!((name, zodiac), (year_name(year).as_str(), zodiac_for_year(year)), "{year}");
        }
    }

    #[test]
    fn rollback_uses_previous_year_identity() {
        let date = convert(2017, 1, 27).unwrap();
        assert_eq!(("丙申", "猴"), (date.year_name.as_str(), date.zodiac));
    }

    #[test]
    fn months_with_leap() {
        use Month::*;
        let year = LunarYear::new(2020).unwrap();
        assert_eq!(
            vec![
                Common(1),
                Common(2),
                Common(3),
                Common(4),
                Leap(4),
                Common(5),
                Common(6),
                Common(7),
                Common(8),
                Common(9),
                Common(10),
                Common(11),
                Common(12),
            ],
            year.months()
        );
        let plain = LunarYear::new(2018).unwrap();
        assert_eq!(None, plain.leap_month());
        assert_eq!((1..=12).map(Common).collect::<Vec<_>>(), plain.months());
    }

    #[test]
    fn locate_on_bounds() {
        let year = LunarYear::new(2018).unwrap();
        assert_eq!((1, 1), year.locate(0));
        assert_eq!((1, 29), year.locate(28));
        assert_eq!((2, 1), year.locate(29));
        assert_eq!((12, 30), year.locate(353));
    }

    #[test]
    #[should_panic(expected = "offset 354 past end of lunar year 2018")]
    fn locate_past_end() {
        LunarYear::new(2018).unwrap().locate(354);
    }

    #[test]
    fn out_of_range() {
        for year in [1891, 2101, 0, -2018] {
            assert_eq!(
                Err(Error::OutOfRange {
                    year,
                    min: 1892,
                    max: 2100
                }),
                convert(year, 1, 1)
            );
        }
        assert!(matches!(convert(1891, 13, 1), Err(Error::OutOfRange { .. })));
        assert!(matches!(leap_month(2101), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn invalid_civil_date() {
        assert_eq!(Err(Error::InvalidMonth { month: 13 }), convert(2018, 13, 1));
        assert_eq!(
            Err(Error::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28
            }),
            convert(2018, 2, 29)
        );
        assert!(convert(2020, 2, 29).is_ok());
    }

    #[test]
    fn from_timestamp_uses_instant_offset() {
        use chrono::{FixedOffset, Utc};
        let cst = FixedOffset::east_opt(8 * 3600).unwrap();
        let instant = cst.with_ymd_and_hms(2018, 5, 20, 4, 0, 0).unwrap();
        assert_eq!(convert(2018, 5, 20), convert_from_timestamp(&instant));
        let utc = instant.with_timezone(&Utc);
        assert_eq!(convert(2018, 5, 19), convert_from_timestamp(&utc));
    }

    #[test]
    fn display() {
        assert_eq!("丁酉年(鸡) 闰六月初一", convert(2017, 7, 23).unwrap().to_string());
    }
}
