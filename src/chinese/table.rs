//! 農曆年表及月長解碼
//!
//! 每公曆年一行，自 1891 年至 2100 年，記該年所起農曆年的閏月、正月初一所在公曆日期，以及各月大小的位元編碼。

/// 年表首年
pub const FIRST_YEAR: i32 = 1891;
/// 年表末年
pub const LAST_YEAR: i32 = 2100;

/// 一年的年表數據
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearEntry {
    /// 閏月所隨之平月，`0` 為無閏月
    pub leap_month: u8,
    /// 正月初一所在公曆月
    pub new_year_month: u8,
    /// 正月初一所在公曆日
    pub new_year_day: u8,
    /// 月大小編碼，自最高位起依次為各月，`1` 為大月（三十日），`0` 為小月（廿九日）
    pub pattern: u16,
}

const fn y(leap_month: u8, new_year_month: u8, new_year_day: u8, pattern: u16) -> YearEntry {
    YearEntry {
        leap_month,
        new_year_month,
        new_year_day,
        pattern,
    }
}

#[rustfmt::skip]
static YEARS: [YearEntry; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    y(0, 2, 9, 0x55b0), y(6, 1, 30, 0x25b8), y(0, 2, 17, 0x2570), y(0, 2, 6, 0x52b0), y(5, 1, 26, 0xa950),  // 1891
    y(0, 2, 13, 0xe950), y(0, 2, 2, 0x6aa0), y(3, 1, 22, 0xad50), y(0, 2, 10, 0xab50), y(8, 1, 30, 0x4b68),  // 1896
    y(0, 2, 19, 0x4ae0), y(0, 2, 8, 0xa570), y(5, 1, 29, 0x5268), y(0, 2, 16, 0xd260), y(0, 2, 4, 0xd950),  // 1901
    y(4, 1, 25, 0x6aa8), y(0, 2, 13, 0x56a0), y(0, 2, 2, 0x9ad0), y(2, 1, 22, 0x4ae8), y(0, 2, 10, 0x4ae0),  // 1906
    y(6, 1, 30, 0xa4d8), y(0, 2, 18, 0xa4d0), y(0, 2, 6, 0xd250), y(5, 1, 26, 0xd528), y(0, 2, 14, 0xb540),  // 1911
    y(0, 2, 3, 0xd6a0), y(2, 1, 23, 0x96d0), y(0, 2, 11, 0x95b0), y(7, 2, 1, 0x49b8), y(0, 2, 20, 0x4970),  // 1916
    y(0, 2, 8, 0xa4b0), y(5, 1, 28, 0xb258), y(0, 2, 16, 0x6a50), y(0, 2, 5, 0x6d40), y(4, 1, 24, 0xada8),  // 1921
    y(0, 2, 13, 0x2b60), y(0, 2, 2, 0x9570), y(2, 1, 23, 0x4978), y(0, 2, 10, 0x4970), y(6, 1, 30, 0x64b0),  // 1926
    y(0, 2, 17, 0xd4a0), y(0, 2, 6, 0xea50), y(5, 1, 26, 0x6d48), y(0, 2, 14, 0x5ad0), y(0, 2, 4, 0x2b60),  // 1931
    y(3, 1, 24, 0x9370), y(0, 2, 11, 0x92e0), y(7, 1, 31, 0xc968), y(0, 2, 19, 0xc950), y(0, 2, 8, 0xd4a0),  // 1936
    y(6, 1, 27, 0xda50), y(0, 2, 15, 0xb550), y(0, 2, 5, 0x56a0), y(4, 1, 25, 0xaad8), y(0, 2, 13, 0x25d0),  // 1941
    y(0, 2, 2, 0x92d0), y(2, 1, 22, 0xc958), y(0, 2, 10, 0xa950), y(7, 1, 29, 0xb4a8), y(0, 2, 17, 0x6ca0),  // 1946
    y(0, 2, 6, 0xb550), y(5, 1, 27, 0x55a8), y(0, 2, 14, 0x4da0), y(0, 2, 3, 0xa5b0), y(3, 1, 24, 0x52b8),  // 1951
    y(0, 2, 12, 0x52b0), y(8, 1, 31, 0xa950), y(0, 2, 18, 0xe950), y(0, 2, 8, 0x6aa0), y(6, 1, 28, 0xad50),  // 1956
    y(0, 2, 15, 0xab50), y(0, 2, 5, 0x4b60), y(4, 1, 25, 0xa570), y(0, 2, 13, 0xa570), y(0, 2, 2, 0x5260),  // 1961
    y(3, 1, 21, 0xe930), y(0, 2, 9, 0xd950), y(7, 1, 30, 0x5aa8), y(0, 2, 17, 0x56a0), y(0, 2, 6, 0x96d0),  // 1966
    y(5, 1, 27, 0x4ae8), y(0, 2, 15, 0x4ad0), y(0, 2, 3, 0xa4d0), y(4, 1, 23, 0xd268), y(0, 2, 11, 0xd250),  // 1971
    y(8, 1, 31, 0xd528), y(0, 2, 18, 0xb540), y(0, 2, 7, 0xb6a0), y(6, 1, 28, 0x96d0), y(0, 2, 16, 0x95b0),  // 1976
    y(0, 2, 5, 0x49b0), y(4, 1, 25, 0xa4b8), y(0, 2, 13, 0xa4b0), y(10, 2, 2, 0xb258), y(0, 2, 20, 0x6a50),  // 1981
    y(0, 2, 9, 0x6d40), y(6, 1, 29, 0xada0), y(0, 2, 17, 0xab60), y(0, 2, 6, 0x9570), y(5, 1, 27, 0x4978),  // 1986
    y(0, 2, 15, 0x4970), y(0, 2, 4, 0x64b0), y(3, 1, 23, 0x6a50), y(0, 2, 10, 0xea50), y(8, 1, 31, 0x6b28),  // 1991
    y(0, 2, 19, 0x5ac0), y(0, 2, 7, 0xab60), y(5, 1, 28, 0x9368), y(0, 2, 16, 0x92e0), y(0, 2, 5, 0xc960),  // 1996
    y(4, 1, 24, 0xd4a8), y(0, 2, 12, 0xd4a0), y(0, 2, 1, 0xda50), y(2, 1, 22, 0x5aa8), y(0, 2, 9, 0x56a0),  // 2001
    y(7, 1, 29, 0xaad8), y(0, 2, 18, 0x25d0), y(0, 2, 7, 0x92d0), y(5, 1, 26, 0xc958), y(0, 2, 14, 0xa950),  // 2006
    y(0, 2, 3, 0xb4a0), y(4, 1, 23, 0xb550), y(0, 2, 10, 0xad50), y(9, 1, 31, 0x55a8), y(0, 2, 19, 0x4ba0),  // 2011
    y(0, 2, 8, 0xa5b0), y(6, 1, 28, 0x52b8), y(0, 2, 16, 0x52b0), y(0, 2, 5, 0xa930), y(4, 1, 25, 0x74a8),  // 2016
    y(0, 2, 12, 0x6aa0), y(0, 2, 1, 0xad50), y(2, 1, 22, 0x4da8), y(0, 2, 10, 0x4b60), y(6, 1, 29, 0xa570),  // 2021
    y(0, 2, 17, 0xa4e0), y(0, 2, 6, 0xd260), y(5, 1, 26, 0xe930), y(0, 2, 13, 0xd530), y(0, 2, 3, 0x5aa0),  // 2026
    y(3, 1, 23, 0x6b50), y(0, 2, 11, 0x96d0), y(11, 1, 31, 0x4ae8), y(0, 2, 19, 0x4ad0), y(0, 2, 8, 0xa4d0),  // 2031
    y(6, 1, 28, 0xd258), y(0, 2, 15, 0xd250), y(0, 2, 4, 0xd520), y(5, 1, 24, 0xdaa0), y(0, 2, 12, 0xb5a0),  // 2036
    y(0, 2, 1, 0x56d0), y(2, 1, 22, 0x4ad8), y(0, 2, 10, 0x49b0), y(7, 1, 30, 0xa4b8), y(0, 2, 17, 0xa4b0),  // 2041
    y(0, 2, 6, 0xaa50), y(5, 1, 26, 0xb528), y(0, 2, 14, 0x6d20), y(0, 2, 2, 0xada0), y(3, 1, 23, 0x55b0),  // 2046
    y(0, 2, 11, 0x9370), y(8, 2, 1, 0x4978), y(0, 2, 19, 0x4970), y(0, 2, 8, 0x64b0), y(6, 1, 28, 0x6a50),  // 2051
    y(0, 2, 15, 0xea50), y(0, 2, 4, 0x6b20), y(4, 1, 24, 0xab60), y(0, 2, 12, 0xaae0), y(0, 2, 2, 0x92e0),  // 2056
    y(3, 1, 21, 0xc970), y(0, 2, 9, 0xc960), y(7, 1, 29, 0xd4a8), y(0, 2, 17, 0xd4a0), y(0, 2, 5, 0xda50),  // 2061
    y(5, 1, 26, 0x5aa8), y(0, 2, 14, 0x56a0), y(0, 2, 3, 0xa6d0), y(4, 1, 23, 0x52e8), y(0, 2, 11, 0x52d0),  // 2066
    y(8, 1, 31, 0xa958), y(0, 2, 19, 0xa950), y(0, 2, 7, 0xb4a0), y(6, 1, 27, 0xb550), y(0, 2, 15, 0xad50),  // 2071
    y(0, 2, 5, 0x55a0), y(4, 1, 24, 0xa5d0), y(0, 2, 12, 0xa5b0), y(0, 2, 2, 0x52b0), y(3, 1, 22, 0xa938),  // 2076
    y(0, 2, 9, 0x6930), y(7, 1, 29, 0x7298), y(0, 2, 17, 0x6aa0), y(0, 2, 6, 0xad50), y(5, 1, 26, 0x4da8),  // 2081
    y(0, 2, 14, 0x4b60), y(0, 2, 3, 0xa570), y(4, 1, 24, 0x5270), y(0, 2, 10, 0xd260), y(8, 1, 30, 0xe930),  // 2086
    y(0, 2, 18, 0xd520), y(0, 2, 7, 0xdaa0), y(6, 1, 27, 0x6b50), y(0, 2, 15, 0x56d0), y(0, 2, 5, 0x4ae0),  // 2091
    y(4, 1, 25, 0xa4e8), y(0, 2, 12, 0xa4d0), y(0, 2, 1, 0xd150), y(2, 1, 21, 0xd928), y(0, 2, 9, 0xd520),  // 2096
];

impl YearEntry {
    /// 取得公曆 `year` 年的年表數據。
    ///
    /// 無數據則返回 `None`。
    pub fn get(year: i32) -> Option<&'static Self> {
        let idx = usize::try_from(year.checked_sub(FIRST_YEAR)?).ok()?;
        YEARS.get(idx)
    }

    /// 同 [`YearEntry::get`]，但無數據時 panic。僅供已校驗年份的內部調用。
    ///
    /// # Panics
    ///
    /// 若 `year` 不在 `FIRST_YEAR..=LAST_YEAR` 間則 panic。
    pub fn lookup(year: i32) -> &'static Self {
        Self::get(year)
            .unwrap_or_else(|| panic!("year {} not in {}..={}", year, FIRST_YEAR, LAST_YEAR))
    }

    /// 該年月數，有閏月則為 13，否則為 12。
    pub fn month_count(&self) -> usize {
        if self.leap_month == 0 { 12 } else { 13 }
    }

    /// 各月日數，見 [`decode`]。
    pub fn month_lengths(&self) -> Vec<u32> {
        decode(self.pattern, self.month_count())
    }
}

/// 將月大小編碼解為 `month_count` 個月的日數。
///
/// 編碼視作 16 位二進制，自最高位起取 `month_count` 位，餘下低位不用。
///
/// # 用例
///
/// ```
/// use nongli::chinese::table::decode;
///
/// let lengths = decode(0b0101_0010_1011_0000, 12);
/// assert_eq!(vec![29, 30, 29, 30, 29, 29, 30, 29, 30, 29, 30, 30], lengths);
/// ```
///
/// # Panics
///
/// 若 `month_count` 不為 12 或 13 則 panic。
pub fn decode(pattern: u16, month_count: usize) -> Vec<u32> {
    assert!(
        matches!(month_count, 12 | 13),
        "month count {} not 12 or 13",
        month_count
    );
    (0..month_count)
        .map(|i| 29 + u32::from((pattern >> (15 - i)) & 1))
        .collect()
}

/// 各月末日距正月初一的日數，即月長的前綴和。
///
/// 第 `i` 項同時是第 `i + 2` 個月首日的偏移。
pub fn cumulative(lengths: &[u32]) -> Vec<u32> {
    lengths
        .iter()
        .scan(0, |acc, &len| {
            *acc += len;
            Some(*acc)
        })
        .collect()
}

/// 全年日數
pub fn total(lengths: &[u32]) -> u32 {
    lengths.iter().sum()
}
