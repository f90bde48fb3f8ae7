//! Chinese names for traditional dates.

use crate::consts::TABLE_BASE_YEAR;
use crate::locator::TraditionalDate;

const ELEMENTS: [&str; 5] = ["铁", "水", "木", "火", "土"];

const ANIMALS: [&str; 12] = [
    "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪", "鼠", "牛",
];

const MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二",
];

/// Names of the months after the festival or season they hold.
const TIBETAN_MONTHS: [&str; 12] = [
    "神变", "苦行", "具香", "萨嘎", "作净", "明净", "具醉", "具贤", "天降", "持众", "庄严", "满意",
];

const DAYS: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

fn cyclic<const N: usize>(names: &[&'static str; N], index: i64) -> &'static str {
    // rem_euclid keeps the index in 0..N
    names[index.rem_euclid(N as i64) as usize]
}

/// Element and animal of a year, e.g. `木蛇` for 2025.
pub fn year_name(year: i32) -> String {
    let offset = i64::from(year - TABLE_BASE_YEAR);
    format!(
        "{}{}",
        cyclic(&ELEMENTS, offset.div_euclid(2)),
        cyclic(&ANIMALS, offset)
    )
}

/// Month number in Chinese, `正` through `十二`.
pub fn month_name(month: u8) -> &'static str {
    cyclic(&MONTHS, i64::from(month) - 1)
}

pub fn tibetan_month_name(month: u8) -> &'static str {
    cyclic(&TIBETAN_MONTHS, i64::from(month) - 1)
}

/// Day number in Chinese, `初一` through `三十`.
pub fn day_name(day: u8) -> &'static str {
    cyclic(&DAYS, i64::from(day) - 1)
}

/// Full text of a traditional date, e.g. `木蛇年 九月十一`.
pub fn full_text(date: &TraditionalDate) -> String {
    format!(
        "{}年 {}月{}",
        year_name(date.year()),
        month_name(date.month()),
        day_name(date.day())
    )
}
