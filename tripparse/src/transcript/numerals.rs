//! Small counts spoken as digits, Chinese numerals or English words.

const ENGLISH: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("fourteen", 14),
];

/// Parses `"5"`, `"五"`, `"十二"`, `"两"` or `"five"`.
pub(crate) fn parse_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse().ok();
    }
    let lower = raw.to_lowercase();
    if let Some((_, n)) = ENGLISH.iter().find(|(word, _)| *word == lower) {
        return Some(*n);
    }
    parse_chinese(raw)
}

fn chinese_digit(c: char) -> Option<u32> {
    Some(match c {
        '零' => 0,
        '一' => 1,
        '二' | '两' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    })
}

/// Numerals below one hundred.
fn parse_chinese(raw: &str) -> Option<u32> {
    match raw.split_once('十') {
        Some((tens, units)) => {
            let tens = match tens.chars().collect::<Vec<_>>().as_slice() {
                [] => 1,
                [c] => chinese_digit(*c)?,
                _ => return None,
            };
            let units = match units.chars().collect::<Vec<_>>().as_slice() {
                [] => 0,
                [c] => chinese_digit(*c)?,
                _ => return None,
            };
            Some(tens * 10 + units)
        }
        None => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => chinese_digit(c),
                _ => None,
            }
        }
    }
}
