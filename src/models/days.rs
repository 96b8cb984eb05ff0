use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serializer};

/// Day-to-letter mapping used by course schedules. Thursday is "R" so every
/// day keeps a single character; Sunday has no code and never appears in a
/// pattern.
const DAY_CHARS: [(Weekday, char); 6] = [
    (Weekday::Mon, 'M'),
    (Weekday::Tue, 'T'),
    (Weekday::Wed, 'W'),
    (Weekday::Thu, 'R'),
    (Weekday::Fri, 'F'),
    (Weekday::Sat, 'S'),
];

/// Renders a weekday set as its letter pattern, e.g. {Tue, Thu} -> "TR".
/// Output is sorted Monday-first and duplicates collapse to one letter.
pub fn format_days(days: &[Weekday]) -> String {
    let mut sorted: Vec<Weekday> = days.to_vec();
    sorted.sort_by_key(|day| day.num_days_from_monday());
    sorted.dedup();

    let mut pattern = String::new();
    for day in sorted {
        for &(known, letter) in &DAY_CHARS {
            if day == known {
                pattern.push(letter);
                break;
            }
        }
    }
    pattern
}

/// Parses a letter pattern back into a weekday set. Unrecognized characters
/// are ignored rather than treated as errors.
pub fn parse_days(pattern: &str) -> Vec<Weekday> {
    let mut days = Vec::new();
    for c in pattern.chars() {
        for &(day, letter) in &DAY_CHARS {
            if c == letter && !days.contains(&day) {
                days.push(day);
                break;
            }
        }
    }
    days.sort_by_key(|day| day.num_days_from_monday());
    days
}

pub fn serialize<S>(days: &[Weekday], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_days(days))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Weekday>, D::Error>
where
    D: Deserializer<'de>,
{
    let pattern = String::deserialize(deserializer)?;
    Ok(parse_days(&pattern))
}
