//! Basic mode: the user types in their ideal climate and it gets classified
//! into a hardiness category by a handful of fixed thresholds.

use std::cmp::Ordering;

use crate::quiz::AnswerTag;

/// A number typed in by the user, or nothing usable.
///
/// `Missing` never compares as less, greater or equal to any number, so every
/// threshold involving it is false.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Reading {
    #[default]
    Missing,
    Value(f64),
}

impl Reading {
    /// Lenient parse: leading whitespace is skipped and the longest numeric
    /// prefix is used, so `"72F"` reads as 72. Anything without a leading number is
    /// `Missing`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim_start();
        let len = numeric_prefix_len(text);
        if len == 0 {
            return Reading::Missing;
        }
        match text[..len].parse::<f64>() {
            Ok(value) if !value.is_nan() => Reading::Value(value),
            _ => Reading::Missing,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(*v),
            Reading::Missing => None,
        }
    }
}

impl PartialEq<f64> for Reading {
    fn eq(&self, other: &f64) -> bool {
        self.value().map_or(false, |v| v == *other)
    }
}

impl PartialOrd<f64> for Reading {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value().and_then(|v| v.partial_cmp(other))
    }
}

fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if text[i..].starts_with("Infinity") {
        return i + "Infinity".len();
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        // a lone "." is not part of the number
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimateMeasurement {
    /// Average temperature, °F.
    pub temperature: Reading,
    /// Humidity, percent.
    pub humidity: Reading,
    pub sunny_days: Reading,
    /// Annual rainfall, inches.
    pub rainfall: Reading,
    /// Annual snowfall, inches.
    pub snowfall: Reading,
}

/// Rules are checked in order and the first match wins. Rainfall and sunny days
/// are collected but no rule looks at them.
pub fn classify(m: &ClimateMeasurement) -> AnswerTag {
    if m.temperature < 50.0 || m.snowfall > 40.0 {
        return AnswerTag::Cold;
    }
    if m.temperature >= 50.0 && m.temperature <= 70.0 && m.humidity < 60.0 {
        return AnswerTag::Mild;
    }
    if m.temperature > 70.0 && m.humidity < 70.0 {
        return AnswerTag::Warm;
    }
    AnswerTag::Hot
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ClimateField {
    Temperature,
    Humidity,
    SunnyDays,
    Rainfall,
    Snowfall,
}

impl ClimateField {
    /// Form order.
    pub const ALL: [ClimateField; 5] = [
        ClimateField::Temperature,
        ClimateField::Humidity,
        ClimateField::SunnyDays,
        ClimateField::Rainfall,
        ClimateField::Snowfall,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ClimateField::Temperature => "Ideal Avg Temp (°F)",
            ClimateField::Humidity => "Humidity Preference (%)",
            ClimateField::SunnyDays => "Sunny Days per Year",
            ClimateField::Rainfall => "Annual Rainfall (inches)",
            ClimateField::Snowfall => "Annual Snowfall (inches)",
        }
    }

    pub fn next(&self) -> Option<ClimateField> {
        let idx = Self::ALL.iter().position(|f| f == self)?;
        Self::ALL.get(idx + 1).copied()
    }
}

/// Raw text of the basic mode fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClimateForm {
    pub temperature: String,
    pub humidity: String,
    pub sunny_days: String,
    pub rainfall: String,
    pub snowfall: String,
}

impl ClimateForm {
    pub fn set(&mut self, field: ClimateField, text: impl Into<String>) {
        let slot = match field {
            ClimateField::Temperature => &mut self.temperature,
            ClimateField::Humidity => &mut self.humidity,
            ClimateField::SunnyDays => &mut self.sunny_days,
            ClimateField::Rainfall => &mut self.rainfall,
            ClimateField::Snowfall => &mut self.snowfall,
        };
        *slot = text.into();
    }

    pub fn parse(&self) -> ClimateMeasurement {
        ClimateMeasurement {
            temperature: Reading::parse(&self.temperature),
            humidity: Reading::parse(&self.humidity),
            sunny_days: Reading::parse(&self.sunny_days),
            rainfall: Reading::parse(&self.rainfall),
            snowfall: Reading::parse(&self.snowfall),
        }
    }
}
