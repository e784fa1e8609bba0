use serde::{Deserialize, Serialize, Serializer};

/// Salary figure as it appears on the requisition page: a number, or text
/// such as `"$50,000"` or `"50k"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
    Amount(f64),
    Text(String),
}

impl SalaryInput {
    pub fn amount(&self) -> Option<Amount> {
        match self {
            Self::Amount(value) => Some(Amount(*value)),
            Self::Text(text) => parse_salary(text).map(Amount),
        }
    }
}

/// Monetary amount serialized as an integer when it has no fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount(pub f64);

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Parses salary text, ignoring currency symbols, thousands separators and a
/// trailing `k` multiplier.
pub fn parse_salary(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ',' | ' ' | '\u{a0}'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (digits, multiplier) = match cleaned.strip_suffix(['k', 'K']) {
        Some(rest) => (rest, 1000.0),
        None => (cleaned.as_str(), 1.0),
    };

    digits
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value * multiplier)
}
