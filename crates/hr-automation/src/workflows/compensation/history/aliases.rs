use super::{CompensationRecord, PayPeriod};
use crate::workflows::dates::parse_date;
use crate::config::DEFAULT_CURRENCY;
use std::collections::HashMap;

/// Field ids BambooHR has used for each attribute, in priority order.
const DATE_ALIASES: &[&str] = &["date", "effectiveDate", "customEffectiveDate"];
const RATE_ALIASES: &[&str] = &["rate", "payRate", "customRate"];
const CURRENCY_ALIASES: &[&str] = &["currency", "customCurrency"];
const PAY_PERIOD_ALIASES: &[&str] = &["payPer", "customPayPer"];

/// Attribute values of one row before validation.
#[derive(Debug, Default)]
pub(crate) struct RawRecord {
    pub(crate) date: Option<String>,
    pub(crate) rate: Option<String>,
    pub(crate) currency: Option<String>,
    pub(crate) pay_period: Option<String>,
}

impl RawRecord {
    pub(crate) fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            date: resolve(fields, DATE_ALIASES),
            rate: resolve(fields, RATE_ALIASES),
            currency: resolve(fields, CURRENCY_ALIASES),
            pay_period: resolve(fields, PAY_PERIOD_ALIASES),
        }
    }

    /// Rows without a parseable date or a rate are dropped.
    pub(crate) fn into_record(self) -> Option<CompensationRecord> {
        let effective_date = self.date.as_deref().and_then(parse_date)?;
        let rate = non_blank(self.rate)?;
        let currency = non_blank(self.currency).unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let pay_period = self
            .pay_period
            .as_deref()
            .and_then(PayPeriod::parse)
            .unwrap_or_default();

        Some(CompensationRecord {
            effective_date,
            rate,
            currency,
            pay_period,
        })
    }
}

fn resolve(fields: &HashMap<String, String>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| fields.get(*alias))
        .find(|value| !value.trim().is_empty())
        .cloned()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn earlier_alias_wins_and_blank_values_fall_through() {
        let raw = RawRecord::from_fields(&fields(&[
            ("date", " "),
            ("effectiveDate", "2023-05-01"),
            ("customEffectiveDate", "2020-01-01"),
            ("rate", "100"),
            ("customRate", "200"),
        ]));
        assert_eq!(raw.date.as_deref(), Some("2023-05-01"));
        assert_eq!(raw.rate.as_deref(), Some("100"));
    }

    #[test]
    fn missing_currency_and_period_use_defaults() {
        let record = RawRecord::from_fields(&fields(&[
            ("customEffectiveDate", "2023-05-01"),
            ("customRate", "3200"),
        ]))
        .into_record()
        .expect("record retained");

        assert_eq!(record.effective_date, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
        assert_eq!(record.currency, "USD");
        assert_eq!(record.pay_period, PayPeriod::Month);
    }

    #[test]
    fn record_requires_date_and_rate() {
        assert!(RawRecord::from_fields(&fields(&[("rate", "10")]))
            .into_record()
            .is_none());
        assert!(RawRecord::from_fields(&fields(&[("date", "2023-01-01")]))
            .into_record()
            .is_none());
        assert!(
            RawRecord::from_fields(&fields(&[("date", "sometime"), ("rate", "10")]))
                .into_record()
                .is_none()
        );
    }

    #[test]
    fn datetime_and_us_dates_are_retained() {
        for (date, expected) in [
            ("2023-01-01T00:00:00", NaiveDate::from_ymd_opt(2023, 1, 1)),
            ("2023-01-01 00:00:00", NaiveDate::from_ymd_opt(2023, 1, 1)),
            ("07/15/2022", NaiveDate::from_ymd_opt(2022, 7, 15)),
        ] {
            let record = RawRecord::from_fields(&fields(&[("date", date), ("rate", "45000")]))
                .into_record()
                .expect("record retained");
            assert_eq!(Some(record.effective_date), expected);
        }
    }
}
