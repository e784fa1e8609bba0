use std::collections::HashMap;
use std::sync::OnceLock;

static COUNTRY_CODES: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

/// ISO 3166 alpha-2 code for a country label; unknown labels pass through.
pub fn iso_country(label: &str) -> String {
    country_codes()
        .get(&normalize_label(label))
        .map(|code| (*code).to_string())
        .unwrap_or_else(|| label.to_string())
}

fn country_codes() -> &'static HashMap<String, &'static str> {
    COUNTRY_CODES.get_or_init(|| {
        const LABEL_TO_CODE: &[(&str, &str)] = &[
            ("Ukraine", "UA"),
            ("Poland", "PL"),
            ("Germany", "DE"),
            ("United States", "US"),
            ("United States of America", "US"),
            ("USA", "US"),
        ];

        LABEL_TO_CODE
            .iter()
            .map(|(label, code)| (normalize_label(label), *code))
            .collect()
    })
}

fn normalize_label(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
