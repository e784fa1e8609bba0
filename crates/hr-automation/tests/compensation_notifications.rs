use std::sync::Arc;

use chrono::{TimeZone, Utc};
use hr_automation::config::NotificationConfig;
use hr_automation::workflows::compensation::{
    Block, ChangeKind, CompensationChangeFormatter, FixedClock, NotificationMessage,
    PreviousRateSource,
};
use serde_json::{json, Value};

fn formatter() -> CompensationChangeFormatter {
    let clock = FixedClock(
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
            .single()
            .expect("valid instant"),
    );
    CompensationChangeFormatter::new(NotificationConfig::default(), Arc::new(clock))
}

fn webhook(fields: Value) -> Value {
    json!({ "employees": [{ "id": "42", "fields": fields }] })
}

fn olena() -> Value {
    webhook(json!({
        "First name Last name": "Olena K.",
        "Compensation - Pay Rate": "50000 USD",
        "Compensation - Effective Date": "2024-03-01",
        "Job Information - Department": "Engineering",
        "Job Information - Job Title": "Backend Developer"
    }))
}

fn history_row(date_key: &str, date: &str, rate_key: &str, rate: &str) -> Value {
    json!({
        "field": [
            { "@id": date_key, "#text": date },
            { "@id": rate_key, "#text": rate },
            { "@id": "currency", "#text": "USD" }
        ]
    })
}

fn history(rows: Vec<Value>) -> Value {
    json!({ "table": { "row": rows } })
}

fn context_texts(block: &Block) -> Vec<String> {
    match block {
        Block::Context { elements } => elements.iter().map(|e| e.text().to_string()).collect(),
        other => panic!("expected context block, got {other:?}"),
    }
}

fn assert_well_formed(message: &NotificationMessage) {
    assert!(matches!(message.blocks.first(), Some(Block::Section { .. })));
    assert!(matches!(message.blocks[1], Block::Context { .. }));
    let len = message.blocks.len();
    assert_eq!(message.blocks[len - 2], Block::Divider);
    assert!(matches!(message.blocks[len - 1], Block::Context { .. }));
    assert!(!message.text.contains('*'));
}

#[test]
fn worked_example_reports_rate_change() {
    let history = history(vec![history_row("date", "2023-01-01", "rate", "45000")]);
    let message = formatter().format(&olena(), Some(&history));

    assert_well_formed(&message);
    assert_eq!(message.metadata.previous_rate.as_deref(), Some("45000 USD"));
    assert_eq!(
        message.metadata.previous_rate_source,
        Some(PreviousRateSource::EarlierRecord)
    );
    assert_eq!(message.metadata.change_kind, ChangeKind::RateChanged);
    assert_eq!(message.metadata.message_type, "Зміна заробітної плати");
    assert!(message.text.contains("45000 USD"));
    assert!(message.text.contains("50000 USD"));
    assert!(message.text.contains("Olena K."));
    assert!(message
        .text
        .contains("https://app.bamboohr.com/employees/employee.php?id=42"));

    let context = context_texts(&message.blocks[1]);
    assert_eq!(
        context,
        vec![
            "📅 *Дата набуття чинності:* 2024-03-01".to_string(),
            "📝 *Причина:* Не вказано".to_string(),
            "💼 *Посада:* Engineering - Backend Developer".to_string(),
        ]
    );
}

#[test]
fn empty_history_reports_rate_set() {
    for history in [None, Some(json!({})), Some(history(Vec::new()))] {
        let message = formatter().format(&olena(), history.as_ref());
        assert_well_formed(&message);
        assert!(message.metadata.previous_rate.is_none());
        assert_eq!(message.metadata.change_kind, ChangeKind::RateSet);
        assert!(message.text.starts_with("🔔 Встановлення заробітної плати"));

        let diagnostics = context_texts(message.blocks.last().expect("diagnostic block"));
        assert!(diagnostics[0].contains("Попередня: Не знайдено"));
    }
}

#[test]
fn equal_previous_rate_reports_unchanged() {
    let history = history(vec![history_row("date", "2023-01-01", "rate", "50000")]);
    let message = formatter().format(&olena(), Some(&history));

    assert_eq!(message.metadata.change_kind, ChangeKind::RateUnchanged);
    assert!(message.text.starts_with("ℹ️ Оновлення компенсації"));
}

#[test]
fn aliased_fields_are_recognized() {
    let history = history(vec![history_row(
        "customEffectiveDate",
        "2023-07-01",
        "customRate",
        "47000",
    )]);
    let message = formatter().format(&olena(), Some(&history));

    assert_eq!(message.metadata.previous_rate.as_deref(), Some("47000 USD"));
    assert_eq!(message.metadata.change_kind, ChangeKind::RateChanged);
}

#[test]
fn nearest_earlier_record_wins_over_older_and_later_rows() {
    let history = history(vec![
        history_row("date", "2024-06-01", "rate", "60000"),
        history_row("date", "2021-01-01", "rate", "30000"),
        history_row("date", "2023-09-01", "rate", "48000"),
        history_row("date", "2024-03-01", "rate", "50000"),
    ]);
    let message = formatter().format(&olena(), Some(&history));

    assert_eq!(message.metadata.previous_rate.as_deref(), Some("48000 USD"));
}

#[test]
fn later_record_is_used_when_nothing_precedes_the_change() {
    let history = history(vec![history_row("date", "2024-09-01", "rate", "52000")]);
    let message = formatter().format(&olena(), Some(&history));

    assert_eq!(message.metadata.previous_rate.as_deref(), Some("52000 USD"));
    assert_eq!(
        message.metadata.previous_rate_source,
        Some(PreviousRateSource::MostRecentFallback)
    );
}

#[test]
fn malformed_history_never_escapes() {
    let cases = [
        json!({ "table": { "row": "not rows" } }),
        json!({ "table": { "row": [{ "field": 12 }] } }),
        json!({ "table": [1, 2, 3] }),
        json!({ "table": { "row": [null, { "field": [] }] } }),
    ];

    for history in cases {
        let message = formatter().format(&olena(), Some(&history));
        assert_well_formed(&message);
        assert!(message.metadata.previous_rate.is_none());
        assert_eq!(message.metadata.change_kind, ChangeKind::RateSet);
        assert_eq!(message.metadata.history_status, "unrecognized");
    }
}

#[test]
fn malformed_webhook_still_produces_a_message() {
    for payload in [json!(null), json!({ "employees": "nope" }), json!([1, 2])] {
        let message = formatter().format(&payload, None);
        assert_well_formed(&message);
        assert_eq!(message.metadata.employee_id, "");
        assert_eq!(message.metadata.change_reason, "Не вказано");
    }
}

#[test]
fn plain_text_strips_emphasis_from_names() {
    let payload = webhook(json!({
        "First name Last name": "*Star* Employee",
        "Compensation - Pay Rate": "10 USD",
        "Compensation - Effective Date": "2024-03-01"
    }));
    let message = formatter().format(&payload, None);
    assert!(!message.text.contains('*'));
    assert!(message.text.contains("Star Employee"));
}

#[test]
fn position_line_only_when_department_or_title_present() {
    let without = webhook(json!({
        "First name Last name": "A B",
        "Compensation - Pay Rate": "10 USD",
        "Compensation - Effective Date": "2024-03-01"
    }));
    let message = formatter().format(&without, None);
    assert_eq!(context_texts(&message.blocks[1]).len(), 2);

    let title_only = webhook(json!({
        "First name Last name": "A B",
        "Compensation - Pay Rate": "10 USD",
        "Compensation - Effective Date": "2024-03-01",
        "Job Information - Job Title": "Designer"
    }));
    let message = formatter().format(&title_only, None);
    let context = context_texts(&message.blocks[1]);
    assert_eq!(context.len(), 3);
    assert_eq!(context[2], "💼 *Посада:* Designer");
}

#[test]
fn metadata_serializes_with_camel_case_keys() {
    let history = history(vec![history_row("date", "2023-01-01", "rate", "45000")]);
    let message = formatter().format(&olena(), Some(&history));
    let value = serde_json::to_value(&message).expect("message serializes");

    assert_eq!(value["metadata"]["previousRate"], "45000 USD");
    assert_eq!(value["metadata"]["employeeId"], "42");
    assert_eq!(value["metadata"]["changeKind"], "rate_changed");
    assert_eq!(value["metadata"]["timestamp"], "2024-03-01T08:00:00.000Z");
    assert_eq!(value["blocks"][2]["type"], "divider");
}

#[test]
fn formatting_is_deterministic_with_fixed_clock() {
    let history = history(vec![history_row("date", "2023-01-01", "rate", "45000")]);
    let first = formatter().format(&olena(), Some(&history));
    let second = formatter().format(&olena(), Some(&history));
    assert_eq!(first, second);
}

#[test]
fn naive_datetime_history_rows_count_as_previous_rate() {
    let history = history(vec![history_row(
        "date",
        "2023-01-01T00:00:00",
        "rate",
        "45000",
    )]);
    let message = formatter().format(&olena(), Some(&history));

    assert_eq!(message.metadata.previous_rate.as_deref(), Some("45000 USD"));
    assert_eq!(message.metadata.change_kind, ChangeKind::RateChanged);
}

#[test]
fn us_formatted_effective_date_still_searches_earlier_records() {
    let payload = webhook(json!({
        "First name Last name": "Olena K.",
        "Compensation - Pay Rate": "50000 USD",
        "Compensation - Effective Date": "03/01/2024"
    }));
    let history = history(vec![
        history_row("date", "2023-01-01", "rate", "45000"),
        history_row("date", "2024-06-01", "rate", "60000"),
    ]);
    let message = formatter().format(&payload, Some(&history));

    assert_eq!(message.metadata.previous_rate.as_deref(), Some("45000 USD"));
    assert_eq!(
        message.metadata.previous_rate_source,
        Some(PreviousRateSource::EarlierRecord)
    );
    assert_eq!(message.metadata.effective_date, "03/01/2024");
}
