use crate::infra::read_json;
use clap::Args;
use hr_automation::config::{
    AppConfig, NotificationConfig, OnboardingConfig, RequisitionConfig, TelemetryConfig,
};
use hr_automation::error::AppError;
use hr_automation::telemetry::{self, TelemetryError};
use hr_automation::workflows::compensation::{
    parse_history, parse_history_csv, CompensationChangeFormatter, Locale, NotificationMessage,
};
use hr_automation::workflows::onboarding::{
    ApplicationWebhook, DepartmentDocument, EmployeeAssembler, Onboarding, RequisitionDocument,
};
use hr_automation::workflows::requisition::{
    RequisitionAssembler, RequisitionLookups, RequisitionRequest, RequisitionSource,
};
use serde_json::Value;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct NotifyArgs {
    /// BambooHR webhook payload (JSON)
    #[arg(long)]
    pub(crate) webhook: PathBuf,
    /// Compensation table response (JSON)
    #[arg(long, conflicts_with = "history_csv")]
    pub(crate) history: Option<PathBuf>,
    /// Compensation history export (CSV)
    #[arg(long)]
    pub(crate) history_csv: Option<PathBuf>,
    /// Message language: uk or en (defaults to NOTIFY_LOCALE)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
}

#[derive(Args, Debug)]
pub(crate) struct RequisitionArgs {
    /// Simplified Notion requisition page (JSON)
    #[arg(long)]
    pub(crate) page: PathBuf,
    /// Resolved department/role/team/user ids (JSON)
    #[arg(long)]
    pub(crate) lookups: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct OnboardArgs {
    /// TeamTailor job-application webhook (JSON)
    #[arg(long)]
    pub(crate) webhook: PathBuf,
    /// TeamTailor job requisition response (JSON)
    #[arg(long)]
    pub(crate) requisition: Option<PathBuf>,
    /// TeamTailor department response (JSON)
    #[arg(long)]
    pub(crate) department: Option<PathBuf>,
    /// BambooHR meta/lists response (JSON), reports options to create
    #[arg(long)]
    pub(crate) lists: Option<PathBuf>,
}

fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::parse(raw).ok_or_else(|| format!("unsupported locale '{raw}' (expected uk or en)"))
}

/// Loads configuration and routes warnings to stderr for one-shot commands.
fn load_cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    init_cli_logging(&config.telemetry)?;
    Ok(config)
}

/// A subscriber installed earlier in the process is kept.
fn init_cli_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    match telemetry::init(config) {
        Ok(()) | Err(TelemetryError::Install(_)) => Ok(()),
        Err(err) => Err(err),
    }
}

pub(crate) fn run_notify(args: NotifyArgs) -> Result<(), AppError> {
    let config = load_cli_config()?;
    let message = build_notification(args, config.notifications)?;
    println!("{}", serde_json::to_string_pretty(&message)?);
    Ok(())
}

pub(crate) fn run_requisition(args: RequisitionArgs) -> Result<(), AppError> {
    let config = load_cli_config()?;
    let request = build_requisition(args, config.requisitions)?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

pub(crate) fn run_onboard(args: OnboardArgs) -> Result<(), AppError> {
    let config = load_cli_config()?;
    let onboarding = build_onboarding(args, config.onboarding)?;
    println!("{}", serde_json::to_string_pretty(&onboarding)?);
    Ok(())
}

pub(crate) fn build_notification(
    args: NotifyArgs,
    mut config: NotificationConfig,
) -> Result<NotificationMessage, AppError> {
    let NotifyArgs {
        webhook,
        history,
        history_csv,
        locale,
    } = args;

    if let Some(locale) = locale {
        config.locale = locale;
    }

    let webhook: Value = read_json(webhook)?;
    let history = match (history, history_csv) {
        (_, Some(path)) => parse_history_csv(File::open(path)?),
        (Some(path), None) => {
            let response: Value = read_json(path)?;
            parse_history(Some(&response))
        }
        (None, None) => parse_history(None),
    };

    let formatter = CompensationChangeFormatter::with_system_clock(config);
    Ok(formatter.format_with_history(&webhook, &history))
}

pub(crate) fn build_requisition(
    args: RequisitionArgs,
    config: RequisitionConfig,
) -> Result<RequisitionRequest, AppError> {
    let source: RequisitionSource = read_json(args.page)?;
    let lookups: RequisitionLookups = match args.lookups {
        Some(path) => read_json(path)?,
        None => RequisitionLookups::default(),
    };

    Ok(RequisitionAssembler::new(config).assemble(&source, &lookups))
}

pub(crate) fn build_onboarding(
    args: OnboardArgs,
    config: OnboardingConfig,
) -> Result<Onboarding, AppError> {
    let payload: Value = read_json(args.webhook)?;
    let webhook = ApplicationWebhook::from_payload(&payload)?;
    let requisition: RequisitionDocument = match args.requisition {
        Some(path) => read_json(path)?,
        None => RequisitionDocument::default(),
    };
    let department: Option<DepartmentDocument> =
        args.department.map(read_json).transpose()?;
    let lists: Option<Value> = args.lists.map(read_json).transpose()?;

    let assembler = EmployeeAssembler::with_system_clock(config);
    Ok(assembler.onboard(
        &webhook,
        &requisition,
        department.as_ref(),
        lists.as_ref(),
    )?)
}
