use crate::commands::{
    run_notify, run_onboard, run_requisition, NotifyArgs, OnboardArgs, RequisitionArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hr_automation::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HR Automation",
    about = "Format BambooHR compensation notifications, requisition and onboarding payloads",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Format a Slack notification for a pay-rate change webhook
    Notify(NotifyArgs),
    /// Assemble a requisition API request from a Notion page export
    Requisition(RequisitionArgs),
    /// Build a BambooHR employee record for a hired TeamTailor candidate
    Onboard(OnboardArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Notify(args) => run_notify(args),
        Command::Requisition(args) => run_requisition(args),
        Command::Onboard(args) => run_onboard(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hr_automation::workflows::compensation::Locale;

    #[test]
    fn missing_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["hr-automation-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn notify_accepts_locale_and_one_history_source() {
        let cli = Cli::try_parse_from([
            "hr-automation-api",
            "notify",
            "--webhook",
            "webhook.json",
            "--history-csv",
            "history.csv",
            "--locale",
            "en",
        ])
        .expect("parses");

        let Some(Command::Notify(args)) = cli.command else {
            panic!("expected notify command");
        };
        assert_eq!(args.locale, Some(Locale::English));
        assert!(args.history.is_none());
    }

    #[test]
    fn notify_rejects_both_history_sources() {
        let result = Cli::try_parse_from([
            "hr-automation-api",
            "notify",
            "--webhook",
            "webhook.json",
            "--history",
            "history.json",
            "--history-csv",
            "history.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn onboard_takes_optional_documents() {
        let cli = Cli::try_parse_from([
            "hr-automation-api",
            "onboard",
            "--webhook",
            "hired.json",
            "--lists",
            "lists.json",
        ])
        .expect("parses");

        let Some(Command::Onboard(args)) = cli.command else {
            panic!("expected onboard command");
        };
        assert!(args.requisition.is_none());
        assert!(args.lists.is_some());
    }
}
