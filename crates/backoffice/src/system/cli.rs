use crate::domain::a001_payment::PaymentScreen;
use crate::domain::a002_employee_loan::EmployeeLoanScreen;
use crate::domain::a003_hpp_derivative::HppDerivativeScreen;
use crate::domain::a004_training_request::TrainingRequestScreen;
use crate::domain::a005_purchase_request::PurchaseRequestScreen;
use crate::domain::{Screen, ScreenKind};
use crate::shared::config::Config;
use crate::shared::export::{export_records, write_export, ExportFormat};
use crate::shared::table::render_text;
use clap::{Parser, Subcommand};
use contracts::shared::table::{ListQuery, RecordId, TableRecord};

#[derive(Debug, Parser)]
#[command(name = "backoffice")]
#[command(about = "Back-office table screens: search, sort, page, export")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available screens
    Screens,
    /// Show one page of a screen
    List {
        screen: ScreenKind,
        /// e.g. `q=budi&eq[status]=Lunas&from[date]=01-01-2024&sort=amount&dir=desc&page=2`
        query: Option<String>,
    },
    /// Export the filtered and sorted rows (all pages)
    Export {
        screen: ScreenKind,
        format: ExportFormat,
        query: Option<String>,
    },
    /// Add a record from a JSON form and show the resulting list
    Add {
        screen: ScreenKind,
        form: String,
    },
    /// Replace a record's editable fields from a JSON form
    Update {
        screen: ScreenKind,
        id: String,
        form: String,
    },
    /// Delete a record; asks for confirmation unless --yes is given
    Delete {
        screen: ScreenKind,
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

macro_rules! with_screen {
    ($kind:expr, $handler:ident ( $($arg:expr),* )) => {
        match $kind {
            ScreenKind::Payments => $handler::<PaymentScreen>($($arg),*),
            ScreenKind::EmployeeLoans => $handler::<EmployeeLoanScreen>($($arg),*),
            ScreenKind::HppDerivatives => $handler::<HppDerivativeScreen>($($arg),*),
            ScreenKind::TrainingRequests => $handler::<TrainingRequestScreen>($($arg),*),
            ScreenKind::PurchaseRequests => $handler::<PurchaseRequestScreen>($($arg),*),
        }
    };
}

/// Execute a command and return what is printed to stdout
pub fn run(cli: Cli, config: &Config) -> anyhow::Result<String> {
    match cli.command {
        Command::Screens => Ok(screens_overview()),
        Command::List { screen, query } => with_screen!(screen, list(config, query.as_deref())),
        Command::Export {
            screen,
            format,
            query,
        } => with_screen!(screen, export(config, format, query.as_deref())),
        Command::Add { screen, form } => with_screen!(screen, add(config, &form)),
        Command::Update { screen, id, form } => with_screen!(screen, update(config, &id, &form)),
        Command::Delete { screen, id, yes } => with_screen!(screen, delete(config, &id, yes)),
    }
}

/// Parse a list query string; a leading `?` is accepted
pub fn parse_query(raw: Option<&str>) -> anyhow::Result<ListQuery> {
    let raw = raw.unwrap_or_default().trim().trim_start_matches('?');
    if raw.is_empty() {
        return Ok(ListQuery::default());
    }
    serde_qs::from_str(raw).map_err(|e| anyhow::anyhow!("Invalid query '{}': {}", raw, e))
}

fn screens_overview() -> String {
    ScreenKind::all()
        .iter()
        .map(|kind| format!("{:<20} {:<26} {}\n", kind.key(), kind.title(), kind.department()))
        .collect()
}

fn heading(kind: ScreenKind) -> String {
    format!("{} ({})\n\n", kind.title(), kind.department())
}

fn list<S: Screen>(config: &Config, query: Option<&str>) -> anyhow::Result<String> {
    let mut table = S::new_table(config)?;
    table.apply_query(&parse_query(query)?)?;
    Ok(heading(S::KIND) + &render_text(&table.view(), table.sort()))
}

fn export<S: Screen>(
    config: &Config,
    format: ExportFormat,
    query: Option<&str>,
) -> anyhow::Result<String> {
    let mut table = S::new_table(config)?;
    table.apply_query(&parse_query(query)?)?;

    let rows = table.export_rows();
    let options = config.export_options(S::KIND.title());
    let bytes = export_records(format, &rows, &options)?;
    let path = write_export(&config.export_dir(), S::KIND.key(), format, &bytes)?;
    Ok(format!(
        "Exported {} row(s) to {} ({})\n",
        rows.len(),
        path.display(),
        format.mime_type()
    ))
}

fn add<S: Screen>(config: &Config, form: &str) -> anyhow::Result<String> {
    let form: S::Form =
        serde_json::from_str(form).map_err(|e| anyhow::anyhow!("Invalid form JSON: {}", e))?;
    let mut table = S::new_table(config)?;
    let id = S::create(&mut table, form)?;
    Ok(format!(
        "Created {}\n\n{}",
        id.as_string(),
        render_text(&table.view(), table.sort())
    ))
}

fn parse_id<S: Screen>(raw: &str) -> anyhow::Result<<S::Record as TableRecord>::Id> {
    <<S::Record as TableRecord>::Id as RecordId>::from_string(raw).map_err(|e| anyhow::anyhow!(e))
}

fn update<S: Screen>(config: &Config, id: &str, form: &str) -> anyhow::Result<String> {
    let id = parse_id::<S>(id)?;
    let form: S::Form =
        serde_json::from_str(form).map_err(|e| anyhow::anyhow!("Invalid form JSON: {}", e))?;
    let mut table = S::new_table(config)?;
    if !S::update(&mut table, id, form)? {
        return Ok(format!("No record {} on {}, nothing updated\n", id.as_string(), S::KIND.title()));
    }
    Ok(format!(
        "Updated {}\n\n{}",
        id.as_string(),
        render_text(&table.view(), table.sort())
    ))
}

fn delete<S: Screen>(config: &Config, id: &str, confirmed: bool) -> anyhow::Result<String> {
    let id = parse_id::<S>(id)?;
    let mut table = S::new_table(config)?;

    let pending = S::request_delete(&table, id);
    let Some(summary) = pending.summary().map(str::to_string) else {
        table.cancel_delete(pending);
        return Ok(format!("No record {} on {}, nothing deleted\n", id.as_string(), S::KIND.title()));
    };

    if !confirmed {
        table.cancel_delete(pending);
        return Ok(format!(
            "Delete {} from {}? Re-run with --yes to confirm\n",
            summary,
            S::KIND.title()
        ));
    }

    match S::confirm_delete(&mut table, pending) {
        Some(_) => Ok(format!(
            "Deleted {}\n\n{}",
            summary,
            render_text(&table.view(), table.sort())
        )),
        None => Ok(format!("{} was not deleted\n", summary)),
    }
}
