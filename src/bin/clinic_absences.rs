//! Terminal front end for the absence dashboard.
//!
//! Usage:
//!   clinic-absences add --patient "Alice Martin" --date 2024-03-05 --status "Non venue" --loss 45
//!   clinic-absences list
//!   clinic-absences stats --from 2024-01-01 --patient "Alice Martin"
//!   clinic-absences annual --year 2024
//!   clinic-absences report --patient "Patient 1" --select "Bilan type A/épreuve 1.1/bon"

use std::{path::PathBuf, process::ExitCode};

use chrono::NaiveDate;
use clap::{error::ErrorKind, CommandFactory as _, Parser, Subcommand, ValueEnum};
use fractic_server_error::ServerError;
use tracing_subscriber::EnvFilter;

use clinic_absences::{
    config::DashboardConfig,
    entities::{
        AbsenceRecord, AbsenceStatus, AssessmentSelection, AssessmentSelections, CareType,
        CellEdit, LedgerDiff, StatisticsView,
    },
    formatting::format_loss,
    util::AbsenceDashboardUtil,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Patient absence dashboard: record absences, review lost revenue, and
/// generate assessment reports.
#[derive(Parser)]
#[command(name = "clinic-absences")]
struct Cli {
    /// RON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Absence store location. Overrides the configuration file.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Record a new absence.
    Add {
        #[arg(long)]
        patient: String,
        /// Absence date (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// Annulée, Non venue, Excusée or Reportée.
        #[arg(long, value_parser = parse_status)]
        status: AbsenceStatus,
        /// Lost revenue in euros.
        #[arg(long, default_value_t = 0.0)]
        loss: f64,
        /// Consultation, Suivi, Urgence or Bilan.
        #[arg(long, value_parser = parse_care_type, default_value = "Consultation")]
        care_type: CareType,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Print every recorded absence with its row number.
    List,
    /// Change one cell of an existing row.
    Edit {
        #[arg(long)]
        row: usize,
        #[arg(long, value_enum)]
        field: Field,
        #[arg(long)]
        value: String,
    },
    /// Remove a row.
    Delete {
        #[arg(long)]
        row: usize,
    },
    /// Absences per patient and status, and lost revenue comparison.
    Stats {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long)]
        patient: Option<String>,
    },
    /// Lost revenue per year and per month.
    Annual {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print chart specifications as JSON.
    Chart {
        #[arg(value_enum)]
        which: ChartChoice,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Generate a DOCX assessment report.
    Report {
        #[arg(long)]
        patient: String,
        /// TYPE/TEST/LEVEL, repeatable, in report order.
        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<AssessmentSelection>,
        /// Directory the report is written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    Patient,
    Date,
    Status,
    Loss,
    CareType,
    Comment,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartChoice {
    Period,
    Annual,
}

fn parse_status(s: &str) -> Result<AbsenceStatus, String> {
    AbsenceStatus::from_label(s).ok_or_else(|| format!("unknown status '{}'", s))
}

fn parse_care_type(s: &str) -> Result<CareType, String> {
    CareType::from_label(s).ok_or_else(|| format!("unknown care type '{}'", s))
}

fn parse_selection(s: &str) -> Result<AssessmentSelection, String> {
    let mut parts = s.splitn(3, '/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(t), Some(test), Some(level)) => Ok(AssessmentSelection::new(
            t.trim(),
            test.trim(),
            level.parse().map_err(|_| format!("invalid level in '{}'", s))?,
        )),
        _ => Err(format!("expected TYPE/TEST/LEVEL, got '{}'", s)),
    }
}

fn cell_edit(field: Field, value: &str) -> Result<CellEdit, String> {
    Ok(match field {
        Field::Patient => CellEdit::PatientName(value.to_string()),
        Field::Date => CellEdit::AbsenceDate(value.parse().map_err(|e| format!("{}", e))?),
        Field::Status => CellEdit::Status(parse_status(value)?),
        Field::Loss => CellEdit::FinancialLoss(value.parse().map_err(|e| format!("{}", e))?),
        Field::CareType => CellEdit::CareType(parse_care_type(value)?),
        Field::Comment => CellEdit::Comment(value.to_string()),
    })
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ServerError> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    let mut dashboard = AbsenceDashboardUtil::from_config(&config)?;

    match cli.command {
        Command::Add {
            patient,
            date,
            status,
            loss,
            care_type,
            comment,
        } => {
            let record =
                AbsenceRecord::new(patient, date, status, loss, care_type).with_comment(comment);
            dashboard.add_absence(record)?;
            println!("Absence ajoutée avec succès !");
        }
        Command::List => {
            for (row, r) in dashboard.ledger().records().iter().enumerate() {
                println!(
                    "{:>4}  {:<24} {}  {:<10} {:>12}  {:<13} {}",
                    row,
                    r.patient_name,
                    r.absence_date,
                    r.status.label(),
                    format_loss(r.financial_loss),
                    r.care_type.label(),
                    r.comment
                );
            }
        }
        Command::Edit { row, field, value } => {
            let edit = cell_edit(field, &value).unwrap_or_else(|message| {
                Cli::command()
                    .error(ErrorKind::InvalidValue, message)
                    .exit()
            });
            dashboard.apply_grid_diff(&LedgerDiff::new().edit(row, edit))?;
        }
        Command::Delete { row } => dashboard.apply_grid_diff(&LedgerDiff::new().delete(row))?,
        Command::Stats { from, to, patient } => {
            match dashboard.period_statistics(from, to, patient.as_deref()) {
                StatisticsView::Ready(stats) => {
                    println!("Période : {} → {}", stats.period.start, stats.period.end);
                    for c in &stats.absences_by_patient_status {
                        println!("  {:<24} {:<10} {}", c.patient, c.status.label(), c.count);
                    }
                    if let Some(cmp) = &stats.loss_comparison {
                        println!(
                            "MAG {} : {} / Tous les patients : {}",
                            cmp.patient,
                            format_loss(cmp.patient_total),
                            format_loss(cmp.all_total)
                        );
                    }
                }
                view => println!("{}", view.notice().unwrap_or_default()),
            }
        }
        Command::Annual { year } => match dashboard.annual_statistics(year) {
            StatisticsView::Ready(stats) => {
                for y in &stats.yearly {
                    println!("{}  {:>14}", y.year, format_loss(y.total_loss));
                }
                println!("\nDétail {}", stats.selected_year);
                for m in &stats.monthly {
                    println!("  {:<10} {:>14}", m.month_name, format_loss(m.total_loss));
                }
            }
            view => println!("{}", view.notice().unwrap_or_default()),
        },
        Command::Chart { which, year } => {
            let charts = match which {
                ChartChoice::Period => dashboard
                    .period_statistics(None, None, None)
                    .ready()
                    .map(|s| dashboard.period_charts(&s)),
                ChartChoice::Annual => dashboard
                    .annual_statistics(year)
                    .ready()
                    .map(|s| dashboard.annual_charts(&s)),
            };
            match charts {
                Some(charts) => charts.iter().for_each(|c| println!("{}", c.to_json())),
                None => println!("Aucune donnée disponible."),
            }
        }
        Command::Report {
            patient,
            selections,
            out_dir,
        } => {
            let selections: AssessmentSelections = selections.into_iter().collect();
            let report = dashboard.compose_report(&patient, &selections);
            print!("{}", dashboard.preview_report(&report));

            let artifact = dashboard.write_report(&report)?;
            let path = out_dir.join(&artifact.file_name);
            std::fs::write(&path, &artifact.bytes)
                .map_err(|e| clinic_absences::errors::WriteError::with_debug(&e))?;
            println!("\nBilan enregistré : {}", path.display());
        }
    }
    Ok(())
}
