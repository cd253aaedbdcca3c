mod config;
mod logging;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use regform_core::{Error as CoreError, FormState};
use regform_validate::{
    StepValidator, ValidationResult, current_calendar_year, form_report_json_schema,
    intake_options_json_schema, result_json_schema,
};
use thiserror::Error;
use uuid::Uuid;

use config::{CliConfig, ConfigError, OutputFormat, load_config};
use logging::init_logging;
use report::{RunReport, render_text, write_json_atomic};

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "regform", version, about = "Registration form step validator")]
struct Cli {
    /// Path to a regform.toml config file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a JSON form state for one step or the whole form.
    Validate(ValidateArgs),
    /// Print the intake options for a year as JSON.
    IntakeOptions(YearArgs),
    /// Print a JSON Schema for the engine's output.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// JSON file holding the form's field values.
    #[arg(long, short, value_name = "FILE")]
    input: PathBuf,
    /// Step to validate (1-4); all steps when omitted.
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=4))]
    step: Option<u8>,
    /// Calendar year to validate against.
    #[arg(long)]
    year: Option<i32>,
    /// Output format for stdout.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Also write the JSON report to this path.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct YearArgs {
    /// Calendar year to derive options for.
    #[arg(long)]
    year: Option<i32>,
}

#[derive(Args, Debug)]
struct SchemaArgs {
    #[arg(value_enum, default_value_t = SchemaKind::Result)]
    kind: SchemaKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    Result,
    Report,
    IntakeOptions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.log)?;

    match cli.command {
        Command::Validate(args) => run_validate(args, &config),
        Command::IntakeOptions(args) => run_intake_options(args, &config),
        Command::Schema(args) => run_schema(args),
    }
}

fn run_validate(args: ValidateArgs, config: &CliConfig) -> Result<ExitCode, CliError> {
    let ValidateArgs {
        input,
        step,
        year,
        format,
        out,
    } = args;

    let run_id = Uuid::new_v4().to_string();
    let current_year = resolve_year(year, config);
    let format = format.unwrap_or(config.format);
    let timer = Instant::now();

    tracing::info!(
        event = "validation_started",
        run_id = %run_id,
        input = %input.display(),
        current_year
    );

    let contents = std::fs::read_to_string(&input)?;
    let form = FormState::from_json_str(&contents)?;
    let validator = StepValidator::new(current_year)?;

    let steps: Vec<ValidationResult> = match step {
        Some(number) => vec![validator.validate_step_number(number, &form)?],
        None => validator.validate_all(&form).steps,
    };

    for result in &steps {
        tracing::info!(
            event = "step_validated",
            run_id = %run_id,
            step = result.step.number(),
            valid = result.is_ok(),
            failures = result.error_count()
        );
    }

    let report = RunReport::new(run_id.clone(), current_year, &steps);

    match format {
        OutputFormat::Text => print!("{}", render_text(&steps)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = out {
        write_json_atomic(&path, &report)?;
        tracing::info!(event = "report_written", run_id = %run_id, path = %path.display());
    }

    let duration_ms = timer.elapsed().as_millis();
    tracing::info!(
        event = "validation_finished",
        run_id = %run_id,
        valid = report.valid,
        duration_ms = duration_ms
    );

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn run_intake_options(args: YearArgs, config: &CliConfig) -> Result<ExitCode, CliError> {
    let current_year = resolve_year(args.year, config);
    let validator = StepValidator::new(current_year)?;
    tracing::info!(
        event = "intake_options_listed",
        current_year,
        count = validator.intake_options().len()
    );
    println!(
        "{}",
        serde_json::to_string_pretty(validator.intake_options())?
    );
    Ok(ExitCode::SUCCESS)
}

fn run_schema(args: SchemaArgs) -> Result<ExitCode, CliError> {
    let schema = match args.kind {
        SchemaKind::Result => result_json_schema(),
        SchemaKind::Report => form_report_json_schema(),
        SchemaKind::IntakeOptions => intake_options_json_schema(),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(ExitCode::SUCCESS)
}

/// Flag, then config file, then the wall clock.
fn resolve_year(flag: Option<i32>, config: &CliConfig) -> i32 {
    flag.or(config.year).unwrap_or_else(current_calendar_year)
}
