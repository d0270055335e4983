use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

use techform::{
    DocumentFormat, OutputDestination, OutputOptions, RawPayload, SchemaRules, TechFormUI,
    UiOptions, emit, parse_prefill_str,
};

#[derive(Debug, Parser)]
#[command(
    name = "techform",
    version,
    about = "Sign-up form with a dynamic technology list, in the terminal"
)]
struct Cli {
    /// Title shown at the top of the form
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Required email domain suffix
    #[arg(long = "email-suffix", value_name = "SUFFIX")]
    email_suffix: Option<String>,

    /// Minimum password length
    #[arg(long = "min-password", value_name = "N")]
    min_password: Option<usize>,

    /// Minimum number of technologies
    #[arg(long = "min-techs", value_name = "N")]
    min_techs: Option<usize>,

    /// Document with starting values for the form
    #[arg(long = "prefill", value_name = "PATH")]
    prefill: Option<PathBuf>,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Output format; inferred from the output file extension when omitted
    #[arg(long = "format", value_name = "FORMAT")]
    format: Option<DocumentFormat>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Quit immediately even with edits that were never accepted
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Hide the key help line under the form
    #[arg(long = "no-help")]
    no_help: bool,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let mut problems = Problems::default();
    let prefill = cli
        .prefill
        .as_deref()
        .and_then(|path| problems.keep("prefill", load_prefill(path)));
    let output = output_options(&cli, &mut problems);
    if !cli.force {
        refuse_existing_files(&output, &mut problems);
    }
    problems.finish()?;

    let mut ui = TechFormUI::new(build_rules(&cli)).with_options(ui_options(&cli));
    if let Some(prefill) = prefill {
        ui = ui.with_prefill(prefill);
    }

    let payload = ui.run().map_err(Report::msg)?;
    tracing::debug!(techs = payload.techs.len(), "emitting accepted payload");
    emit(&payload, &output).map_err(Report::msg)?;

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))
}

fn ui_options(cli: &Cli) -> UiOptions {
    let mut options = UiOptions::default()
        .with_help(!cli.no_help)
        .with_confirm_exit(!cli.no_confirm_exit);
    if let Some(title) = cli.title.as_ref() {
        options = options.with_title(title.clone());
    }
    options
}

fn build_rules(cli: &Cli) -> SchemaRules {
    let mut rules = SchemaRules::default();
    if let Some(suffix) = cli.email_suffix.as_ref() {
        rules = rules.with_email_suffix(suffix.clone());
    }
    if let Some(len) = cli.min_password {
        rules = rules.with_min_password_len(len);
    }
    if let Some(count) = cli.min_techs {
        rules = rules.with_min_techs(count);
    }
    rules
}

fn load_prefill(path: &Path) -> Result<RawPayload> {
    let format = match format_for_path(path) {
        Ok(format) => format,
        Err(FormatIssue::Unknown) => DocumentFormat::Json,
        Err(issue) => return Err(eyre!("{}: {issue}", path.display())),
    };
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read file {}", path.display()))?;
    parse_prefill_str(&contents, format).map_err(|err| eyre!("{err:#}"))
}

/// Everything wrong with the arguments, reported together before the form opens.
#[derive(Default)]
struct Problems {
    messages: Vec<String>,
}

impl Problems {
    fn push(&mut self, scope: &str, message: impl Into<String>) {
        self.messages.push(format!("{scope}: {}", message.into()));
    }

    fn keep<T>(&mut self, scope: &str, result: Result<T>) -> Option<T> {
        result
            .map_err(|err| self.push(scope, err.to_string()))
            .ok()
    }

    fn finish(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("cannot start the form:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

fn output_options(cli: &Cli, problems: &mut Problems) -> OutputOptions {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        match raw.trim() {
            "" => problems.push("output", "destination cannot be empty"),
            "-" => destinations.push(OutputDestination::Stdout),
            path => destinations.push(OutputDestination::file(path)),
        }
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    let format = cli
        .format
        .or_else(|| infer_output_format(&destinations, problems))
        .unwrap_or(DocumentFormat::Json);

    OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations)
}

/// Format shared by every output file, if their extensions agree.
fn infer_output_format(
    destinations: &[OutputDestination],
    problems: &mut Problems,
) -> Option<DocumentFormat> {
    let mut detected: Option<DocumentFormat> = None;
    for path in destinations.iter().filter_map(file_path) {
        match format_for_path(path) {
            Ok(format) => match detected {
                Some(existing) if existing != format => problems.push(
                    "output",
                    format!(
                        "{} uses {format} but other files use {existing}; align extensions or pass --format",
                        path.display()
                    ),
                ),
                Some(_) => {}
                None => detected = Some(format),
            },
            Err(issue) => problems.push("output", format!("{}: {issue}", path.display())),
        }
    }
    detected
}

fn refuse_existing_files(options: &OutputOptions, problems: &mut Problems) {
    for path in options.destinations.iter().filter_map(file_path) {
        if path.exists() {
            problems.push(
                "output",
                format!("{} already exists (pass --force to overwrite)", path.display()),
            );
        }
    }
}

fn file_path(destination: &OutputDestination) -> Option<&Path> {
    match destination {
        OutputDestination::File(path) => Some(path.as_path()),
        OutputDestination::Stdout => None,
    }
}

#[derive(Debug, PartialEq, Eq)]
enum FormatIssue {
    Unknown,
    Disabled(&'static str),
}

impl std::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatIssue::Unknown => {
                f.write_str("cannot infer format; use .json/.yaml/.toml or pass --format")
            }
            FormatIssue::Disabled(feature) => {
                write!(f, "this build was compiled without the '{feature}' feature")
            }
        }
    }
}

fn format_for_path(path: &Path) -> std::result::Result<DocumentFormat, FormatIssue> {
    if let Some(format) = DocumentFormat::from_path(path) {
        return Ok(format);
    }
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("yaml" | "yml") => Err(FormatIssue::Disabled("yaml")),
        Some("toml") => Err(FormatIssue::Disabled("toml")),
        _ => Err(FormatIssue::Unknown),
    }
}
