// crates/locale-select-cli/src/main.rs
// ============================================================================
// Module: Locale Select CLI Entry Point
// Description: Command dispatcher for catalog inspection and locale selection.
// Purpose: Provide a localized CLI over the locale step and its catalog.
// Dependencies: clap, locale-select-catalog, locale-select-config, locale-select-core, tokio
// ============================================================================

//! ## Overview
//! The `locale-select` binary loads the reference catalog described by
//! `locale-select.toml`, drives a locale step through `--op` operations, and
//! prints JSON results. All user-facing strings are routed through the i18n
//! catalog. Catalog fetches run on the blocking pool and complete before any
//! toggle is applied.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use locale_select_catalog::FileSource;
use locale_select_catalog::HttpSource;
use locale_select_catalog::HttpSourceOptions;
use locale_select_catalog::SourceCatalogLoader;
use locale_select_cli::i18n::Locale;
use locale_select_cli::i18n::set_locale;
use locale_select_cli::ops::apply_op;
use locale_select_cli::ops::parse_ops;
use locale_select_cli::t;
use locale_select_config::AuditConfig;
use locale_select_config::AuditSinkKind;
use locale_select_config::CatalogConfig;
use locale_select_config::CatalogSourceConfig;
use locale_select_config::LocaleSelectConfig;
use locale_select_core::AuditSink;
use locale_select_core::CatalogLoader;
use locale_select_core::FileAuditSink;
use locale_select_core::LocaleStep;
use locale_select_core::LocaleSummary;
use locale_select_core::NoopAuditSink;
use locale_select_core::SelectionSnapshot;
use locale_select_core::StderrAuditSink;
use locale_select_core::StepStatus;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "LOCALE_SELECT_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "locale-select", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `LOCALE_SELECT_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Reference catalog utilities.
    Catalog {
        /// Selected catalog subcommand.
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Apply locale step operations and print the result.
    Select(SelectCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Load the reference catalog and print it as JSON.
    Show(CatalogShowCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Locale Select configuration file.
    Validate(ConfigValidateCommand),
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Shared config file selection.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Optional config file path (defaults to locale-select.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `catalog show`.
#[derive(Args, Debug)]
struct CatalogShowCommand {
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
}

/// Arguments for `select`.
#[derive(Args, Debug)]
struct SelectCommand {
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
    /// Operation to apply, in order (`region:KEY`, `language:CODE`, `locale:CODE`, `reset`, `back`).
    #[arg(long = "op", value_name = "OP")]
    ops: Vec<String>,
    /// Name of the project being defined.
    #[arg(long, value_name = "NAME")]
    project: Option<String>,
    /// Print the hand-off summary instead of the full snapshot.
    #[arg(long, action = ArgAction::SetTrue)]
    summary: bool,
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Config file selection.
    #[command(flatten)]
    config: ConfigArgs,
}

/// JSON document printed by `select`.
#[derive(Debug, Serialize)]
struct SelectOutput {
    /// Step lifecycle status.
    status: StepStatus,
    /// Whether the wizard may advance.
    can_proceed: bool,
    /// Full selection snapshot.
    snapshot: SelectionSnapshot,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Catalog {
            command: CatalogCommand::Show(command),
        } => command_catalog_show(&command).await,
        Commands::Select(command) => command_select(command).await,
        Commands::Config {
            command: ConfigCommand::Validate(command),
        } => command_config_validate(&command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Catalog Commands
// ============================================================================

/// Executes `catalog show`.
async fn command_catalog_show(command: &CatalogShowCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.config.as_deref())?;
    let mut step = LocaleStep::with_audit(None, build_audit_sink(&config.audit)?);
    load_catalog(&mut step, &config.catalog).await?;
    let catalog = step
        .catalog()
        .ok_or_else(|| CliError::new(t!("select.step_failed", error = "catalog missing")))?;
    write_json(catalog)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Select Command
// ============================================================================

/// Executes `select`.
async fn command_select(command: SelectCommand) -> CliResult<ExitCode> {
    let ops = parse_ops(&command.ops)
        .map_err(|(op, err)| CliError::new(t!("select.op_invalid", op = op, error = err)))?;
    let config = load_config(command.config.config.as_deref())?;
    let mut step = LocaleStep::with_audit(command.project, build_audit_sink(&config.audit)?);
    load_catalog(&mut step, &config.catalog).await?;
    for (raw, op) in command.ops.iter().zip(&ops) {
        apply_op(&mut step, op)
            .map_err(|err| CliError::new(t!("select.op_failed", op = raw, error = err)))?;
    }
    if command.summary {
        let summary: LocaleSummary = step
            .summary()
            .map_err(|err| CliError::new(t!("select.step_failed", error = err)))?;
        write_json(&summary)?;
    } else {
        let snapshot = step
            .snapshot()
            .map_err(|err| CliError::new(t!("select.step_failed", error = err)))?;
        write_json(&SelectOutput {
            status: step.status(),
            can_proceed: step.can_proceed(),
            snapshot,
        })?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes `config validate`.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.config.as_deref())?;
    let source = config
        .source_path
        .as_ref()
        .map_or_else(|| t!("config.source.defaults"), |path| path.display().to_string());
    write_stdout_line(&t!("config.validate.ok", source = source))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Wiring
// ============================================================================

/// Loads and validates configuration.
fn load_config(path: Option<&Path>) -> CliResult<LocaleSelectConfig> {
    LocaleSelectConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Builds the catalog loader described by configuration.
fn build_loader(config: &CatalogConfig) -> CliResult<Box<dyn CatalogLoader>> {
    match &config.source {
        CatalogSourceConfig::Http {
            url,
        } => {
            let options = HttpSourceOptions {
                timeout: Duration::from_millis(config.timeout_ms),
                max_bytes: config.max_response_bytes,
                allow_http: config.allow_http,
            };
            let source = HttpSource::new(url, options)
                .map_err(|err| CliError::new(t!("catalog.source_failed", error = err)))?;
            Ok(Box::new(SourceCatalogLoader::new(source)))
        }
        CatalogSourceConfig::File {
            path,
            root,
        } => {
            let mut source = FileSource::new(path).with_max_bytes(config.max_response_bytes);
            if let Some(root) = root {
                source = source.with_root(root);
            }
            Ok(Box::new(SourceCatalogLoader::new(source)))
        }
    }
}

/// Builds the audit sink described by configuration.
fn build_audit_sink(config: &AuditConfig) -> CliResult<Arc<dyn AuditSink>> {
    match (config.sink, &config.path) {
        (AuditSinkKind::File, Some(path)) => {
            let sink = FileAuditSink::new(Path::new(path)).map_err(|err| {
                CliError::new(t!("audit.open_failed", path = path, error = err))
            })?;
            Ok(Arc::new(sink))
        }
        (AuditSinkKind::Stderr, _) => Ok(Arc::new(StderrAuditSink)),
        (AuditSinkKind::None | AuditSinkKind::File, _) => Ok(Arc::new(NoopAuditSink)),
    }
}

/// Fetches the catalog on the blocking pool and completes the step's load.
///
/// The blocking HTTP client must not be built or dropped on an async worker,
/// so the loader lives entirely on the blocking pool.
async fn load_catalog(step: &mut LocaleStep, config: &CatalogConfig) -> CliResult<()> {
    let config = config.clone();
    let (source, result) = tokio::task::spawn_blocking(move || {
        let loader = build_loader(&config)?;
        Ok::<_, CliError>((loader.describe(), loader.load()))
    })
    .await
    .map_err(|err| CliError::new(t!("catalog.task_failed", error = err)))??;
    step.complete_load(&source, result)
        .map_err(|err| CliError::new(t!("catalog.load_failed", source = source, error = err)))
}

// ============================================================================
// SECTION: Locale Helpers
// ============================================================================

/// Resolves the output locale from the flag, then the environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Renders a value as pretty JSON.
fn render_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::new(t!("output.json_failed", error = err)))
}

/// Writes a value to stdout as pretty JSON.
fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let rendered = render_json(value)?;
    write_stdout_line(&rendered).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
