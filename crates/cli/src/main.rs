//! histver CLI - compute a SemVer version from Git history

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::exit;

use anyhow::Context;
use histver::config::{parse_pre_release_identifiers, MajorMinor};
use histver::{calculate_version_with_fallback, Config, HistverError, Verbosity, Version, VersionPart};
use tracing::{debug, error, warn};
use tracing_subscriber::FmtSubscriber;

shadow_rs::shadow!(build);
const CLI_VERSION: &str = env!("HISTVER_CALCULATED_VERSION");

/// histver - Versioning from Git history
#[derive(Parser, Debug, Clone)]
#[command(name = "histver")]
#[command(about = "Calculate version numbers from Git history")]
#[command(version = CLI_VERSION)]
struct Args {
    /// Working directory to analyze (defaults to current directory)
    #[arg(default_value = ".")]
    working_directory: PathBuf,

    /// Tag prefix to filter tags (e.g., 'v' for 'v1.0.0')
    #[arg(short = 't', long = "tag-prefix")]
    tag_prefix: Option<String>,

    /// Auto-increment policy above release tags (major, minor, patch)
    #[arg(short = 'a', long = "auto-increment", value_parser = parse_version_part)]
    auto_increment: Option<VersionPart>,

    /// Default pre-release identifiers (e.g., 'alpha.0')
    #[arg(short = 'p', long = "default-pre-release-identifiers")]
    default_pre_release_identifiers: Option<String>,

    /// Deprecated alias producing '<phase>.0' when
    /// --default-pre-release-identifiers is not set
    #[arg(long = "default-pre-release-phase")]
    default_pre_release_phase: Option<String>,

    /// Minimum major.minor version constraint (e.g., '1.0')
    #[arg(short = 'm', long = "minimum-major-minor")]
    minimum_major_minor: Option<String>,

    /// Ignore height in version calculation
    #[arg(short = 'i', long = "ignore-height", action = ArgAction::SetTrue)]
    ignore_height: bool,

    /// Build metadata to append to versions
    #[arg(short = 'b', long = "build-metadata")]
    build_metadata: Option<String>,

    /// Skip all computation and emit this version
    #[arg(long = "version-override")]
    version_override: Option<String>,

    /// Verbosity level (error, warn, info, debug, trace)
    #[arg(short = 'v', long = "verbosity", value_parser = parse_verbosity)]
    verbosity: Option<Verbosity>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_version_part(s: &str) -> Result<VersionPart, HistverError> {
    s.parse::<VersionPart>()
}

fn parse_verbosity(s: &str) -> Result<Verbosity, HistverError> {
    s.parse::<Verbosity>()
}

fn main() {
    let long_ver: &'static str = Box::leak(long_version().into_boxed_str());

    let mut cmd = Args::command();
    cmd = cmd.version(CLI_VERSION).long_version(long_ver);
    let args = Args::from_arg_matches(&cmd.get_matches()).unwrap_or_else(|e| e.exit());

    // Flag wins over environment; diagnostics go to stderr so stdout carries
    // only the version line
    let verbosity = args
        .verbosity
        .clone()
        .or_else(|| {
            std::env::var("HISTVER_VERBOSITY")
                .ok()
                .and_then(|v| v.parse::<Verbosity>().ok())
        })
        .unwrap_or(Verbosity::Warn);

    let tracing_level = match verbosity {
        Verbosity::Error => tracing::Level::ERROR,
        Verbosity::Warn => tracing::Level::WARN,
        Verbosity::Info => tracing::Level::INFO,
        Verbosity::Debug => tracing::Level::DEBUG,
        Verbosity::Trace => tracing::Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match run(&args, verbosity) {
        Ok(()) => exit(0),
        Err(e) => {
            error!("{e:#}");
            exit(2);
        }
    }
}

fn run(args: &Args, verbosity: Verbosity) -> anyhow::Result<()> {
    let config = build_config(args, verbosity)?;
    debug!("Using configuration: {:?}", config);

    let result = calculate_version_with_fallback(&args.working_directory, &config)
        .context("Version calculation failed")?;

    if result.height > 0 && !config.ignore_height {
        debug!("Height: {}", result.height);
    }

    match args.format {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => {
            let build_metadata = if result.version.build_metadata.is_empty() {
                None
            } else {
                Some(result.version.build_metadata.join("."))
            };
            let payload = serde_json::json!({
                "version": result.version.to_string(),
                "major": result.version.major,
                "minor": result.version.minor,
                "patch": result.version.patch,
                "pre_release": result.version.pre_release,
                "build_metadata": build_metadata,
                "height": result.height,
                "is_from_tag": result.is_from_tag,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

fn build_config(args: &Args, verbosity: Verbosity) -> anyhow::Result<Config> {
    let mut config = Config {
        verbosity,
        ..Default::default()
    };

    // Environment variables can override defaults
    apply_env_vars(&mut config);

    // CLI arguments take precedence over environment variables
    config.work_dir = args.working_directory.clone();

    if let Some(prefix) = &args.tag_prefix {
        config.tag_prefix = prefix.clone();
    }

    if let Some(auto_inc) = &args.auto_increment {
        config.auto_increment = auto_inc.clone();
    }

    if let Some(identifiers) = &args.default_pre_release_identifiers {
        config.default_pre_release_identifiers = parse_pre_release_identifiers(identifiers)?;
    } else if let Some(phase) = &args.default_pre_release_phase {
        warn!("--default-pre-release-phase is deprecated; use --default-pre-release-identifiers");
        config.default_pre_release_identifiers =
            parse_pre_release_identifiers(&format!("{phase}.0"))?;
    }

    if let Some(min_mm) = &args.minimum_major_minor {
        config.minimum_major_minor = Some(MajorMinor::parse(min_mm)?);
    }

    if args.ignore_height {
        config.ignore_height = true;
    }

    if let Some(build_meta) = &args.build_metadata {
        // Fail fast on malformed metadata before touching the repository
        Version::new(0, 0, 0).add_build_metadata(build_meta)?;
        config.build_metadata = Some(build_meta.clone());
    }

    if let Some(version_override) = &args.version_override {
        config.version_override = Some(version_override.clone());
    }

    Ok(config)
}

fn apply_env_vars(config: &mut Config) {
    use std::env;

    if let Ok(tag_prefix) = env::var("HISTVER_TAGPREFIX") {
        if !tag_prefix.is_empty() {
            config.tag_prefix = tag_prefix;
        }
    }

    if let Ok(auto_inc) = env::var("HISTVER_AUTOINCREMENT") {
        if let Ok(part) = auto_inc.parse::<VersionPart>() {
            config.auto_increment = part;
        }
    }

    if let Ok(identifiers) = env::var("HISTVER_DEFAULTPRERELEASEIDENTIFIERS") {
        if !identifiers.is_empty() {
            if let Ok(list) = parse_pre_release_identifiers(&identifiers) {
                config.default_pre_release_identifiers = list;
            }
        }
    } else if let Ok(phase) = env::var("HISTVER_DEFAULTPRERELEASEPHASE") {
        if !phase.is_empty() {
            if let Ok(list) = parse_pre_release_identifiers(&format!("{phase}.0")) {
                config.default_pre_release_identifiers = list;
            }
        }
    }

    if let Ok(min_mm) = env::var("HISTVER_MINIMUMMAJORMINOR") {
        if let Ok(major_minor) = MajorMinor::parse(&min_mm) {
            config.minimum_major_minor = Some(major_minor);
        }
    }

    if let Ok(ignore_height) = env::var("HISTVER_IGNOREHEIGHT") {
        if let Ok(value) = ignore_height.parse::<bool>() {
            config.ignore_height = value;
        }
    }

    if let Ok(build_meta) = env::var("HISTVER_BUILDMETADATA") {
        if !build_meta.is_empty() {
            config.build_metadata = Some(build_meta);
        }
    }

    if let Ok(version_override) = env::var("HISTVER_VERSIONOVERRIDE") {
        if !version_override.is_empty() {
            config.version_override = Some(version_override);
        }
    }
}

fn long_version() -> String {
    format!(
        "{version}\ncommit: {commit} ({date})\nbuild: {build}\nrustc: {rustc}",
        version = CLI_VERSION,
        commit = build::SHORT_COMMIT,
        date = build::COMMIT_DATE,
        build = build::BUILD_TIME,
        rustc = build::RUST_VERSION,
    )
}
