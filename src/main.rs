// SPDX-License-Identifier: MPL-2.0
use nalam_i18n::app::{Engine, LoadPhase};
use nalam_i18n::application::port::PreferenceStore;
use nalam_i18n::config::{self, Settings};
use nalam_i18n::domain::Locale;
use nalam_i18n::error::Result;
use nalam_i18n::infrastructure::{markup, ConfigStore, Document, FileSource, MemoryStore};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Localize a static XHTML page.

USAGE:
  nalam-i18n [OPTIONS] PAGE.xhtml

OPTIONS:
  --lang CODE         Switch to CODE (en, ta) after the initial pass
  --toggle            Switch to the other locale after the initial pass
  --table PATH        Translation table (default: translations/translations.json next to the page)
  --config-dir DIR    Directory holding settings.toml
  --ephemeral         Keep the language preference in memory only
  --output PATH       Write the result to PATH instead of stdout
  -h, --help          Print this help
";

struct Args {
    lang: Option<String>,
    toggle: bool,
    table: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    ephemeral: bool,
    output: Option<PathBuf>,
    page: PathBuf,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        toggle: args.contains("--toggle"),
        table: args.opt_value_from_os_str("--table", parse_path)?,
        config_dir: args.opt_value_from_os_str("--config-dir", parse_path)?,
        ephemeral: args.contains("--ephemeral"),
        output: args.opt_value_from_os_str("--output", parse_path)?,
        page: args.free_from_os_str(parse_path)?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {remaining:?}");
    }
    Ok(Some(parsed))
}

fn parse_path(value: &OsStr) -> std::result::Result<PathBuf, &'static str> {
    Ok(PathBuf::from(value))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let source_text = tokio::fs::read_to_string(&args.page).await?;
    let document = markup::parse(&source_text)?;
    let settings = config::load_with_override(args.config_dir.as_deref())?.engine;
    let source = table_source(&args, &settings);

    let document = if args.ephemeral {
        localize(document, MemoryStore::new(), settings, &source, &args).await
    } else {
        match ConfigStore::in_config_dir(args.config_dir.clone()) {
            Some(store) => localize(document, store, settings, &source, &args).await,
            None => {
                tracing::warn!("no config directory available, preference will not persist");
                localize(document, MemoryStore::new(), settings, &source, &args).await
            }
        }
    };

    let rendered = markup::render(&document);
    match &args.output {
        Some(path) => tokio::fs::write(path, rendered).await?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn table_source(args: &Args, settings: &Settings) -> FileSource {
    if let Some(table) = &args.table {
        return FileSource::new(table.clone());
    }
    let base = args.page.parent().unwrap_or_else(|| Path::new("."));
    FileSource::colocated(base, settings)
}

async fn localize<P: PreferenceStore>(
    document: Document,
    preferences: P,
    settings: Settings,
    source: &FileSource,
    args: &Args,
) -> Document {
    let mut engine = Engine::new(document, preferences, settings);
    engine.initialize(source);

    // Requests are recorded even without a table, so the next run honours them.
    let loaded = engine.run_until_loaded().await == LoadPhase::Loaded;

    if let Some(code) = &args.lang {
        match code.parse::<Locale>() {
            Ok(locale) => {
                if !engine.set_locale(locale) && loaded {
                    eprintln!("Warning: no translations for language {code:?}");
                }
            }
            Err(error) => eprintln!("Warning: {error}"),
        }
    }
    if args.toggle {
        engine.toggle();
    }
    if !loaded {
        eprintln!("Warning: translations unavailable, page left untranslated");
    }

    engine.into_parts().0
}
