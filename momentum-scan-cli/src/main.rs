//! Momentum Scan CLI Application
//!
//! This is the command-line interface for the momentum scan table generator.
//! It uses the momentum-scan library and adds:
//! - Argument parsing and an optional config.toml
//! - Output path selection (plain file or dated site page)
//! - Manifest refresh for published scans
//! - PNG capture through headless Chrome
//! - Git commit/push of the published site

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use momentum_scan::{RenderConfig, ScanTable, SortOrder, Theme};
use std::fs;
use std::path::{Path, PathBuf};

mod config;
mod publish;
mod screenshot;

use config::AppConfig;
use publish::PublishTarget;

/// Momentum Scan - Convert stock screener CSV exports to shareable HTML/PNG tables
#[derive(Parser, Debug)]
#[command(name = "momentum-scan")]
#[command(about = "Convert stock screener CSV to HTML/PNG tables", long_about = None)]
#[command(version)]
#[command(after_help = "Examples:
  momentum-scan stocks.csv
  momentum-scan stocks.csv --sort BIS --order desc
  momentum-scan stocks.csv --png --dark
  momentum-scan stocks.csv --publish --name semis --push")]
struct Args {
    /// Path to the screener CSV export
    #[arg(value_name = "CSV_FILE")]
    csv_file: PathBuf,

    /// Column to sort by (export field or header label, e.g. RS, DCR)
    #[arg(long, default_value = "BIS")]
    sort: String,

    /// Sort order (asc or desc)
    #[arg(long, default_value_t = SortOrder::Desc)]
    order: SortOrder,

    /// Output filename without extension
    #[arg(long, default_value = "momentum_scan")]
    output: PathBuf,

    /// Also generate a PNG image of the table
    #[arg(long)]
    png: bool,

    /// Use the dark theme
    #[arg(long)]
    dark: bool,

    /// Table title
    #[arg(long)]
    title: Option<String>,

    /// Subtitle below the title
    #[arg(long)]
    subtitle: Option<String>,

    /// Emoji before the title (empty string for none)
    #[arg(long)]
    emoji: Option<String>,

    /// Publish to the site folder under a dated name
    #[arg(long)]
    publish: bool,

    /// Publish date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Scan name for several scans per day (e.g. semis, growth)
    #[arg(long)]
    name: Option<String>,

    /// Git add, commit and push after publishing
    #[arg(long)]
    push: bool,

    /// Site root used by --publish (overrides config.toml)
    #[arg(long, value_name = "DIR")]
    site_dir: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Config-file render settings with command-line overrides applied
    fn render_config(&self, base: &RenderConfig) -> RenderConfig {
        let mut config = base.clone();
        if let Some(title) = &self.title {
            config = config.with_title(title.clone());
        }
        if let Some(subtitle) = &self.subtitle {
            config = config.with_subtitle(subtitle.clone());
        }
        if let Some(emoji) = &self.emoji {
            config = config.with_emoji(emoji.clone());
        }
        if self.dark {
            config = config.with_theme(Theme::Dark);
        }
        config
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("Momentum Scan CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using momentum-scan library v{}", momentum_scan::VERSION);

    ensure_input(&args)?;

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    run(&args, &app_config)
}

/// The CSV export must exist before anything is loaded or written
fn ensure_input(args: &Args) -> Result<()> {
    if !args.csv_file.exists() {
        anyhow::bail!("File not found: {}", args.csv_file.display());
    }
    Ok(())
}

fn run(args: &Args, app_config: &AppConfig) -> Result<()> {
    let mut table = ScanTable::load(&args.csv_file)
        .with_context(|| format!("Failed to load {}", args.csv_file.display()))?;
    table.sort_by(&args.sort, args.order);

    let html = table.render_html(&args.render_config(&app_config.render));

    let mut publish_config = app_config.publish.clone();
    if let Some(site_dir) = &args.site_dir {
        publish_config.site_dir = site_dir.clone();
    }

    let target = if args.publish {
        let date = args.date.unwrap_or_else(|| Local::now().date_naive());
        Some(PublishTarget::new(
            &publish_config.site_dir,
            date,
            args.name.clone(),
        )?)
    } else {
        None
    };

    let html_path = match &target {
        Some(target) => target.write_html(&html)?,
        None => {
            let path = args.output.with_extension("html");
            fs::write(&path, &html).with_context(|| format!("Failed to write {:?}", path))?;
            path
        }
    };
    log::info!("HTML saved: {}", html_path.display());

    if let Some(target) = &target {
        target.refresh_manifest()?;
        log::info!(
            "Published! View at: {}/index.html?date={}",
            target.site_dir.display(),
            target.scan_id()
        );
    }

    if args.png {
        let png_path = match &target {
            Some(target) => target.png_path(),
            None => args.output.with_extension("png"),
        };
        generate_png(&html_path, &png_path, app_config);
    }

    if args.push {
        match &target {
            None => log::warn!("--push requires --publish, skipping git push"),
            Some(target) => {
                let repo_dir = publish_config.repo_dir();
                log::info!("Pushing to remote from {:?}...", repo_dir);
                match publish::git_push(&repo_dir, target.date) {
                    Ok(()) => log::info!("Pushed! Site will update shortly."),
                    Err(e) => log::error!("Git error: {}", e),
                }
            }
        }
    }

    if target.is_none() {
        log::info!("Done! Open {} in your browser.", html_path.display());
    }

    Ok(())
}

/// Screenshot failures are reported and otherwise ignored
fn generate_png(html_path: &Path, png_path: &Path, app_config: &AppConfig) {
    log::info!("Generating PNG...");
    match screenshot::capture(html_path, png_path, &app_config.screenshot) {
        Ok(()) => log::info!("PNG saved: {}", png_path.display()),
        Err(e) => log::warn!("PNG generation failed: {:#}", e),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn argv(parts: &[OsString]) -> Vec<OsString> {
        parts.to_vec()
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["momentum-scan", "stocks.csv"]).unwrap();
        assert_eq!(args.sort, "BIS");
        assert_eq!(args.order, SortOrder::Desc);
        assert_eq!(args.output, PathBuf::from("momentum_scan"));
        assert!(!args.png && !args.dark && !args.publish && !args.push);
    }

    #[test]
    fn test_args_publish_options() {
        let args = Args::try_parse_from([
            "momentum-scan",
            "stocks.csv",
            "--order",
            "asc",
            "--publish",
            "--date",
            "2024-01-05",
            "--name",
            "semis",
        ])
        .unwrap();
        assert_eq!(args.order, SortOrder::Asc);
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(args.name.as_deref(), Some("semis"));
    }

    #[test]
    fn test_args_reject_bad_values() {
        assert!(Args::try_parse_from(["momentum-scan", "x.csv", "--order", "up"]).is_err());
        assert!(Args::try_parse_from(["momentum-scan", "x.csv", "--date", "01/05/2024"]).is_err());
        assert!(Args::try_parse_from(["momentum-scan"]).is_err());
    }

    #[test]
    fn test_missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.csv");
        let args = Args::try_parse_from(argv(&[
            "momentum-scan".into(),
            missing.clone().into_os_string(),
        ]))
        .unwrap();

        let err = ensure_input(&args).unwrap_err();
        assert_eq!(err.to_string(), format!("File not found: {}", missing.display()));
    }

    #[test]
    fn test_existing_input_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("stocks.csv");
        fs::write(&csv, "Ticker\n").unwrap();
        let args = Args::try_parse_from(argv(&["momentum-scan".into(), csv.into_os_string()]))
            .unwrap();

        assert!(ensure_input(&args).is_ok());
    }

    #[test]
    fn test_run_rejects_name_outside_scans_dir() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("stocks.csv");
        fs::write(&csv, "Ticker,BIS\nAAA,1.2\n").unwrap();
        let site = dir.path().join("site");

        let args = Args::try_parse_from(argv(&[
            "momentum-scan".into(),
            csv.into_os_string(),
            "--publish".into(),
            "--date".into(),
            "2024-01-05".into(),
            "--name".into(),
            "../escape".into(),
            "--site-dir".into(),
            site.clone().into_os_string(),
        ]))
        .unwrap();

        assert!(run(&args, &AppConfig::default()).is_err());
        assert!(!site.exists());
    }

    #[test]
    fn test_render_config_overrides() {
        let base = RenderConfig::new().with_title("From File").with_subtitle("keep");
        let args = Args::try_parse_from([
            "momentum-scan",
            "x.csv",
            "--title",
            "From Flag",
            "--emoji",
            "",
            "--dark",
        ])
        .unwrap();

        let config = args.render_config(&base);
        assert_eq!(config.title, "From Flag");
        assert_eq!(config.subtitle, "keep");
        assert!(config.emoji.is_empty());
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn test_run_writes_plain_output() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("stocks.csv");
        fs::write(&csv, "Ticker,BIS\nAAA,1.2\n").unwrap();
        let output = dir.path().join("out");

        let args = Args::try_parse_from(argv(&[
            "momentum-scan".into(),
            csv.into_os_string(),
            "--output".into(),
            output.into_os_string(),
            "--push".into(),
        ]))
        .unwrap();
        run(&args, &AppConfig::default()).unwrap();

        let html = fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(html.contains(r#"<td class="ticker">AAA</td>"#));
    }

    #[test]
    fn test_run_publishes_and_refreshes_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("stocks.csv");
        fs::write(&csv, "Ticker,BIS\nAAA,1.2\n").unwrap();
        let site = dir.path().join("site");

        let args = Args::try_parse_from(argv(&[
            "momentum-scan".into(),
            csv.into_os_string(),
            "--publish".into(),
            "--date".into(),
            "2024-01-05".into(),
            "--name".into(),
            "semis".into(),
            "--site-dir".into(),
            site.clone().into_os_string(),
        ]))
        .unwrap();
        run(&args, &AppConfig::default()).unwrap();

        assert!(site.join("scans/2024-01-05-semis.html").exists());
        let manifest = fs::read_to_string(site.join("scans/manifest.js")).unwrap();
        assert!(manifest.contains(r#""id": "2024-01-05-semis""#));
    }
}
