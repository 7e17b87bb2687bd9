//! review-feed - Entry Point
//!
//! Loads a reviews document, lays every row out at one width and prints the
//! resulting heights. Mirrors what a list view asks the core for.

use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use review_feed::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use review_feed::layout::{FixedAdvanceMeasurer, RowLayout, TextMeasurer};
use review_feed::model::{AppError, RowContent, RowError};
use review_feed::source::JsonFileSource;
use review_feed::state::{LoadPhase, ReviewsController, RowAdapter};
use review_feed::style::Theme;

/// review-feed - lay out a feed of user reviews
#[derive(Parser, Debug)]
#[command(name = "review-feed")]
#[command(version)]
#[command(about = "Compute review feed row geometry for a JSON reviews document")]
pub struct Args {
    /// Path to a JSON reviews document (envelope or bare array)
    pub file: PathBuf,

    /// Row width in points
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Body lines shown before a review is cut (0 = never cut)
    #[arg(short, long)]
    pub lines: Option<u32>,

    /// Expand the review at this row index (repeatable)
    #[arg(short, long = "expand", value_name = "INDEX")]
    pub expand: Vec<usize>,

    /// Path to log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged)?;
        apply_cli_overrides(with_env, args.width, args.lines, args.log_file.clone())
    };

    review_feed::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let report = run(&args, &config)?;
    print!("{}", report);

    Ok(())
}

/// Load, expand and lay out; returns the printable report.
fn run(args: &Args, config: &ResolvedConfig) -> Result<String, AppError> {
    let theme = Theme::default();
    let layout = RowLayout::new(
        FixedAdvanceMeasurer::default(),
        config.metrics,
        &theme.affordance(),
    );
    let mut adapter = RowAdapter::with_cache(layout, config.layout_cache_capacity);
    let mut controller = ReviewsController::new(theme).with_line_limit(config.truncation_lines);

    let source = JsonFileSource::new(&args.file);
    futures::executor::block_on(controller.refresh(&source));

    if let LoadPhase::Failed(failure) = controller.phase() {
        return Err(AppError::Load(failure.clone()));
    }

    expand_rows(&mut adapter, &mut controller, &args.expand, config.width)?;

    report(&mut adapter, &controller, config.width)
}

/// Tap the affordance of each row in `indices` that draws one at `width`.
///
/// Returns the indices the controller reported as changed.
fn expand_rows<M: TextMeasurer>(
    adapter: &mut RowAdapter<M>,
    controller: &mut ReviewsController,
    indices: &[usize],
    width: f64,
) -> Result<Vec<usize>, AppError> {
    let mut expanded = Vec::new();

    for &index in indices {
        if !adapter.geometry(controller, index, width)?.needs_affordance() {
            info!(index, "Row shows no affordance, not expanding");
            continue;
        }
        match adapter
            .tap_affordance(controller, index)
            .map_err(RowError::from)?
        {
            Some(changed) => {
                info!(index = changed, "Expanded review");
                expanded.push(changed);
            }
            None => info!(index, "Row was not expandable"),
        }
    }

    Ok(expanded)
}

/// One line per row plus the total content height.
fn report<M: TextMeasurer>(
    adapter: &mut RowAdapter<M>,
    controller: &ReviewsController,
    width: f64,
) -> Result<String, AppError> {
    let mut out = String::new();

    for index in 0..controller.row_count() {
        let geometry = adapter.geometry(controller, index, width)?;
        let kind = match controller.row(index).map_err(RowError::from)? {
            RowContent::Review(_) => "review",
            RowContent::Summary(_) => "summary",
        };
        let more = if geometry.needs_affordance() {
            "  [show more]"
        } else {
            ""
        };
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:>4}  {:<7}  {:>8.1}{}",
            index,
            kind,
            geometry.height(),
            more
        );
    }

    let total = adapter.content_height(controller, width)?;
    let _ = writeln!(out, "total  {:.1}", total);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    #[test]
    fn test_help_does_not_error() {
        // Help returns Err with DisplayHelp, which is success
        let result = Args::try_parse_from(["review-feed", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["review-feed", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_file_is_required() {
        let result = Args::try_parse_from(["review-feed"]);
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_file_only_defaults() {
        let args = Args::parse_from(["review-feed", "reviews.json"]);
        assert_eq!(args.file, PathBuf::from("reviews.json"));
        assert_eq!(args.width, None);
        assert_eq!(args.lines, None);
        assert!(args.expand.is_empty());
        assert_eq!(args.log_file, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_width_flag() {
        let args = Args::parse_from(["review-feed", "r.json", "--width", "375"]);
        assert_eq!(args.width, Some(375.0));
    }

    #[test]
    fn test_expand_is_repeatable() {
        let args = Args::parse_from(["review-feed", "r.json", "-e", "0", "--expand", "3"]);
        assert_eq!(args.expand, vec![0, 3]);
    }

    #[test]
    fn test_expand_rejects_negative() {
        let result = Args::try_parse_from(["review-feed", "r.json", "--expand", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_lines_and_config_flags() {
        let args = Args::parse_from([
            "review-feed",
            "r.json",
            "-l",
            "0",
            "--config",
            "/custom/config.toml",
            "--log-file",
            "/tmp/feed.log",
        ]);
        assert_eq!(args.lines, Some(0));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/feed.log")));
    }

    fn write_reviews(name: &str, texts: &[&str]) -> PathBuf {
        let items: Vec<String> = texts
            .iter()
            .map(|text| {
                format!(
                    r#"{{"firstName":"Jane","lastName":"Doe","rating":4,"text":"{}","created":"today"}}"#,
                    text
                )
            })
            .collect();
        let path = std::env::temp_dir().join(name);
        fs::write(&path, format!(r#"{{"items":[{}]}}"#, items.join(","))).unwrap();
        path
    }

    #[test]
    fn run_reports_every_row_and_total() {
        let long = "word ".repeat(100);
        let path = write_reviews("review_feed_main_report.json", &["Short", long.trim()]);
        let args = Args::parse_from(["review-feed", path.to_str().unwrap()]);

        let report = run(&args, &ResolvedConfig::default()).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4, "got: {}", report);
        assert!(lines[0].contains("review") && !lines[0].contains("[show more]"));
        assert!(lines[1].contains("[show more]"), "got: {}", report);
        assert!(lines[2].contains("summary"));
        assert!(lines[3].starts_with("total"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn run_expands_requested_rows() {
        let long = "word ".repeat(100);
        let path = write_reviews("review_feed_main_expand.json", &[long.trim()]);
        let args = Args::parse_from(["review-feed", path.to_str().unwrap(), "--expand", "0"]);

        let report = run(&args, &ResolvedConfig::default()).unwrap();

        assert!(!report.contains("[show more]"), "got: {}", report);

        fs::remove_file(path).ok();
    }

    #[test]
    fn expand_skips_rows_without_affordance() {
        let long = "word ".repeat(100);
        let path = write_reviews("review_feed_main_skip.json", &["Short", long.trim()]);
        let config = ResolvedConfig::default();
        let theme = Theme::default();
        let layout = RowLayout::new(
            FixedAdvanceMeasurer::default(),
            config.metrics,
            &theme.affordance(),
        );
        let mut adapter = RowAdapter::new(layout);
        let mut controller = ReviewsController::new(theme);
        futures::executor::block_on(controller.refresh(&JsonFileSource::new(&path)));

        let expanded =
            expand_rows(&mut adapter, &mut controller, &[0, 1, 2], config.width).unwrap();

        assert_eq!(expanded, vec![1]);
        let short_id = controller.row(0).unwrap().id();
        assert!(!controller.is_expanded(short_id));

        fs::remove_file(path).ok();
    }

    #[test]
    fn run_rejects_out_of_range_expand() {
        let path = write_reviews("review_feed_main_range.json", &["Short"]);
        let args = Args::parse_from(["review-feed", path.to_str().unwrap(), "--expand", "9"]);

        let result = run(&args, &ResolvedConfig::default());

        assert!(matches!(result, Err(AppError::Row(RowError::Index(_)))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn run_missing_file_is_load_failure() {
        let args = Args::parse_from(["review-feed", "/nonexistent/reviews.json"]);

        let result = run(&args, &ResolvedConfig::default());

        match result {
            Err(AppError::Load(failure)) => {
                assert!(failure.message.contains("/nonexistent/reviews.json"))
            }
            other => panic!("Expected load failure, got {:?}", other),
        }
    }
}
