//! # CLI Module
//!
//! Command-line front end for the scene tagger.
//!
//! ## Usage
//! ```bash
//! # Split media paths
//! scene-tagger parse-path "D:\Library\Studio\Show\clip.mp4"
//!
//! # Normalize provider matches and rank them against a 30:12 file
//! scene-tagger scenes --input matches.json --duration 1812
//!
//! # Build a performer submission, excluding some fields
//! scene-tagger performer --input performer.json --exclude gender,measurements
//!
//! # JSON output
//! scene-tagger scenes --input matches.json --output json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use scene_tagger::core::normalize::{RecordNormalizer, ScrapedPerformer, ScrapedScene};
use scene_tagger::core::ranking::DurationRanker;
use scene_tagger::core::{filter_performer, parse_path, NormalizedScene, PerformerSubmission};
use scene_tagger::error::{NormalizeError, Result, TaggerError};
use scene_tagger::TaggerConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Scene Tagger - shape provider matches for review
#[derive(Parser, Debug)]
#[command(name = "scene-tagger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split file paths into grouping folders, base name and extension
    ParsePath {
        /// Paths to parse
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Normalize provider scene matches and rank them by duration
    Scenes {
        /// JSON array of provider scenes (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Duration of the local file in seconds
        #[arg(short, long)]
        duration: Option<u32>,

        /// Close-match window in seconds (overrides config)
        #[arg(long)]
        window: Option<u32>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Normalize a provider performer and build its submission
    Performer {
        /// JSON provider performer (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Fields to leave out, added to the configured exclusions
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    scene_tagger::init_tracing(cli.verbose);

    let config = TaggerConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::ParsePath { paths, output } => run_parse_path(&paths, output),
        Commands::Scenes {
            input,
            duration,
            window,
            output,
        } => {
            let ranker = window
                .map(DurationRanker::new)
                .unwrap_or_else(|| config.ranker());
            run_scenes(input.as_deref(), duration, ranker, output)
        }
        Commands::Performer {
            input,
            exclude,
            output,
        } => {
            let mut excluded = config.excluded_performer_fields.clone();
            excluded.extend(exclude);
            run_performer(input.as_deref(), &excluded, output)
        }
    }
}

fn run_parse_path(paths: &[String], output: OutputFormat) -> Result<()> {
    let parsed = paths
        .iter()
        .map(|p| parse_path(p))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    match output {
        OutputFormat::Json => print_json(&parsed)?,
        OutputFormat::Pretty => {
            let term = Term::stdout();
            for (path, parsed) in paths.iter().zip(&parsed) {
                term.write_line(&format!("{}", style(path).bold())).ok();
                term.write_line(&format!(
                    "  {} {}",
                    style("folders:").dim(),
                    if parsed.directory_segments.is_empty() {
                        style("(none)").dim().to_string()
                    } else {
                        parsed.directory_segments.join(" / ")
                    }
                ))
                .ok();
                term.write_line(&format!(
                    "  {} {}",
                    style("file:").dim(),
                    style(&parsed.file_base_name).cyan()
                ))
                .ok();
                term.write_line(&format!(
                    "  {} {}",
                    style("ext:").dim(),
                    style(&parsed.extension).yellow()
                ))
                .ok();
            }
        }
    }

    Ok(())
}

fn run_scenes(
    input: Option<&Path>,
    duration: Option<u32>,
    ranker: DurationRanker,
    output: OutputFormat,
) -> Result<()> {
    let raw: Vec<Option<ScrapedScene>> = read_input(input)?;

    let normalizer = RecordNormalizer::new();
    let mut batch = normalizer.normalize_scenes_lenient(Some(raw.as_slice()));
    ranker.sort(&mut batch.scenes, duration);

    match output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "scenes": batch.scenes,
            "errors": batch.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        }))?,
        OutputFormat::Pretty => {
            print_pretty_scenes(&Term::stdout(), &batch.scenes, &batch.errors, duration, ranker)
        }
    }

    Ok(())
}

fn run_performer(input: Option<&Path>, excluded: &[String], output: OutputFormat) -> Result<()> {
    let raw: ScrapedPerformer = read_input(input)?;
    let performer = RecordNormalizer::new().normalize_performer(&raw)?;
    let submission = filter_performer(&performer, excluded);

    match output {
        OutputFormat::Json => print_json(&submission)?,
        OutputFormat::Pretty => print_pretty_submission(&Term::stdout(), &submission),
    }

    Ok(())
}

fn read_input<T: DeserializeOwned>(input: Option<&Path>) -> Result<T> {
    let (source_name, contents) = match input {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| TaggerError::Input {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            })?;
            (path.display().to_string(), contents)
        }
        None => {
            let mut contents = String::new();
            std::io::stdin()
                .read_to_string(&mut contents)
                .map_err(|e| TaggerError::Input {
                    source_name: "stdin".to_string(),
                    reason: e.to_string(),
                })?;
            ("stdin".to_string(), contents)
        }
    };

    serde_json::from_str(&contents).map_err(|e| TaggerError::Input {
        source_name,
        reason: e.to_string(),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn print_pretty_scenes(
    term: &Term,
    scenes: &[NormalizedScene],
    errors: &[NormalizeError],
    duration: Option<u32>,
    ranker: DurationRanker,
) {
    let heading = match duration.filter(|d| *d > 0) {
        Some(d) => format!("Scene Matches (target {})", format_duration(d)),
        None => "Scene Matches".to_string(),
    };
    term.write_line(&format!("{}", style(heading).bold().underlined()))
        .ok();
    term.write_line("").ok();

    if scenes.is_empty() {
        term.write_line(&format!("  {}", style("No scenes to show").dim()))
            .ok();
    }

    for (i, scene) in scenes.iter().enumerate() {
        let title = if scene.title.is_empty() {
            scene.stash_id.as_str()
        } else {
            scene.title.as_str()
        };

        let marker = match duration.filter(|d| *d > 0) {
            Some(target) => {
                let score = ranker.score(scene, target);
                if score.is_close() {
                    style(format!("★ {} close", score.close_matches))
                        .green()
                        .to_string()
                } else {
                    style(format!("±{}", format_duration(score.closest_difference)))
                        .yellow()
                        .to_string()
                }
            }
            None => String::new(),
        };

        term.write_line(&format!(
            "  {} {} {} {}",
            style(format!("{}.", i + 1)).bold(),
            style(title).cyan(),
            style(format!("[{}]", scene.studio.name)).dim(),
            marker
        ))
        .ok();

        let mut facts = Vec::new();
        if !scene.date.is_empty() {
            facts.push(scene.date.clone());
        }
        if scene.duration > 0 {
            facts.push(format_duration(scene.duration));
        }
        if !scene.fingerprints.is_empty() {
            facts.push(format!("{} fingerprints", scene.fingerprints.len()));
        }
        if !facts.is_empty() {
            term.write_line(&format!("     {}", style(facts.join(" · ")).dim()))
                .ok();
        }

        if !scene.performers.is_empty() {
            let names: Vec<&str> = scene.performers.iter().map(|p| p.name.as_str()).collect();
            term.write_line(&format!("     {} {}", style("performers:").dim(), names.join(", ")))
                .ok();
        }
        if !scene.tags.is_empty() {
            let names: Vec<&str> = scene.tags.iter().map(|t| t.name.as_str()).collect();
            term.write_line(&format!("     {} {}", style("tags:").dim(), names.join(", ")))
                .ok();
        }
    }

    if !errors.is_empty() {
        term.write_line("").ok();
        for error in errors {
            term.write_line(&format!("  {} {}", style("✗").red().bold(), error))
                .ok();
        }
    }
}

fn print_pretty_submission(term: &Term, submission: &PerformerSubmission) {
    term.write_line(&format!(
        "{} ({} fields)",
        style("Performer Submission").bold().underlined(),
        submission.field_count()
    ))
    .ok();

    let gender = submission.gender.map(|g| g.to_string());
    let rows: [(&str, Option<&str>); 13] = [
        ("name", submission.name.as_deref()),
        ("aliases", submission.aliases.as_deref()),
        ("gender", gender.as_deref()),
        ("birthdate", submission.birthdate.as_deref()),
        ("ethnicity", submission.ethnicity.as_deref()),
        ("country", submission.country.as_deref()),
        ("eye_color", submission.eye_color.as_deref()),
        ("height", submission.height.as_deref()),
        ("measurements", submission.measurements.as_deref()),
        ("fake_tits", submission.fake_tits.as_deref()),
        ("career_length", submission.career_length.as_deref()),
        ("tattoos", submission.tattoos.as_deref()),
        ("piercings", submission.piercings.as_deref()),
    ];

    for (label, value) in rows {
        let value = match value {
            Some(v) => style(v.to_string()).cyan(),
            None => style("-".to_string()).dim(),
        };
        term.write_line(&format!("  {:<14} {}", label, value)).ok();
    }
}

fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(75), "1:15");
        assert_eq!(format_duration(1812), "30:12");
    }

    #[test]
    fn formats_long_durations() {
        assert_eq!(format_duration(3661), "1:01:01");
    }

    #[test]
    fn cli_parses_exclusion_list() {
        let cli = Cli::try_parse_from([
            "scene-tagger",
            "performer",
            "--exclude",
            "gender,measurements",
        ])
        .unwrap();

        match cli.command {
            Commands::Performer { exclude, .. } => {
                assert_eq!(exclude, vec!["gender", "measurements"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn cli_parses_scene_options() {
        let cli = Cli::try_parse_from([
            "scene-tagger",
            "scenes",
            "--duration",
            "1812",
            "--output",
            "json",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Scenes {
                duration: Some(1812),
                output: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn read_input_reports_source() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        fs::write(temp.path(), "not json").unwrap();

        let err = read_input::<ScrapedPerformer>(Some(temp.path())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&temp.path().display().to_string()));
    }

    #[test]
    fn read_input_accepts_null_scenes() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        fs::write(temp.path(), r#"[null, {"remote_site_id": "s-1"}]"#).unwrap();

        let raw: Vec<Option<ScrapedScene>> = read_input(Some(temp.path())).unwrap();
        assert_eq!(raw.len(), 2);
        assert!(raw[0].is_none());
    }

    #[test]
    fn print_json_reports_encoding_failure() {
        // JSON object keys must be strings
        let mut unencodable = std::collections::HashMap::new();
        unencodable.insert((1u8, 2u8), 3u8);

        let err = print_json(&unencodable).unwrap_err();
        assert!(matches!(err, TaggerError::Output(_)));
        assert!(err.to_string().starts_with("Failed to encode output"));
    }
}
