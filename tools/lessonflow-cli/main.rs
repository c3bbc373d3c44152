use clap::{Parser, Subcommand};
use lessonflow::prelude::*;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds, checks and inspects mentor lesson flow files
#[derive(Parser, Debug)]
#[command(name = "lessonflow", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report dangling links, unreachable steps and dead ends in lesson files
    Validate {
        /// Lesson JSON files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Exit with an error when any report is not clean
        #[arg(long)]
        strict: bool,
    },
    /// Print step counts and the completeness score of lesson files
    Stats {
        /// Lesson JSON files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Generate a draft lesson skeleton from a challenge JSON file
    Scaffold {
        /// Path to a challenge JSON file (title, timeEstimate, testedConcepts, ...)
        challenge: PathBuf,

        /// Technology the lesson belongs to, e.g. "React"
        #[arg(short, long)]
        technology: String,

        /// Programming language of the coding steps, e.g. "javascript"
        #[arg(short, long)]
        language: String,

        /// Suffix for per-language step ids. Defaults to the language
        #[arg(short, long)]
        suffix: Option<String>,

        /// Prerequisite concept to check before coding (repeatable)
        #[arg(short, long = "concept")]
        concepts: Vec<String>,

        /// Number of placeholder coding steps
        #[arg(long, default_value_t = 3)]
        coding_steps: usize,

        /// Write the lesson here instead of printing it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { files, strict } => run_validate(&files, strict),
        Commands::Stats { files } => run_stats(&files),
        Commands::Scaffold {
            challenge,
            technology,
            language,
            suffix,
            concepts,
            coding_steps,
            out,
        } => {
            let suffix = suffix.unwrap_or_else(|| language.clone());
            run_scaffold(
                &challenge,
                &technology,
                &language,
                &suffix,
                &concepts,
                coding_steps,
                out,
            )
        }
    }
}

fn run_validate(files: &[PathBuf], strict: bool) {
    let mut unclean = 0;
    for path in files {
        let lesson = load_lesson(path);
        let report = Validator::validate(&lesson.flow);
        if report.is_valid() {
            println!("{}: OK ({} steps)", path.display(), lesson.flow.len());
        } else {
            unclean += 1;
            warn!("{} has {} issue(s)", lesson.id, report.issue_count());
            println!("{}: WARNING {}", path.display(), report);
        }
    }

    println!("\n{} file(s) checked, {} with warnings", files.len(), unclean);
    if strict && unclean > 0 {
        exit_with_error(&format!("{} lesson(s) failed strict validation", unclean));
    }
}

fn run_stats(files: &[PathBuf]) {
    for path in files {
        let lesson = load_lesson(path);
        println!("\n{}:", path.display());
        println!("{}", LessonStats::from_lesson(&lesson));
    }
}

fn run_scaffold(
    challenge_path: &Path,
    technology: &str,
    language: &str,
    suffix: &str,
    concepts: &[String],
    coding_steps: usize,
    out: Option<PathBuf>,
) {
    let challenge_json = fs::read_to_string(challenge_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read challenge file '{}': {}",
            challenge_path.display(),
            e
        ))
    });
    let challenge: ChallengeSource = serde_json::from_str(&challenge_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse challenge JSON: {}", e)));

    let mut scaffold = LessonScaffold::new(challenge, suffix).with_language_name(language);
    for concept in concepts {
        scaffold = scaffold.with_concept(
            concept,
            &format!("Before we start, do you know what {} is in {}?", concept, language),
            &format!("[Explanation of {} in {}]", concept, language),
        );
    }
    for i in 1..=coding_steps {
        scaffold = scaffold.with_coding_step(&format!("[Coding step {}]", i), None);
    }

    let lesson = match scaffold.build_lesson(technology, language) {
        Ok(lesson) => lesson,
        Err(BuildError::DanglingReferences(refs)) => {
            for r in &refs {
                eprintln!("  dangling: {}", r);
            }
            exit_with_error(&format!("{} dangling reference(s)", refs.len()))
        }
        Err(e) => exit_with_error(&format!("Failed to build lesson: {}", e)),
    };

    let report = Validator::validate(&lesson.flow);
    if !report.is_valid() {
        warn!("Scaffolded lesson '{}': {}", lesson.id, report);
    }

    match out {
        Some(path) => {
            lesson
                .save(&path)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to write lesson: {}", e)));
            info!("Scaffolded '{}' with {} steps", lesson.id, lesson.flow.len());
            println!("Wrote {}", path.display());
        }
        None => {
            let json = lesson
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize lesson: {}", e)));
            println!("{}", json);
        }
    }
}

fn load_lesson(path: &Path) -> Lesson {
    Lesson::from_file(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load lesson '{}': {}",
            path.display(),
            e
        ))
    })
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
