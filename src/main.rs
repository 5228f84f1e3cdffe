// Mashair CLI: score one text, batch-score a directory of documents, or
// compare the keyword verdict against an external classifier pipeline.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use walkdir::WalkDir;

use mashair::input::{is_supported, read_document};
use mashair::{Lexicon, PipelineClient, Sentiment, SentimentLabel};

#[derive(Parser)]
#[command(name = "mashair", about = "Keyword sentiment scoring for Arabic/derja text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single text
    Score {
        text: String,
        /// Custom lexicon JSON file: {"positive": [...], "negative": [...]}
        #[arg(short, long)]
        lexicon: Option<PathBuf>,
        /// External pipeline command (or MASHAIR_PIPELINE). When set, the
        /// pipeline verdict is used, degrading to neutral on failure.
        #[arg(short, long)]
        pipeline: Option<String>,
        /// Print the verdict as a single JSON line
        #[arg(long)]
        json: bool,
    },
    /// Score every supported file under a directory
    Batch {
        #[arg(short, long)]
        dir: PathBuf,
        /// Output file for the JSON records; stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(short, long)]
        lexicon: Option<PathBuf>,
    },
    /// Show the keyword verdict next to the pipeline's competing one
    Compare {
        text: String,
        /// External pipeline command (or MASHAIR_PIPELINE)
        #[arg(short, long)]
        pipeline: Option<String>,
        #[arg(short, long)]
        lexicon: Option<PathBuf>,
    },
}

#[derive(Serialize, Debug)]
struct ScoredDoc {
    path: String,
    label: SentimentLabel,
    score: f32,
}

fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(p) => Lexicon::from_json_file(p),
        None => Ok(Lexicon::default()),
    }
}

// Flag first, then the MASHAIR_PIPELINE environment variable.
fn resolve_pipeline(flag: Option<String>) -> Result<Option<PipelineClient>> {
    let command = flag.or_else(|| std::env::var("MASHAIR_PIPELINE").ok());
    match command {
        Some(c) => Ok(Some(PipelineClient::from_command_line(&c)?)),
        None => Ok(None),
    }
}

fn label_color(label: SentimentLabel) -> Color {
    match label {
        SentimentLabel::Positive => Color::Green,
        SentimentLabel::Negative => Color::Red,
        SentimentLabel::Neutral => Color::Yellow,
    }
}

fn print_verdict(stdout: &mut StandardStream, source: &str, verdict: &Sentiment) -> Result<()> {
    write!(stdout, "{:<10} ", source)?;
    stdout.set_color(
        ColorSpec::new()
            .set_fg(Some(label_color(verdict.label)))
            .set_bold(true),
    )?;
    write!(stdout, "{:<8}", verdict.label)?;
    stdout.reset()?;
    writeln!(stdout, " {:.2}", verdict.score)?;
    Ok(())
}

fn score_one(text: &str, lexicon: &Lexicon, pipeline: Option<String>, json: bool) -> Result<()> {
    let client = resolve_pipeline(pipeline)?;
    let (source, verdict) = match &client {
        Some(c) => ("pipeline", c.classify(text)),
        None => ("keyword", lexicon.score(text)),
    };

    if json {
        println!("{}", serde_json::to_string(&verdict)?);
    } else {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        print_verdict(&mut stdout, source, &verdict)?;
    }
    Ok(())
}

fn batch_score(dir: &Path, out: Option<&Path>, lexicon: &Lexicon) -> Result<()> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_supported(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {wide_bar} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let docs: Vec<ScoredDoc> = files
        .par_iter()
        .map(|path| {
            // Unreadable files score as empty text, which is neutral.
            let text = read_document(path).unwrap_or_else(|_| String::new());
            let verdict = lexicon.score(&text);
            pb.inc(1);
            ScoredDoc {
                path: path.to_string_lossy().to_string(),
                label: verdict.label,
                score: verdict.score,
            }
        })
        .collect();

    pb.finish_with_message("scoring files");

    match out {
        Some(path) => {
            let f = File::create(path)?;
            serde_json::to_writer_pretty(f, &docs)?;
            println!("Wrote {} verdicts to {}", docs.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&docs)?),
    }
    Ok(())
}

fn compare(text: &str, lexicon: &Lexicon, client: &PipelineClient) -> Result<()> {
    let keyword = lexicon.score(text);
    let external = client.classify(text);

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    print_verdict(&mut stdout, "keyword", &keyword)?;
    print_verdict(&mut stdout, client.program(), &external)?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("MASHAIR_LOG").unwrap_or_else(|_| "mashair=warn".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score {
            text,
            lexicon,
            pipeline,
            json,
        } => {
            let lexicon = load_lexicon(lexicon.as_deref())?;
            score_one(&text, &lexicon, pipeline, json)?;
        }
        Commands::Batch { dir, out, lexicon } => {
            let lexicon = load_lexicon(lexicon.as_deref())?;
            batch_score(&dir, out.as_deref(), &lexicon)?;
        }
        Commands::Compare {
            text,
            pipeline,
            lexicon,
        } => {
            let lexicon = load_lexicon(lexicon.as_deref())?;
            let client = resolve_pipeline(pipeline)?
                .ok_or_else(|| anyhow!("no pipeline command given (use --pipeline or MASHAIR_PIPELINE)"))?;
            compare(&text, &lexicon, &client)?;
        }
    }
    Ok(())
}
