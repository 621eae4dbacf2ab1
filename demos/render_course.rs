/// Example: Group a course slide payload and print it.
///
/// This example demonstrates how to use the coursedeck library to:
/// - Read a JSON payload of raw slide records
/// - Group it into composite slides
/// - Print the deck as Markdown or as JSON
///
/// Usage:
///   cargo run --example render_course -- course.json
///   cargo run --example render_course -- course.json --format json
///   RUST_LOG=coursedeck=debug cargo run --example render_course -- course.json
use clap::{Parser, ValueEnum};
use coursedeck::markdown::{MarkdownOptions, ToMarkdown};
use coursedeck::record::parse_records_reader;
use coursedeck::{CourseMetadata, Deck, GroupingOptions, MissingTitlePolicy};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[derive(Debug, Parser)]
#[command(about = "Group AI-generated slide records into a presentation")]
struct Args {
    /// JSON file holding the slide records
    payload: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    format: Format,

    /// Course title written as front matter
    #[arg(long)]
    title: Option<String>,

    /// Keep records without a title as continuation text
    #[arg(long)]
    keep_untitled: bool,

    /// Leave out interactive activities
    #[arg(long)]
    no_activities: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let reader = BufReader::new(File::open(&args.payload)?);
    let records = parse_records_reader(reader)?;

    let policy = if args.keep_untitled {
        MissingTitlePolicy::Continuation
    } else {
        MissingTitlePolicy::Skip
    };
    let mut deck = Deck::from_records_with_options(
        &records,
        &GroupingOptions::new().with_missing_title(policy),
    );
    if let Some(title) = &args.title {
        deck = deck.with_metadata(CourseMetadata::titled(title.as_str()));
    }

    let report = deck.report();
    eprintln!(
        "{} records -> {} slides ({} dropped)",
        report.input_records,
        report.slides,
        report.dropped()
    );

    match args.format {
        Format::Markdown => {
            let options = MarkdownOptions::new()
                .with_metadata(args.title.is_some())
                .with_activity(!args.no_activities);
            print!("{}", deck.to_markdown_with_options(&options)?);
        },
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&deck)?);
        },
    }

    Ok(())
}
