//! `papertrend paper` command and shared paper rendering

use crate::cli::{Cli, PaperArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::read_input;
use papertrend_core::error::Result;
use papertrend_core::format::{escape_quotes, OutputFormat};
use papertrend_core::recommend::{truncate, Paper};

/// Characters of abstract shown in list views
pub const ABSTRACT_PREVIEW_CHARS: usize = 200;

/// Execute the paper command
pub fn execute(ctx: &CommandContext, args: &PaperArgs) -> Result<()> {
    let paper: Paper = match &args.input {
        Some(path) => serde_json::from_str(&read_input(path)?)?,
        None => ctx.api_client().paper(&args.id)?,
    };

    match ctx.cli.format {
        OutputFormat::Human => output_human(ctx.cli, &paper),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paper)?),
        OutputFormat::Records => {
            println!("H papertrend=1 records=1 mode=paper");
            println!("{}", paper_record(&paper));
            if !paper.abstract_text.is_empty() {
                println!("B {}", paper.abstract_text.replace('\n', " "));
            }
        }
    }
    Ok(())
}

fn output_human(cli: &Cli, paper: &Paper) {
    println!("{}", paper.title);
    if !paper.authors.is_empty() {
        println!("{}", paper.authors);
    }
    println!();

    println!("Id: {}", paper.key().unwrap_or("-"));
    if let Some(year) = paper.publication_year {
        println!("Year: {}", year);
    }
    let tags = paper.tags();
    if !tags.is_empty() {
        println!("Categories: {}", tags.join(", "));
    }
    if let Some(doi) = &paper.doi {
        println!("DOI: {}", doi);
    }
    if let Some(journal) = &paper.journal_ref {
        println!("Journal: {}", journal);
    }
    println!("Reading time: {} min", paper.reading_minutes());

    if !cli.quiet && !paper.abstract_text.is_empty() {
        println!();
        println!("{}", paper.abstract_text.trim());
    }
}

/// `<id> [<year>] <title>`
pub fn paper_headline(paper: &Paper) -> String {
    let year = paper
        .publication_year
        .map(|y| format!(" [{}]", y))
        .unwrap_or_default();
    format!("{}{} {}", paper.key().unwrap_or("-"), year, paper.title)
}

/// Authors and tags line under a headline
pub fn paper_byline(paper: &Paper) -> String {
    let tags = paper.tags().join(" ");
    match (paper.authors.is_empty(), tags.is_empty()) {
        (true, true) => String::new(),
        (false, true) => truncate(&paper.authors, 80),
        (true, false) => tags,
        (false, false) => format!("{} | {}", truncate(&paper.authors, 80), tags),
    }
}

/// `N <id> year=<year> "<title>" tags=<csv> minutes=<n>`
pub fn paper_record(paper: &Paper) -> String {
    let tags = paper.tags();
    let tags_csv = if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(",")
    };
    let year = paper
        .publication_year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "N {} year={} \"{}\" tags={} minutes={}",
        paper.key().unwrap_or("-"),
        year,
        escape_quotes(&paper.title),
        tags_csv,
        paper.reading_minutes()
    )
}
