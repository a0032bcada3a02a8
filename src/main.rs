use clap::Parser;
use format_validator::classify;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Mutex;

/// Classify file lines against the personal data format patterns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to file with one value per line
    #[arg(index = 1)]
    file_path: PathBuf,

    /// Process only first N lines (optional)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show only specific formats (comma-separated)
    #[arg(short, long)]
    categories: Option<String>,

    /// Exclude specific formats (comma-separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Show statistics for classified values
    #[arg(short, long)]
    stats: bool,

    /// Sample 1 in N lines (for faster processing of huge files)
    #[arg(short = 'S', long)]
    sample: Option<usize>,
}

#[derive(Serialize)]
struct CategoryStat {
    category: String,
    count: usize,
    percentage: f64,
}

#[derive(Serialize)]
struct StatsSummary {
    total_lines_processed: usize,
    total_classifications: usize,
    file_path: String,
}

#[derive(Serialize)]
struct StatsReport {
    summary: StatsSummary,
    categories: Vec<CategoryStat>,
}

fn parse_category_list(arg: &Option<String>) -> Vec<String> {
    match arg {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => Vec::new(),
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let filter_categories = parse_category_list(&args.categories);
    let excluded_categories = parse_category_list(&args.exclude);

    if !args.stats {
        println!("Processing file: {}", args.file_path.display());
    }

    let file = File::open(&args.file_path)?;
    let reader = BufReader::with_capacity(1_000_000, file);

    let limit = args.limit.unwrap_or(usize::MAX);
    let sampling_rate = args.sample.unwrap_or(1);

    // Collect the lines selected by --limit and --sample. Values are
    // classified exactly as read, without trimming
    let mut lines = Vec::new();
    let mut line_count = 0usize;
    for line_result in reader.lines() {
        if line_count >= limit {
            break;
        }
        line_count += 1;
        if sampling_rate > 1 && line_count % sampling_rate != 0 {
            continue;
        }
        lines.push((line_count, line_result?));
    }

    if args.stats {
        run_stats(&args, &filter_categories, &excluded_categories, &lines, line_count)
    } else {
        run_report(&filter_categories, &excluded_categories, &lines);
        Ok(())
    }
}

fn selected_categories(value: &str, filter: &[String], excluded: &[String]) -> Vec<String> {
    let mut categories = classify(value);
    categories.retain(|c| !excluded.contains(c));
    if !filter.is_empty() {
        categories.retain(|c| filter.contains(c));
    }
    categories
}

fn run_report(filter: &[String], excluded: &[String], lines: &[(usize, String)]) {
    for (line_number, value) in lines {
        println!("\nLine {}:", line_number);

        let categories = selected_categories(value, filter, excluded);
        if categories.is_empty() {
            println!("  No pattern matches found");
        } else {
            println!("  \"{}\" => {}", value, categories.join(", "));
        }
    }
}

fn run_stats(
    args: &Args,
    filter: &[String],
    excluded: &[String],
    lines: &[(usize, String)],
    processed: usize,
) -> io::Result<()> {
    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    let category_counts: Mutex<HashMap<String, usize>> = Mutex::new(HashMap::new());

    lines.par_iter().for_each(|(_, value)| {
        let categories = selected_categories(value, filter, excluded);

        if !categories.is_empty() {
            let mut counts = category_counts.lock().unwrap();
            for category in categories {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        pb.inc(1);
    });
    pb.finish();

    let counts = category_counts.into_inner().unwrap();
    let total: usize = counts.values().sum();

    // Sort categories by count (highest first)
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let categories: Vec<CategoryStat> = sorted
        .into_iter()
        .map(|(category, count)| {
            let percentage = if total > 0 {
                (count as f64 / total as f64 * 100.0).round()
            } else {
                0.0
            };
            CategoryStat {
                category,
                count,
                percentage,
            }
        })
        .collect();

    let report = StatsReport {
        summary: StatsSummary {
            total_lines_processed: processed,
            total_classifications: total,
            file_path: args.file_path.to_string_lossy().to_string(),
        },
        categories,
    };

    match fs::write("outputstats.json", serde_json::to_string_pretty(&report)?) {
        Ok(_) => println!("Statistics written to outputstats.json"),
        Err(e) => eprintln!("Error writing statistics file: {}", e),
    }
    Ok(())
}
