//! Human-readable output formatting for trends reports

use crate::cli::Cli;
use papertrend_core::trends::{CategoryDetail, Sparkline, TrendsReport};

const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Width of a full-peak bar in the category history
const HISTORY_BAR_WIDTH: usize = 24;

/// Output in human format
pub fn output_human(cli: &Cli, report: &TrendsReport) {
    if !cli.quiet {
        println!(
            "Research trends: {} of {} categories by {}",
            report.ranked.len(),
            report.summary.total_categories,
            report.view.ranking_key
        );
        println!();
    }

    let name_width = report
        .ranked
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0);

    for (i, (stats, sparkline)) in report.ranked.iter().zip(&report.sparklines).enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>7} papers  {}-{}  peak {} ({})  trend {:+}  {}",
            i + 1,
            stats.category,
            stats.total_papers,
            stats.start_year,
            stats.end_year,
            stats.peak_year,
            stats.peak_count,
            stats.recent_trend,
            render_sparkline(sparkline),
            width = name_width
        );
    }

    if report.hidden > 0 && !cli.quiet {
        println!("     ({} more not shown)", report.hidden);
    }

    if let Some(detail) = &report.selected {
        println!();
        output_detail(detail);
    }

    if cli.quiet {
        return;
    }

    let summary = &report.summary;
    println!();
    println!("Summary:");
    println!("  Categories: {}", summary.total_categories);
    println!("  Total papers: {}", summary.total_all_papers);
    println!("  Avg. papers per category: {}", summary.avg_papers_per_category);
    println!("  Growing categories: {}", summary.categories_with_growth);
    println!(
        "  Years: {}-{}",
        summary.start_year_overall, summary.end_year_overall
    );

    if let Some((leader, papers)) = &report.insights.leader {
        println!();
        println!("Leading category: {} with {} papers", leader, papers);
        if !report.insights.growing.is_empty() {
            println!("Growing: {}", report.insights.growing.join(", "));
        }
    }
}

fn output_detail(detail: &CategoryDetail) {
    println!(
        "{}: {} papers over {} years, peak {} ({}), recent trend {:+}",
        detail.category,
        detail.total_papers,
        detail.span_years,
        detail.peak_year,
        detail.peak_count,
        detail.recent_trend
    );

    for share in &detail.history {
        let delta = share.delta.map(|d| format!("{:+}", d)).unwrap_or_default();
        let bar_len = (share.percent_of_peak / 100.0 * HISTORY_BAR_WIDTH as f64).round() as usize;
        println!(
            "  {}  {:>7}  {:>6}  {:<bar_width$}  {:>3.0}%",
            share.year,
            share.count,
            delta,
            "█".repeat(bar_len),
            share.percent_of_peak,
            bar_width = HISTORY_BAR_WIDTH
        );
    }
}

/// Glyph for a bar height in percent, never below the lowest block
pub fn spark_glyph(height_percent: f64) -> char {
    let steps = SPARK_GLYPHS.len();
    let idx = (height_percent / 100.0 * steps as f64).ceil() as usize;
    SPARK_GLYPHS[idx.clamp(1, steps) - 1]
}

pub fn render_sparkline(sparkline: &Sparkline) -> String {
    sparkline
        .bars
        .iter()
        .map(|bar| spark_glyph(bar.height_percent))
        .collect()
}
