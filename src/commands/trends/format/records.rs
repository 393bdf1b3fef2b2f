//! Records output formatting for trends reports

use papertrend_core::format::escape_quotes;
use papertrend_core::trends::{CategoryDetail, Sparkline, TrendsReport};

/// Output in records format
pub fn output_records(report: &TrendsReport) {
    println!(
        "H papertrend=1 records=1 mode=trends ranking={} top_n={} window={} shown={} hidden={}",
        report.view.ranking_key,
        report.view.top_n,
        report.view.window_size,
        report.ranked.len(),
        report.hidden
    );

    for (i, stats) in report.ranked.iter().enumerate() {
        println!(
            "C {} \"{}\" total={} start={} end={} peak={} peak_count={} trend={}",
            i + 1,
            escape_quotes(&stats.category),
            stats.total_papers,
            stats.start_year,
            stats.end_year,
            stats.peak_year,
            stats.peak_count,
            stats.recent_trend
        );
    }

    for sparkline in &report.sparklines {
        println!("{}", spark_record(sparkline));
    }

    let summary = &report.summary;
    println!(
        "S categories={} papers={} avg={} growing={} years={}-{}",
        summary.total_categories,
        summary.total_all_papers,
        summary.avg_papers_per_category,
        summary.categories_with_growth,
        summary.start_year_overall,
        summary.end_year_overall
    );

    if let Some((leader, papers)) = &report.insights.leader {
        let growing = if report.insights.growing.is_empty() {
            "-".to_string()
        } else {
            report.insights.growing.join(",")
        };
        println!(
            "I leader=\"{}\" papers={} growing=\"{}\"",
            escape_quotes(leader),
            papers,
            escape_quotes(&growing)
        );
    }

    if let Some(detail) = &report.selected {
        output_detail_records(detail);
    }
}

/// `P "<category>" year:count:height ...`
fn spark_record(sparkline: &Sparkline) -> String {
    let mut line = format!("P \"{}\"", escape_quotes(&sparkline.category));
    for bar in &sparkline.bars {
        line.push_str(&format!(
            " {}:{}:{:.0}",
            bar.year, bar.count, bar.height_percent
        ));
    }
    line
}

fn output_detail_records(detail: &CategoryDetail) {
    for share in &detail.history {
        let delta = share
            .delta
            .map(|d| format!("{:+}", d))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "D \"{}\" year={} count={} delta={} peak_pct={:.0}",
            escape_quotes(&detail.category),
            share.year,
            share.count,
            delta,
            share.percent_of_peak
        );
    }
}
