// src/reporting.rs
//! Console output for pipeline progress and results.

use colored::Colorize;

use crate::model::Deck;
use crate::processor::ProcessReport;

/// Prints the processing outcome: file counts, elapsed time, and one warn
/// line per failed file (to stderr, so piped output stays clean).
pub fn print_processing(report: &ProcessReport) {
    for (path, message) in &report.failures {
        eprintln!(
            "{} skipped {}: {message}",
            "warn:".yellow().bold(),
            path.display()
        );
    }
    println!(
        "Processed {} files: {} succeeded, {} failed in {} ms",
        report.total_files(),
        report.succeeded.to_string().green(),
        if report.failed > 0 {
            report.failed.to_string().red()
        } else {
            report.failed.to_string().normal()
        },
        report.duration_ms
    );
}

/// Prints aggregate figures over the merged deck collection.
pub fn print_summary(decks: &[Deck]) {
    let total_cards: usize = decks.iter().map(|d| d.cards.len()).sum();
    let total_unit_power: i32 = decks.iter().map(Deck::total_unit_power).sum();
    let deck_count = decks.len();
    let avg = |total: f64| if deck_count == 0 { 0.0 } else { total / deck_count as f64 };

    println!();
    println!("{}", "=== Deck Summary ===".bold());
    println!("Total decks: {deck_count}");
    println!("Total cards: {total_cards}");
    println!("Average cards per deck: {:.2}", avg(total_cards as f64));
    println!("Total unit power across all decks: {total_unit_power}");
    println!(
        "Average unit power per deck: {:.2}",
        avg(f64::from(total_unit_power))
    );
    println!();
}

/// Prints the first `limit` rows of the sorted frequency table.
pub fn print_top(stats: &[(String, usize)], attribute: &str, limit: usize) {
    println!(
        "{} {}",
        "Top results for".bold(),
        attribute.cyan().bold()
    );
    for (rank, (label, count)) in stats.iter().take(limit).enumerate() {
        println!("{:>3}. {:<30} : {count}", rank + 1, label);
    }
    if stats.len() > limit {
        println!("     … and {} more", stats.len() - limit);
    }
}
