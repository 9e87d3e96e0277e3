//! Display functions for command results

use super::formatters::{create_progress_bar, format_distance};
use crate::commands::{BenchmarkResult, NeighbourReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a ladder
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_cyan().bold(),
        result.end.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("  Dictionary: {} words", result.dictionary_size);
        println!("  Search:     {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }

    println!();
    match result.distance {
        Some(distance) => println!(
            "{}",
            format!("✅ Shortest ladder: {}", format_distance(Some(distance)))
                .green()
                .bold()
        ),
        None => {
            println!("{}", "❌ No ladder exists (-1)".red().bold());
            if !result.end_in_dictionary {
                println!(
                    "   {} is not in the word list, so no ladder can end on it",
                    result.end.to_uppercase()
                );
            }
        }
    }
}

/// Print the neighbourhood of a word
pub fn print_neighbour_report(report: &NeighbourReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBOURS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🔗 {} neighbours among {} words:\n",
        report.total_neighbours, report.dictionary_size
    );

    for bucket in &report.buckets {
        let words = if bucket.words.is_empty() {
            "—".bright_black().to_string()
        } else {
            bucket.words.join(", ")
        };
        println!("   {}  {}", bucket.pattern.bright_white().bold(), words);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs searched:   {}", result.total_pairs);
    println!(
        "   Dictionary:       {} words, {} patterns",
        result.dictionary_size, result.index_patterns
    );
    println!("   Reachable:        {}", format!("{}", result.reachable).green());
    println!(
        "   Unreachable:      {}",
        format!("{}", result.unreachable).yellow()
    );
    println!(
        "   Average distance: {}",
        format!("{:.2}", result.average_distance)
            .bright_yellow()
            .bold()
    );
    println!("   Longest ladder:   {}", result.max_distance);
    println!(
        "   Index build:      {:.3}ms",
        result.index_build.as_secs_f64() * 1000.0
    );
    println!("   Search time:      {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.reachable == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for distance in 0..=result.max_distance {
        if let Some(&count) = result.distribution.get(&distance) {
            let pct = (count as f64 / result.reachable as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {distance:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
