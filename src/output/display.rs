//! Display functions for command results

use super::formatters::{feedback_to_emoji, score_bar};
use crate::commands::{AnalysisResult, SolveResult};
use colored::Colorize;

/// Print the transcript of a self-play run
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            feedback_to_emoji(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(score) = step.score {
                println!("  Score:      {score:.3} nats");
                if step.candidates_after > 0 {
                    let actual = (step.candidates_before as f64 / step.candidates_after as f64).ln();
                    println!(
                        "  Info gained: {:.3} nats ({:.1}x reduction)",
                        actual,
                        step.candidates_before as f64 / step.candidates_after as f64
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved within {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print a one-word analysis report
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = score_bar(result.info_nats, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Info gain:   [{}] {}",
        bar.green(),
        format!("{:.3} nats", result.info_nats).bright_yellow()
    );
    println!("   Buckets:     {}", result.buckets);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.largest_bucket);
}
