//! Interactive advisor mode
//!
//! Text prompt/response loop: recommend a guess, read the observed feedback
//! digits, narrow, repeat until the answer is determined.

use crate::core::{Feedback, WORD_LEN, Word};
use crate::output::formatters::feedback_to_emoji;
use crate::session::{Session, SessionState};
use crate::solver::Scorer;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

/// Run the interactive advisor loop
///
/// # Errors
/// Returns an error on I/O failure reading user input.
pub fn run_advise(scorer: &Scorer, answers: &[Word], depth: usize, top_k: usize) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Word Advisor - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that maximize expected information gain.");
    println!("After each guess, enter the {WORD_LEN} feedback digits with no separator:\n");
    println!("  - 2 = letter in the correct position");
    println!("  - 1 = letter present elsewhere in the word");
    println!("  - 0 = letter absent\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n");

    let mut session = Session::new(scorer, answers.iter().copied(), depth);

    loop {
        match session.state() {
            SessionState::Solved(answer) => {
                println!(
                    "\n🎯 Answer is: {}\n",
                    answer.text().to_uppercase().bright_green().bold()
                );
                return Ok(());
            }
            SessionState::Exhausted => {
                println!("\n❌ No possible answers left. Your feedback may be incorrect.");
                println!("Type 'undo' to go back, 'new' to start over, or 'quit'.\n");

                match read_line("Command")?.as_deref() {
                    Some("undo") | Some("u") => {
                        if session.undo() {
                            println!("✓ Undone! Back to round {}\n", session.round());
                        } else {
                            println!("Nothing to undo!\n");
                        }
                    }
                    Some("new") | Some("n") => {
                        session.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    Some("quit") | Some("q") | Some("exit") | None => return Ok(()),
                    _ => {}
                }
                continue;
            }
            SessionState::Open => {}
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: {} candidates remaining",
            session.round(),
            session.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");

        let rec = {
            let bar = scoring_bar(scorer.guesses().len() as u64);
            let rec = session.recommend_with_progress(&|| bar.inc(1));
            bar.finish_and_clear();
            rec.ok_or_else(|| anyhow::anyhow!("no recommendation for an open session"))?
        };

        println!(
            "\n📊 Suggested guess: {}   ({:.3} nats expected)",
            rec.guess.text().to_uppercase().bright_yellow().bold(),
            rec.score
        );

        println!("\nTop guesses:");
        for (word, score) in rec.ranking.iter().take(top_k) {
            println!("   {:<8} {score:.3}", word.text().to_uppercase());
        }
        println!();

        // Show the survivors once the field is small
        if session.candidates().len() <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates().iter() {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        loop {
            let Some(input) = read_line("Enter feedback digits (or command)")? else {
                return Ok(());
            };

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Bye!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session.reset();
                    println!("\n🔄 New game started!\n");
                    break;
                }
                "undo" | "u" => {
                    if session.undo() {
                        println!("✓ Undone! Back to round {}\n", session.round());
                        break;
                    }
                    println!("Nothing to undo!\n");
                }
                _ => {
                    if let Some(feedback) = Feedback::parse(&input) {
                        println!("   {}\n", feedback_to_emoji(feedback));
                        session.apply(rec.guess, feedback);
                        break;
                    }
                    println!("❌ Invalid input! Enter {WORD_LEN} digits from {{0,1,2}}, e.g. 02100\n");
                }
            }
        }
    }
}

fn scoring_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} scoring [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .expect("static progress template")
            .progress_chars("█▓▒░"),
    );
    bar
}

/// Read one trimmed, lowercased line; `None` on end of input
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None); // EOF
    }

    Ok(Some(input.trim().to_lowercase()))
}
