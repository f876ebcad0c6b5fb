//! Word Advisor - CLI
//!
//! Interactive advisor for fixed-length word-guessing games, built on
//! expected information gain with optional bounded lookahead.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use wordle_advisor::{
    commands::{SolveConfig, analyze_word, run_advise, solve_word},
    core::Word,
    output::{print_analysis_result, print_solve_result},
    solver::{DEFAULT_DEPTH_LIMIT, Scorer},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Word-guessing advisor using expected information gain",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the guess vocabulary (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "data/words.txt")]
    words: String,

    /// Path to the answer vocabulary (one word per line)
    #[arg(short = 'a', long, global = true, default_value = "data/answers.txt")]
    answers: String,

    /// Lookahead depth for scoring (1 = immediate information only)
    #[arg(short, long, global = true, default_value = "1")]
    depth: usize,

    /// How many top-scoring guesses to display
    #[arg(short, long, global = true, default_value = "10")]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor session (default)
    Advise,

    /// Play the advisor against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how one guess word splits the answer vocabulary
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (guess_words, answer_words) = load_vocabularies(&cli.words, &cli.answers)?;
    ensure!(cli.depth >= 1, "lookahead depth must be at least 1");
    ensure!(
        cli.depth <= DEFAULT_DEPTH_LIMIT,
        "lookahead depth {} exceeds the supported ceiling of {DEFAULT_DEPTH_LIMIT}",
        cli.depth
    );

    let scorer = Scorer::new(guess_words);

    match cli.command.unwrap_or(Commands::Advise) {
        Commands::Advise => run_advise(&scorer, &answer_words, cli.depth, cli.top),
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word, cli.depth);
            let result = solve_word(&config, &scorer, &answer_words)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &scorer, &answer_words)?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

/// Load (guess vocabulary, answer vocabulary) from the configured paths
fn load_vocabularies(words_path: &str, answers_path: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    let guess_words = load_from_file(words_path)
        .with_context(|| format!("failed to read guess vocabulary from {words_path}"))?;
    let answer_words = load_from_file(answers_path)
        .with_context(|| format!("failed to read answer vocabulary from {answers_path}"))?;

    ensure!(!guess_words.is_empty(), "guess vocabulary is empty");
    ensure!(!answer_words.is_empty(), "answer vocabulary is empty");

    Ok((guess_words, answer_words))
}
