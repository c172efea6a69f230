//! Wordle Aid CLI
//!
//! Interactive loop: recommends the highest-entropy guess, reads the
//! constraint string the real game reported for it, and narrows the
//! candidates until the answer is pinned down, then starts a fresh game.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use wordle_aid::{
    load_dictionary, word_list_digest, EntropyCache, FeedbackPattern, Session, SessionState,
};

#[derive(Parser)]
#[clap(name = "wordle-aid")]
#[clap(about = "an entropy-based wordle solving aid", long_about = None)]
struct Cli {
    /// Dictionary file with one five-letter word per line
    #[clap(long, default_value = "wordle.txt")]
    dictionary: PathBuf,

    /// Entropy cache file
    #[clap(long, default_value = "entropy.cache")]
    cache_file: PathBuf,

    /// Recompute every score instead of using the on-disk cache
    #[clap(long)]
    no_cache: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    // One iteration per game; exit is ctrl-c or end of input.
    loop {
        let words = load_dictionary(&cli.dictionary)?;
        println!(
            "Loaded {} words from {}.",
            words.len(),
            cli.dictionary.display()
        );

        let digest = word_list_digest(&words);
        let cache = if cli.no_cache {
            EntropyCache::in_memory(digest)
        } else {
            EntropyCache::load(&cli.cache_file, digest)
        };
        if !cache.is_empty() {
            println!("Loaded {} cached scores.", cache.len());
        }

        let mut session = Session::new(words, cache);

        let answer = loop {
            if let SessionState::Complete { answer } = session.state() {
                break answer.clone();
            }

            if session.remaining_count() > 1000 {
                println!(
                    "Scoring {} candidates, this may take a while...",
                    session.remaining_count()
                );
            }
            let (guess, entropy) = session.compute_guess()?;
            println!("Best guess {} (entropy: {:.4})", guess.to_uppercase(), entropy);

            let pattern = loop {
                print!(
                    "Constraints of guess {} (t=hit, o=present, x=miss): ",
                    guess.to_uppercase()
                );
                stdout.flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    return Ok(());
                }

                match FeedbackPattern::parse(line.trim()) {
                    Some(pattern) => break pattern,
                    None => println!("Invalid constraint; enter exactly five of t/o/x."),
                }
            };

            session.record_feedback(pattern)?;
            println!("{} candidates remain.", session.remaining_count());
        };

        match answer {
            Some(word) => println!("The word is {}.", word.to_uppercase()),
            None => println!("No remaining candidates; the feedback may be inconsistent."),
        }
        println!();
    }
}
