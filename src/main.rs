use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, RngCore, SeedableRng};

use pgn_quizzer::{
    load_questions_from_json, parse_length, run_quiz_console, AssetRenderer, FenDiagram,
    QuizSettings, RawAsset,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a multiple-choice chess quiz in the terminal.", long_about = None)]
struct Args {
    /// Path to a JSON question bank
    #[arg(long, default_value = "data/chess_sample_data.json")]
    path: PathBuf,

    /// Number of questions to ask in each quiz session
    #[arg(long, default_value = "5", value_parser = parse_length)]
    length: usize,

    /// Seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Print assets as stored instead of drawing FEN boards
    #[arg(long)]
    raw_assets: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let question_bank = load_questions_from_json(&args.path)
        .with_context(|| format!("failed to load questions from {}", args.path.display()))?;
    if question_bank.is_empty() {
        bail!("{} contains no usable questions", args.path.display());
    }

    let renderer: Box<dyn AssetRenderer> = if args.raw_assets {
        Box::new(RawAsset)
    } else {
        Box::new(FenDiagram::default())
    };

    // Each round gets its own seed from one master RNG: --seed fixes the whole run.
    let mut master = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let mut round = 1u32;
    loop {
        let settings = QuizSettings { length: args.length, rng_seed: Some(master.next_u64()) };
        let mut presenter = settings.session(&question_bank)?;
        info!("starting round {round} with {} questions", presenter.nb_questions_remaining());

        let stdin = io::stdin();
        let again = run_quiz_console(&mut presenter, renderer.as_ref(), stdin.lock(), io::stdout())?;
        if !again {
            break;
        }
        round += 1;
    }
    Ok(())
}
