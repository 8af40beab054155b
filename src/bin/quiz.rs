//! Terminal driver for the quizzes.
//!
//! Reads one command per line: a guess, `next`, `reset` or `quit`.
//!
//! ```text
//! $ quiz --variant pattern --seed 7
//! Round 1
//! 12 → 15 → ? → 21 → 24
//! Score: 0 / 3
//! > 18
//! ```

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{debug, error};

use pattern_quiz::{
    Action, CatalogueGame, PatternGame, Phase, Presenter, PriceGame, PuzzleSource, QuizConfig, Session,
    SessionError, View, WeatherGame,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Random arithmetic and geometric sequences
    Pattern,
    /// Ten fixed sequences, each shown once
    Catalogue,
    /// Predict tomorrow's weather
    Weather,
    /// Work out the basket pricing rule
    Price,
}

/// Guess the hidden value in a pattern.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Quiz to play
    #[arg(value_enum, short, long, default_value_t = Variant::Pattern)]
    variant: Variant,

    /// RNG seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Correct answers needed to win (overrides the config file)
    #[arg(short, long)]
    target: Option<u32>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Prints every view to stdout.
struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    fn write_view(&mut self, view: &View) -> io::Result<()> {
        if let Some(notice) = &view.notice {
            writeln!(self.out, "! {notice}")?;
        }
        match view.phase {
            Phase::Playing => {
                if let Some(prompt) = &view.prompt {
                    writeln!(self.out, "Round {}", view.round)?;
                    if let Some(heading) = &prompt.heading {
                        writeln!(self.out, "{heading}")?;
                    }
                    for line in prompt.to_lines() {
                        writeln!(self.out, "{line}")?;
                    }
                    if let Some(hint) = &prompt.hint {
                        writeln!(self.out, "({hint})")?;
                    }
                }
            }
            Phase::Finished => {
                if let Some(feedback) = &view.feedback {
                    writeln!(self.out, "{feedback}")?;
                }
                if view.can_continue {
                    writeln!(self.out, "Type 'next' for the next puzzle.")?;
                }
            }
            Phase::Victory => {
                if let Some(feedback) = &view.feedback {
                    writeln!(self.out, "{feedback}")?;
                }
                if let Some(victory) = &view.victory {
                    writeln!(self.out, "\n{}", victory.message)?;
                    writeln!(self.out, "Final score: {} / {}", victory.score, victory.target_score)?;
                    if let Some(hint) = &victory.hint {
                        writeln!(self.out, "Hint: {hint}")?;
                    }
                }
                writeln!(self.out, "Type 'reset' to play again or 'quit' to leave.")?;
            }
            Phase::Init | Phase::Checking => {}
        }
        writeln!(self.out, "{}", view.scoreboard())?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, view: &View) {
        if let Err(err) = self.write_view(view) {
            error!("cannot write to terminal: {err}");
        }
    }
}

fn run<S: PuzzleSource>(config: QuizConfig, source: S, seed: u64) -> Result<(), SessionError> {
    let mut session = Session::new(config, source, seed)?;
    let mut presenter = TerminalPresenter { out: io::stdout().lock() };
    presenter.render(&session.view());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!("cannot read input: {err}");
                break;
            }
        };
        let result = match line.trim() {
            "quit" | "exit" => break,
            "next" => session.handle(Action::Continue, &mut presenter),
            "reset" => session.handle(Action::Reset, &mut presenter),
            raw => session.handle_raw(raw, &mut presenter),
        };
        if let Err(err) = result {
            debug!("rejected: {err}");
            if !err.is_blocking() {
                let _ = writeln!(presenter.out, "{err}");
            }
        }
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<QuizConfig, SessionError> {
    let mut config = match &args.config {
        Some(path) => QuizConfig::from_json_file(path)?,
        None => QuizConfig::default(),
    };
    if let Some(target) = args.target {
        config = config.with_target_score(target);
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.debug {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!("variant {:?}, seed {}", args.variant, seed);

    let result = match args.variant {
        Variant::Pattern => run(config.clone(), PatternGame::new(&config), seed),
        Variant::Catalogue => run(config, CatalogueGame::default(), seed),
        Variant::Weather => run(config.clone(), WeatherGame::new(&config), seed),
        Variant::Price => run(config, PriceGame::new(), seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
