//! Boggle - CLI
//!
//! Boggle with a terminal UI, a text client, a board solver and a survey of
//! random boards.

use anyhow::{Context, Result};
use boggle::{
    commands::{run_survey, run_text, solve_board},
    core::{Board, Dealer},
    game::{DEFAULT_MIN_WORD_LEN, GameConfig, ScoringRule, Session},
    lexicon::{Lexicon, loader},
    output::{print_solve_result, print_survey_result},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "boggle",
    about = "Find words by tracing paths through touching letter cubes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'l', long, global = true, env = "BOGGLE_LEXICON", default_value = "embedded")]
    lexicon: String,

    /// Seed for reproducible boards
    #[arg(long, global = true, env = "BOGGLE_SEED")]
    seed: Option<u64>,

    /// Shortest word that scores
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_length: usize,

    /// Scoring table
    #[arg(long, global = true, value_enum, default_value_t = ScoringRule::Classic)]
    scoring: ScoringRule,

    /// Deal the fixed test board (cubes reversed, every die showing face 4)
    #[arg(long, global = true)]
    predictable: bool,

    /// Start from this board instead of dealing one, e.g. "UTPU/TITS/RRVS/MAIO"
    #[arg(short, long, global = true)]
    board: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Text client (type words or cells such as 'c1 d1 c2')
    Text,

    /// List every word on a board
    Solve {
        /// Show the path of each word
        #[arg(short, long)]
        verbose: bool,
    },

    /// Deal many boards and report how many words they hold
    Survey {
        /// Number of boards to deal
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::new(self.min_length, self.scoring)
    }

    fn dealer(&self) -> Dealer {
        if self.predictable {
            Dealer::predictable()
        } else {
            Dealer::random(self.seed)
        }
    }

    /// The `--board` layout if given, otherwise a freshly dealt board
    fn first_board(&self, dealer: &mut Dealer) -> Result<Board> {
        match &self.board {
            Some(layout) => {
                Board::from_layout(layout).with_context(|| format!("invalid board '{layout}'"))
            }
            None => Ok(dealer.deal()),
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn load_lexicon(source: &str) -> Result<Lexicon> {
    let lexicon =
        loader::load(source).with_context(|| format!("failed to load word list '{source}'"))?;
    if lexicon.is_empty() {
        anyhow::bail!("word list '{source}' has no usable words");
    }
    Ok(lexicon)
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let lexicon = load_lexicon(&cli.lexicon)?;

    // Default to Play mode if no command given
    match cli.command {
        None | Some(Commands::Play) => run_play_command(&cli, &lexicon),
        Some(Commands::Text) => run_text_command(&cli, &lexicon),
        Some(Commands::Solve { verbose }) => run_solve_command(&cli, &lexicon, verbose),
        Some(Commands::Survey { count }) => {
            run_survey_command(&cli, &lexicon, count);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, lexicon: &Lexicon) -> Result<()> {
    use boggle::interactive::{App, run_tui};

    let mut dealer = cli.dealer();
    let board = cli.first_board(&mut dealer)?;
    let session = Session::new(board, lexicon, cli.config());
    run_tui(App::new(session, dealer))
}

fn run_text_command(cli: &Cli, lexicon: &Lexicon) -> Result<()> {
    let mut dealer = cli.dealer();
    let board = cli.first_board(&mut dealer)?;
    let mut session = Session::new(board, lexicon, cli.config());
    run_text(&mut session, &mut dealer)
}

fn run_solve_command(cli: &Cli, lexicon: &Lexicon, verbose: bool) -> Result<()> {
    let mut dealer = cli.dealer();
    let board = cli.first_board(&mut dealer)?;
    let result = solve_board(board, lexicon, cli.config());
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_survey_command(cli: &Cli, lexicon: &Lexicon, count: usize) {
    println!("Dealing {count} boards...");
    let mut dealer = cli.dealer();
    let result = run_survey(&mut dealer, lexicon, cli.config(), count, true);
    print_survey_result(&result);
}
