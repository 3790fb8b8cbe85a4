use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use heuristic_connect_four::config::AppConfig;
use heuristic_connect_four::error::MoveError;
use heuristic_connect_four::game::{GameOutcome, GameState};

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate()?;

    let mut state = config.new_game()?;
    let width = state.board().width();

    println!("Use 1-{width} to choose a column");
    println!("{}", state.board());

    if cli.computer_first {
        computer_turn(&mut state)?;
    }

    let mut input = io::stdin().lock().lines();
    while !state.is_terminal() {
        print!("\nPlayer turn: ");
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            println!();
            return Ok(());
        };
        let column = match line?.trim().parse::<usize>() {
            Ok(n) if (1..=width).contains(&n) => n - 1,
            _ => {
                println!("Column must be between 1 and {width}");
                continue;
            }
        };

        match state.apply_player_move_mut(column) {
            Ok(_) => {}
            Err(err @ MoveError::InvalidColumn { .. }) => {
                println!("{err}");
                continue;
            }
            Err(err) => return Err(err.into()),
        }
        println!("{}", state.board());

        if !state.is_terminal() {
            computer_turn(&mut state)?;
        }
    }

    let message = match state.outcome() {
        GameOutcome::PlayerWin => "You win!",
        GameOutcome::ComputerWin => "You lose!",
        GameOutcome::Draw => "Draw!",
        GameOutcome::InProgress => unreachable!("loop exits only on a finished game"),
    };
    match state.outcome().winner() {
        Some(side) => log::info!("{} won after {} moves", side.name(), state.board().move_count()),
        None => log::info!("draw after {} moves", state.board().move_count()),
    }
    println!("\n{message}");

    Ok(())
}

fn computer_turn(state: &mut GameState) -> Result<()> {
    println!("\nThinking...");
    let column = state.compute_computer_move()?;
    state.apply_computer_move_mut(column)?;
    println!("Computer plays column {}", column + 1);
    println!("{}", state.board());
    Ok(())
}
