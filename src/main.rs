use anyhow::Result;
use minesweeper_ai::{Board, Game, GameConfig, Outcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::from_env();
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "playing a {}x{} board with {} mines, seed {}",
        config.height,
        config.width,
        config.mines,
        seed
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let board = Board::generate(config.height, config.width, config.mines, &mut rng)?;
    println!("{}", board);

    let mut game = Game::new(board, rng).with_verification(config.verify);
    let outcome = game.play()?;

    let engine = game.engine();
    println!();
    println!("Moves made: {:?}", engine.moves_made());
    println!("Mines flagged: {:?}", engine.mines());
    match outcome {
        Outcome::Won => println!("The AI won!"),
        Outcome::Lost(cell) => println!("The AI hit a mine at {:?}.", cell),
        Outcome::Stuck => println!("The AI ran out of moves."),
    }

    Ok(())
}
