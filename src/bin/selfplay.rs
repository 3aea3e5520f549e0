use std::path::PathBuf;

use clap::Parser;

use balda::{
    find_move, rng_for_turn, GameState, ScanLimits, Seat, WordSet, DEFAULT_MIN_WORD_LEN,
};

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "Balda computer-vs-computer demo driver")]
struct Args {
    /// Word list path (plain text, one word per line)
    #[arg(long, default_value = "data/russian_words.txt")]
    dict: PathBuf,

    /// Board size
    #[arg(long, default_value_t = 5)]
    size: usize,

    /// Initial word placed centered on the middle row
    #[arg(long, default_value = "БАЛДА")]
    word: String,

    /// Base seed for the per-turn search RNG
    #[arg(long, default_value_t = 0x00C0_FFEE_u64)]
    seed: u64,

    /// Stop after this many successful moves even if more are possible
    #[arg(long, default_value_t = 50)]
    max_moves: u32,

    /// Minimum word length admitted into the dictionary
    #[arg(long, default_value_t = DEFAULT_MIN_WORD_LEN)]
    min_word_len: usize,
}

fn print_board(state: &GameState) {
    let size = state.board.size();
    print!("   ");
    for col in 0..size {
        print!("{col} ");
    }
    println!();
    println!("  {}", "-".repeat(2 * size + 1));
    for (row, cells) in state.board.rows().enumerate() {
        print!("{row} | ");
        for cell in cells {
            print!("{} ", cell.unwrap_or('_'));
        }
        println!("|");
    }
    println!("  {}", "-".repeat(2 * size + 1));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let words = WordSet::load_from_file(&args.dict, args.min_word_len)?;
    println!(
        "[selfplay] Loaded {} words (min length {}).",
        words.len(),
        words.min_len()
    );

    let mut state = GameState::new(args.size, &args.word)?;
    state.players[Seat::One.index()].name = "Computer 1".to_owned();
    state.players[Seat::Two.index()].name = "Computer 2".to_owned();
    print_board(&state);

    let limits = ScanLimits::default();
    for _ in 0..args.max_moves {
        let seat = state.next;
        let mut rng = rng_for_turn(args.seed, state.moves_played());
        match find_move(&mut state, &words, limits, &mut rng) {
            Ok(found) => {
                println!(
                    "[selfplay] {} plays '{}' at ({},{}) spelling '{}' (+{} points)",
                    state.players[seat.index()].name,
                    found.letter,
                    found.cell.row,
                    found.cell.col,
                    found.word,
                    found.points
                );
                state.advance_turn();
                print_board(&state);
            }
            Err(e) => {
                println!(
                    "[selfplay] {}: {e}. Game over.",
                    state.players[seat.index()].name
                );
                break;
            }
        }
    }

    println!("[selfplay] Final scores:");
    for seat in [Seat::One, Seat::Two] {
        println!(
            "[selfplay]   {}: {}",
            state.players[seat.index()].name,
            state.score(seat)
        );
    }
    let mut played: Vec<&str> = state.used_words().collect();
    played.sort_unstable();
    println!("[selfplay] Words played: {}", played.join(", "));

    Ok(())
}
