//! Terminal rendering and command parsing.
//!
//! Pure presentation: everything here reads the session and prints, or
//! turns an input line into a [`Command`]. Ranks are drawn 8 down to 1 so
//! white sits at the bottom; that reversal is display-only and never
//! touches the coordinates a command produces.

use stasis_core::{BoardGrid, Color, GameSession, Square, BOARD_SIZE};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click a board square
    Square(Square),
    /// Click the n-th piece of a color's hand (zero-based)
    Hand(Color, usize),
    /// End the current turn
    EndTurn,
    /// Print the command summary
    Help,
    /// Leave the game
    Quit,
}

/// Parse one input line into a command.
///
/// Accepted forms: an algebraic square (`e2`), a numeric pair (`4,1`),
/// `hand w 2` / `hand b 0`, `end`, `help`/`?`, `quit`/`q`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim().to_ascii_lowercase();
    let mut words = line.split_whitespace();

    match words.next()? {
        "end" => Some(Command::EndTurn),
        "help" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        "hand" => {
            let color = match words.next()? {
                "w" | "white" => Color::White,
                "b" | "black" => Color::Black,
                _ => return None,
            };
            let index: usize = words.next()?.parse().ok()?;
            Some(Command::Hand(color, index))
        }
        word => parse_square(word).map(Command::Square),
    }
}

/// Parse `e2`-style algebraic or `4,1`-style numeric coordinates.
fn parse_square(word: &str) -> Option<Square> {
    if let Some((x, y)) = word.split_once(',') {
        let sq = Square::new(x.trim().parse().ok()?, y.trim().parse().ok()?);
        return sq.in_bounds().then_some(sq);
    }

    let mut chars = word.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Some(Square::new(file as u8 - b'a', rank as u8 - b'1'))
}

/// Print the full session view: board, turn, hands, log.
pub fn render(session: &GameSession) {
    let Some(state) = session.state() else {
        println!("Waiting for game state...");
        return;
    };

    if let Some(id) = session.game_id() {
        println!("\nStasis Chess (game {id})");
    }

    let grid = BoardGrid::project(&state.pieces);
    let selection = session.selection();

    // Ranks top-down for display; coordinates stay zero-based internally
    for y in (0..BOARD_SIZE).rev() {
        print!("{} ", y + 1);
        for x in 0..BOARD_SIZE {
            match grid.at(Square::new(x, y)) {
                Some(piece) if selection.is_piece(&piece.id) => {
                    print!("[{}]", piece.kind.glyph(piece.color));
                }
                Some(piece) => print!(" {} ", piece.kind.glyph(piece.color)),
                None => print!(" . "),
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");

    // Stun and move-stack markers, drawn beside the board
    let mut marked: Vec<_> = state
        .pieces
        .values()
        .filter(|p| p.pos.is_some() && (p.stun > 0 || p.move_stack > 0))
        .collect();
    marked.sort_by(|a, b| a.id.cmp(&b.id));
    for piece in marked {
        if let Some(pos) = piece.pos {
            println!(
                "  {} {} at {}: S:{} M:{}",
                piece.kind.glyph(piece.color),
                piece.id,
                pos,
                piece.stun,
                piece.move_stack
            );
        }
    }

    if session.is_over() {
        if let Some(winner) = session.winner() {
            println!("*** Game Over! {} wins! ***", winner.name());
        }
    } else {
        println!("Turn: {}", state.turn.name());
    }

    for color in [Color::White, Color::Black] {
        print!("{}'s hand:", color.name());
        let hand = state.hand(color);
        if hand.is_empty() {
            print!(" (empty)");
        }
        for (i, piece) in hand.iter().enumerate() {
            let mark = if selection.is_piece(&piece.id) { "*" } else { "" };
            print!(" [{}]{}{}", i, piece.kind.glyph(piece.color), mark);
        }
        println!();
    }

    let recent: Vec<&str> = session.log().take(10).collect();
    if !recent.is_empty() {
        println!("Log:");
        for entry in recent {
            println!("  {entry}");
        }
    }
}

/// Print the command summary.
pub fn render_help() {
    println!("Commands:");
    println!("  e2 / 4,1     click board square (file a-h + rank 1-8, or x,y)");
    println!("  hand w 0     click the n-th piece in a hand");
    println!("  end          end your turn");
    println!("  help         show this message");
    println!("  quit         leave the game");
}
