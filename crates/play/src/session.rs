//! One console game: prompts, move validation and win detection

use std::io::{self, BufRead, Write};

use checkers_core::{
    has_any_capture, is_legal_move, legal_moves, resolve_capture_chain, Board, Move, Player,
};
use rand::Rng;
use tournament::{choose_move, Strategy};
use tracing::{debug, info};

/// Who plays Black. White is always at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub ai: Option<Strategy>,
    pub depth: u8,
    pub iterations: u32,
}

/// Reads "row col" as a square.
pub fn parse_square(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Some((row, col)),
        _ => None,
    }
}

fn format_chain(chain: &[Move]) -> String {
    let steps: Vec<String> = chain.iter().map(Move::to_string).collect();
    format!("[{}]", steps.join(", "))
}

/// Console session over any line source and sink.
pub struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Plays until someone wins. Returns `None` if the input runs out first.
    pub fn play<G: Rng>(
        &mut self,
        mut board: Board,
        settings: Settings,
        rng: &mut G,
    ) -> io::Result<Option<Player>> {
        let mut player = Player::White;

        loop {
            writeln!(self.out, "{board}")?;

            if legal_moves(&board, player).is_empty() {
                writeln!(
                    self.out,
                    "Player {player} has no valid moves. Player {} wins!",
                    player.other()
                )?;
                return Ok(Some(self.finish(player.other())));
            }
            if board.count(player.other()) == 0 {
                writeln!(self.out, "Player {player} wins!")?;
                return Ok(Some(self.finish(player)));
            }

            let ai = settings.ai.filter(|_| player == Player::Black);
            if let Some(strategy) = ai {
                writeln!(self.out, "AI is thinking...")?;
                let Some(mv) =
                    choose_move(&board, player, strategy, settings.depth, settings.iterations, rng)
                else {
                    writeln!(self.out, "AI couldn't find a valid move. Game ends.")?;
                    return Ok(Some(self.finish(player.other())));
                };
                let chain = resolve_capture_chain(&mut board, mv, player);
                debug!(%strategy, steps = chain.len(), "ai turn");
                writeln!(self.out, "AI moves: {}", format_chain(&chain))?;
            } else {
                let Some(mv) = self.read_human_move(&board, player)? else {
                    return Ok(None);
                };
                let chain = resolve_capture_chain(&mut board, mv, player);
                if chain.len() > 1 {
                    writeln!(self.out, "Multiple captures made: {}", format_chain(&chain))?;
                }
            }

            player = player.other();
        }
    }

    fn finish(&self, winner: Player) -> Player {
        info!(%winner, "game over");
        winner
    }

    /// Prompts until the player enters a legal first step of a turn.
    fn read_human_move(&mut self, board: &Board, player: Player) -> io::Result<Option<Move>> {
        let mandatory = has_any_capture(board, player);

        loop {
            let Some(line) =
                self.prompt(&format!("Player {player}, enter piece to move (row col): "))?
            else {
                return Ok(None);
            };
            let Some((from_row, from_col)) = parse_square(&line) else {
                writeln!(self.out, "Invalid input. Try again.")?;
                continue;
            };
            if board.get(from_row, from_col).map(|p| p.color) != Some(player) {
                writeln!(self.out, "Not your piece.")?;
                continue;
            }

            let Some(line) = self.prompt("Enter destination (row col): ")? else {
                return Ok(None);
            };
            let Some((to_row, to_col)) = parse_square(&line) else {
                writeln!(self.out, "Invalid input. Try again.")?;
                continue;
            };

            let mv = Move::new(from_row, from_col, to_row, to_col);
            let legality = is_legal_move(board, player, mv, mandatory);
            if mandatory && !legality.is_capture() {
                writeln!(self.out, "You must make a capture move.")?;
                continue;
            }
            if !legality.is_legal() {
                writeln!(self.out, "Invalid move.")?;
                continue;
            }
            return Ok(Some(mv));
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
