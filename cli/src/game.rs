//! Turn loop between a human on a text stream and the computer player

use std::io::{BufRead, Write};

use rand::Rng;

use nim_engine::{GameState, GameVariant};
use nim_tree::NimAi;

use crate::board::render;
use crate::error::CliError;
use crate::prompt::read_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// Winner once `last_mover` has taken the last object
pub fn winner(variant: GameVariant, last_mover: Player) -> Player {
    match variant {
        GameVariant::Normal => last_mover,
        GameVariant::Misere => last_mover.opponent(),
    }
}

/// Play until the board is empty. Returns the winner, or `None` if the human
/// input ran out first.
pub fn play<R: Rng, I: BufRead, W: Write>(
    ai: &mut NimAi<R>,
    mut state: GameState,
    first: Player,
    input: &mut I,
    output: &mut W,
) -> Result<Option<Player>, CliError> {
    let variant = ai.config().variant;
    let height = state.max_pile();
    let mut to_move = first;

    match variant {
        GameVariant::Normal => writeln!(output, "Normal game style selected.")?,
        GameVariant::Misere => writeln!(output, "Misere game style selected.")?,
    }
    write!(output, "{}", render(&state, height))?;
    writeln!(output, "nimSum: {}", state.nim_sum())?;

    while !state.is_terminal() {
        let m = match to_move {
            Player::Human => match read_move(input, output, &state)? {
                Some(m) => {
                    writeln!(output, "\nYour move: \n\t{}", m)?;
                    m
                }
                None => return Ok(None),
            },
            Player::Computer => {
                let m = ai.next_move(&state)?;
                writeln!(output, "\nAI move: \n\t{}", m)?;
                m
            }
        };
        state.apply(&m)?;
        write!(output, "{}", render(&state, height))?;
        writeln!(output, "nimSum: {}", state.nim_sum())?;
        to_move = to_move.opponent();
    }

    let won = winner(variant, to_move.opponent());
    writeln!(output, "\nGame over!")?;
    match won {
        Player::Human => writeln!(output, "You win.")?,
        Player::Computer => writeln!(output, "The computer wins.")?,
    }
    Ok(Some(won))
}
