//! Reading the human player's move from a line of text

use std::io::{BufRead, Write};

use nim_engine::{GameState, Move};

/// Why a line could not be turned into a legal move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected two numbers: <pile> <amount>")]
    Format,

    #[error("there is no pile {0}")]
    NoSuchPile(usize),

    #[error("cannot remove {amount} from pile {pile}")]
    Illegal { pile: usize, amount: u32 },
}

/// Parse `<pile> <amount>` with a 1-based pile number and check it against
/// `state`
pub fn parse_move(line: &str, state: &GameState) -> Result<Move, ParseMoveError> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let (Some(pile), Some(amount), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseMoveError::Format);
    };
    let pile: usize = pile.parse().map_err(|_| ParseMoveError::Format)?;
    let amount: u32 = amount.parse().map_err(|_| ParseMoveError::Format)?;

    if pile == 0 || pile > state.piles().len() {
        return Err(ParseMoveError::NoSuchPile(pile));
    }
    let m = Move::new(pile - 1, amount);
    if !state.is_valid_move(&m) {
        return Err(ParseMoveError::Illegal { pile, amount });
    }
    Ok(m)
}

/// Prompt until a legal move is entered. Returns `None` at end of input.
pub fn read_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    state: &GameState,
) -> std::io::Result<Option<Move>> {
    let mut line = String::new();
    loop {
        write!(output, "Your move (<pile> <amount>): ")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match parse_move(line.trim(), state) {
            Ok(m) => return Ok(Some(m)),
            Err(e) => writeln!(output, "\t{}", e)?,
        }
    }
}
