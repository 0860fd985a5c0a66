#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

use crate::game::{ClickOutcome, GameState};
use crate::types::Position;

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct TargetsRequest {
    pub fen: String,
    pub square: String, // Algebraic, e.g. "e2"
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct TargetsResponse {
    pub targets: Vec<String>, // Highlighted squares in algebraic notation
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ClickRequest {
    pub fen: String,
    /// Square already selected by a previous click, if any.
    pub selected: Option<String>,
    pub square: String,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct ClickResponse {
    pub fen: String,                       // Position after the click
    pub moved: Option<(String, String)>,   // (from, to) when the click completed a move
    pub selected: Option<String>,          // New selection, if any
    pub targets: Vec<String>,              // Highlighted targets for the new selection
}

fn parse_square(square: &str) -> Result<Position, String> {
    Position::from_algebraic(square).ok_or_else(|| format!("Invalid square: {}", square))
}

/// Stateless query for presentation layers that hold positions as FEN.
pub fn legal_targets(request: TargetsRequest) -> Result<TargetsResponse, String> {
    let game = GameState::from_fen(&request.fen).map_err(|e| format!("Invalid FEN: {}", e))?;
    let square = parse_square(&request.square)?;

    Ok(TargetsResponse {
        targets: game
            .legal_targets(square)
            .iter()
            .map(|target| target.to_algebraic())
            .collect(),
    })
}

/// Stateless click handler: rebuilds the game from FEN, replays the
/// prior selection, applies the click, and returns the new state.
pub fn click(request: ClickRequest) -> Result<ClickResponse, String> {
    let mut game = GameState::from_fen(&request.fen).map_err(|e| format!("Invalid FEN: {}", e))?;

    if let Some(selected) = &request.selected {
        game.select(parse_square(selected)?);
    }

    let square = parse_square(&request.square)?;
    let outcome = game.click(square).map_err(|e| e.to_string())?;

    let moved = match outcome {
        ClickOutcome::Moved { from, to } => Some((from.to_algebraic(), to.to_algebraic())),
        _ => None,
    };

    let selection = game.selection();

    Ok(ClickResponse {
        fen: game.to_fen(),
        moved,
        selected: selection.origin.map(|origin| origin.to_algebraic()),
        targets: selection
            .targets
            .iter()
            .map(|target| target.to_algebraic())
            .collect(),
    })
}
