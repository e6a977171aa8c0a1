use tracing::trace;

use crate::game::{attempt_move, piece_at};
use crate::moves::Move;
use crate::square::Square;
use crate::state::GameState;

/// What a click on the board led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The selected piece moved; the turn passed to the other side.
    Moved(Move),
    /// The selected piece cannot go there. The selection was dropped and the
    /// game is unchanged; the caller gives its invalid-move feedback.
    Rejected(Move),
    /// Nothing selectable was clicked.
    Ignored,
}

/// Selection state of one interactive player seat.
///
/// Click a piece of the side to move to select it, then click a destination.
/// Any second click ends the selection, whether or not it moved.
pub struct Session<'a> {
    game: &'a mut GameState,
    selected: Option<Square>,
}

impl<'a> Session<'a> {
    pub fn new(game: &'a mut GameState) -> Self {
        Session {
            game,
            selected: None,
        }
    }

    pub fn game(&self) -> &GameState {
        self.game
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn click(&mut self, sq: Square) -> ClickOutcome {
        match self.selected.take() {
            None => match piece_at(self.game, sq) {
                Some(p) if p.color == self.game.side_to_move() => {
                    self.selected = Some(sq);
                    ClickOutcome::Selected(sq)
                }
                _ => ClickOutcome::Ignored,
            },
            Some(from) => {
                let mv = Move::new(from, sq);
                if attempt_move(self.game, from, sq) {
                    ClickOutcome::Moved(mv)
                } else {
                    trace!(%mv, "selection dropped");
                    ClickOutcome::Rejected(mv)
                }
            }
        }
    }
}
