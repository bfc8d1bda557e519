//! Depth-first traversal of simple paths on a board.
//!
//! Exhaustive enumeration and single-word location walk the board the same
//! way and only differ in when a branch is abandoned and what happens when a
//! path spells something interesting. Both plug into `walk_from` through
//! the `PathVisitor` trait.

mod enumerate;
mod locate;
mod state;

pub use self::enumerate::Enumerator;
pub use self::locate::Locator;
pub(crate) use self::state::SearchState;

use super::board::Board;
use super::util::Position;

/// Whether a traversal should keep going after a visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

pub(crate) trait PathVisitor {
    /// Whether a path spelling `assembled` may still lead somewhere.
    /// Branches for which this is false are neither marked nor explored.
    fn can_extend(&self, assembled: &str) -> bool;

    /// Called every time the path grows (the start cell included)
    fn visit(&mut self, state: &SearchState<'_>) -> Flow;
}

/// Explores every simple path starting at `start`.
///
/// The start cell is always visited; the walk only continues past it when
/// the visitor accepts its tile as a prefix. The state is rolled back to empty
/// before returning, whether or not the visitor stopped the walk.
pub(crate) fn walk_from<V: PathVisitor>(state: &mut SearchState<'_>, start: Position, visitor: &mut V) -> Flow {
    debug_assert!(state.is_clear(), "search state leaked from a previous root");

    state.extend_if(start, |_| true);
    let mut flow = visitor.visit(state);
    if flow == Flow::Continue && visitor.can_extend(state.assembled()) {
        flow = descend(state, visitor);
    }
    state.retract();

    debug_assert!(state.is_clear());
    flow
}

/// Walks from each cell of the board in row-major order until the visitor stops
pub(crate) fn walk<V: PathVisitor>(board: &Board, visitor: &mut V) -> Flow {
    let mut state = SearchState::new(board);
    for start in board.positions() {
        if walk_from(&mut state, start, visitor) == Flow::Stop {
            return Flow::Stop;
        }
    }
    Flow::Continue
}

fn descend<V: PathVisitor>(state: &mut SearchState<'_>, visitor: &mut V) -> Flow {
    let head = match state.head() {
        Some(head) => head,
        None => return Flow::Continue,
    };

    for next in state.board().neighbors(head) {
        if state.is_visited(next) {
            continue;
        }
        // Prune before marking: nothing the visitor wants starts with this string
        if !state.extend_if(next, |w| visitor.can_extend(w)) {
            continue;
        }
        log::trace!("extended to {} spelling {}", next, state.assembled());

        let mut flow = visitor.visit(state);
        if flow == Flow::Continue {
            flow = descend(state, visitor);
        }
        state.retract();

        if flow == Flow::Stop {
            return Flow::Stop;
        }
    }
    Flow::Continue
}
