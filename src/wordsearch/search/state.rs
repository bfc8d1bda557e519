use ndarray::Array2;

use crate::wordsearch::board::Board;
use crate::wordsearch::util::Position;

/// Mutable backtracking context for one search over a board.
///
/// The assembled word is a single reusable buffer. Each push records the
/// buffer length from before the tile was appended and each pop truncates
/// back to it, so the buffer always spells the current path exactly.
#[derive(Debug, Clone)]
pub(crate) struct SearchState<'b> {
    board: &'b Board,
    visited: Array2<bool>,
    path: Vec<Position>,
    /// Length of `assembled` before each path entry was appended
    marks: Vec<usize>,
    assembled: String,
}

impl<'b> SearchState<'b> {
    pub fn new(board: &'b Board) -> Self {
        let size = board.size();
        Self {
            board,
            visited: Array2::from_elem((size, size), false),
            path: Vec::with_capacity(size * size),
            marks: Vec::with_capacity(size * size),
            assembled: String::new(),
        }
    }

    pub fn board(&self) -> &'b Board {
        self.board
    }

    /// Last position on the path, if any
    pub fn head(&self) -> Option<Position> {
        self.path.last().copied()
    }

    /// Concatenation of the tiles along the current path
    pub fn assembled(&self) -> &str {
        &self.assembled
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.visited.get((pos.row, pos.col)).copied().unwrap_or(false)
    }

    /// True when nothing is visited and the path is empty
    pub fn is_clear(&self) -> bool {
        self.path.is_empty() && self.assembled.is_empty() && self.visited.iter().all(|v| !v)
    }

    /// Appends `pos` to the path if it is on the board and `keep` accepts the
    /// extended word. Otherwise the state is left exactly as it was and false is returned.
    pub fn extend_if(&mut self, pos: Position, keep: impl FnOnce(&str) -> bool) -> bool {
        let board = self.board;
        let tile = match board.tile_at(pos) {
            Ok(tile) => tile,
            Err(e) => {
                log::warn!("Refusing to extend the search path: {e}");
                return false;
            }
        };
        let mark = self.assembled.len();
        self.assembled.push_str(tile);
        if !keep(&self.assembled) {
            self.assembled.truncate(mark);
            return false;
        }
        self.visited[(pos.row, pos.col)] = true;
        self.path.push(pos);
        self.marks.push(mark);
        true
    }

    /// Removes the last position from the path and its tile from the assembled word
    pub fn retract(&mut self) -> Option<Position> {
        let pos = self.path.pop()?;
        let mark = self.marks.pop().unwrap_or(0);
        self.assembled.truncate(mark);
        self.visited[(pos.row, pos.col)] = false;
        Some(pos)
    }

    /// The current path as row-major board indices
    pub fn linear_path(&self) -> Vec<usize> {
        self.path
            .iter()
            .map(|&p| self.board.linear_index(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_and_retract_roll_back_exactly() {
        let board = Board::new(&["QU", "I", "T", "E"]).unwrap();
        let mut state = SearchState::new(&board);
        assert!(state.is_clear());

        assert!(state.extend_if(Position::new(0, 0), |_| true));
        assert!(state.extend_if(Position::new(0, 1), |_| true));
        assert_eq!(state.assembled(), "QUI");
        assert!(state.is_visited(Position::new(0, 0)));
        assert_eq!(state.linear_path(), vec![0, 1]);

        assert_eq!(state.retract(), Some(Position::new(0, 1)));
        assert_eq!(state.assembled(), "QU");
        assert!(!state.is_visited(Position::new(0, 1)));

        assert_eq!(state.retract(), Some(Position::new(0, 0)));
        assert_eq!(state.retract(), None);
        assert!(state.is_clear());
    }

    #[test]
    fn test_rejected_extension_leaves_state_untouched() {
        let board = Board::new(&["C", "A", "T", "S"]).unwrap();
        let mut state = SearchState::new(&board);
        assert!(state.extend_if(Position::new(0, 0), |_| true));

        let mut seen = String::new();
        let kept = state.extend_if(Position::new(1, 1), |w| {
            seen = w.to_string();
            false
        });
        assert!(!kept);
        assert_eq!(seen, "CS");
        assert_eq!(state.assembled(), "C");
        assert_eq!(state.linear_path(), vec![0]);
        assert!(!state.is_visited(Position::new(1, 1)));
    }

    #[test]
    fn test_off_board_extension_is_refused() {
        let board = Board::new(&["C", "A", "T", "S"]).unwrap();
        let mut state = SearchState::new(&board);
        assert!(!state.extend_if(Position::new(5, 5), |_| true));
        assert!(state.is_clear());
        assert!(!state.is_visited(Position::new(5, 5)));

        assert!(state.extend_if(Position::new(1, 0), |_| true));
        assert!(!state.extend_if(Position::new(2, 0), |_| true));
        assert_eq!(state.assembled(), "T");
        assert_eq!(state.linear_path(), vec![2]);
    }
}
