use super::{walk, Flow, PathVisitor, SearchState};
use crate::wordsearch::board::Board;
use crate::wordsearch::util::normalize;

/// Finds a path spelling one target word.
///
/// Start cells are tried in row-major order and neighbours in the order of
/// [`Board::neighbors`]; the first complete path wins. That is not
/// necessarily the shortest path or the lexicographically smallest one.
#[derive(Debug, Clone, Copy)]
pub struct Locator<'a> {
    board: &'a Board,
}

impl<'a> Locator<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Row-major indices of a path spelling `target` (case-insensitive), or empty if there is none
    pub fn locate(&self, target: &str) -> Vec<usize> {
        let mut finder = PathFinder {
            target: normalize(target),
            found: Vec::new(),
        };
        if walk(self.board, &mut finder) == Flow::Stop {
            log::debug!("{} found at {:?}", finder.target, finder.found);
        } else {
            log::debug!("{} is not on the board", finder.target);
        }
        finder.found
    }
}

struct PathFinder {
    target: String,
    found: Vec<usize>,
}

impl PathVisitor for PathFinder {
    fn can_extend(&self, assembled: &str) -> bool {
        self.target.starts_with(assembled)
    }

    fn visit(&mut self, state: &SearchState<'_>) -> Flow {
        if state.assembled() == self.target {
            self.found = state.linear_path();
            Flow::Stop
        } else {
            Flow::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locates_adjacent_path() {
        let board = Board::new(&["C", "A", "X", "T"]).unwrap();
        let locator = Locator::new(&board);
        assert_eq!(locator.locate("CAT"), vec![0, 1, 3]);
        assert_eq!(locator.locate("cat"), vec![0, 1, 3]);
        assert_eq!(locator.locate("TAC"), vec![3, 1, 0]);
        assert!(locator.locate("CATS").is_empty());
        assert!(locator.locate("CC").is_empty());
    }

    #[test]
    fn test_single_tile_word() {
        let board = Board::new(&["QU", "A", "B", "C"]).unwrap();
        let locator = Locator::new(&board);
        assert_eq!(locator.locate("qu"), vec![0]);
        assert_eq!(locator.locate("B"), vec![2]);
        assert_eq!(locator.locate("QUA"), vec![0, 1]);
        assert!(locator.locate("Q").is_empty());
        assert!(locator.locate("").is_empty());
    }

    #[test]
    fn test_non_adjacent_tiles_are_not_joined() {
        // A and T are two columns apart
        let board = Board::new(&["A", "X", "T", "X", "X", "X", "X", "X", "X"]).unwrap();
        let locator = Locator::new(&board);
        assert!(locator.locate("AT").is_empty());
        assert!(locator.locate("AXT").len() == 3);
    }

    #[test]
    fn test_backtracks_out_of_dead_ends() {
        // From (0,0) the first neighbour tried is the B at (0,1), which dead-ends.
        // The walk must roll back and succeed through the B at (1,0).
        let board = Board::new(&["A", "B", "X", "B", "X", "X", "C", "X", "X"]).unwrap();
        let locator = Locator::new(&board);
        let path = locator.locate("ABC");
        assert_eq!(board.spell(&path).unwrap(), "ABC");
        assert_eq!(path, vec![0, 3, 6]);
    }

    #[test]
    fn test_first_path_in_row_major_order_wins() {
        let board = Board::new(&["A", "B", "B", "A"]).unwrap();
        let locator = Locator::new(&board);
        assert_eq!(locator.locate("AB"), vec![0, 1]);
        assert_eq!(locator.locate("BA"), vec![1, 0]);
    }
}
