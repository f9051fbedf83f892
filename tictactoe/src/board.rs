use crate::{Coordinate, IllegalMove};

/// Identifies a player. Players are numbered from 1, see [`FREE`] for the value of empty cells.
pub type PlayerId = u32;

/// The occupant of a cell nobody has moved on yet.
pub const FREE: PlayerId = 0;

/// How many equal cells in a row, column or diagonal win the game.
pub const WINNING_LINE_LENGTH: i32 = 3;

/// The directions [`Board::winner()`] walks from every cell, in scan order.
///
/// The opposite directions are not needed, since those lines are found when
/// starting from their other end.
const WINNING_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// A square board for `n` players, with sides of length `n + 1`.
///
/// Every cell holds its occupant, which is [`FREE`] until some player moves
/// there. Once taken, a cell never changes hands again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: i32,
    /// Indexed as `cells[x][y]`.
    cells: Vec<Vec<PlayerId>>,
}

impl Board {
    /// Creates an empty board for the given number of players.
    ///
    /// Panics if there are no players.
    pub fn new(num_players: u32) -> Self {
        assert!(num_players > 0, "A board needs at least one player");
        let size = i32::try_from(num_players + 1).expect("Too many players for one board");
        let side = size as usize;
        Self {
            size,
            cells: vec![vec![FREE; side]; side],
        }
    }

    /// The length of each side of the board.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether nobody moved on `c` yet.
    ///
    /// Like [`Self::get_player()`], this does not check bounds and panics for
    /// coordinates outside of the board.
    pub fn is_free(&self, c: Coordinate) -> bool {
        self.get_player(c) == FREE
    }

    /// The player that moved on `c`, or [`FREE`].
    ///
    /// Panics if `c` is outside of the board.
    pub fn get_player(&self, c: Coordinate) -> PlayerId {
        self.cells[c.x as usize][c.y as usize]
    }

    /// Records that `player` moved on `c`.
    ///
    /// Valid players are those between 1 and `size - 1`. When an error is
    /// returned, the board is left unchanged.
    pub fn add_move(&mut self, c: Coordinate, player: PlayerId) -> Result<(), IllegalMove> {
        if !c.in_bounds(self.size, self.size) {
            return Err(IllegalMove::OutOfBounds { position: c });
        }
        if player == FREE || player >= self.size as PlayerId {
            return Err(IllegalMove::InvalidPlayer { player });
        }
        let occupant = self.get_player(c);
        if occupant != FREE {
            return Err(IllegalMove::CellOccupied {
                position: c,
                occupant,
            });
        }
        self.cells[c.x as usize][c.y as usize] = player;
        Ok(())
    }

    /// Whether every cell has been taken.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|column| column.iter().all(|&occupant| occupant != FREE))
    }

    /// Returns the player with three in a row, if there is one.
    ///
    /// Lines are looked for from every cell in scan order (see [`Self::cells()`]),
    /// and the first one found decides the winner.
    pub fn winner(&self) -> Option<PlayerId> {
        for (start, player) in self.cells() {
            if player == FREE {
                continue;
            }
            for (dx, dy) in WINNING_DIRECTIONS {
                if self.has_line(start, player, dx, dy) {
                    return Some(player);
                }
            }
        }
        None
    }

    // Internal helper checking the cells following `start` in one direction.
    fn has_line(&self, start: Coordinate, player: PlayerId, dx: i32, dy: i32) -> bool {
        (1..WINNING_LINE_LENGTH).all(|i| {
            let c = start.shift(i * dx, i * dy);
            c.in_bounds(self.size, self.size) && self.get_player(c) == player
        })
    }

    /// All cells with their occupants, column by column from the left and
    /// each column from the top.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, PlayerId)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, &occupant)| (Coordinate::new(x as i32, y as i32), occupant))
        })
    }

    /// The free cells, in the same order as [`Self::cells()`].
    pub fn free_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells()
            .filter(|&(_, occupant)| occupant == FREE)
            .map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    const ALL_DIRECTIONS: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    // Looks at every line of three in every direction, without any shortcuts.
    // The winners are listed in scan order of the line's starting cell.
    fn winners_brute_force(board: &Board) -> Vec<PlayerId> {
        let size = board.size();
        let mut winners = Vec::new();
        for (start, player) in board.cells() {
            for (dx, dy) in ALL_DIRECTIONS {
                let line = [start, start.shift(dx, dy), start.shift(2 * dx, 2 * dy)];
                if player != FREE
                    && line
                        .iter()
                        .all(|c| c.in_bounds(size, size) && board.get_player(*c) == player)
                {
                    winners.push(player);
                }
            }
        }
        winners
    }

    fn board_with_moves(num_players: u32, moves: &[(i32, i32, PlayerId)]) -> Board {
        let mut board = Board::new(num_players);
        for &(x, y, player) in moves {
            board.add_move(Coordinate::new(x, y), player).unwrap();
        }
        board
    }

    quickcheck! {
        fn full_iff_no_free_cell(board: Board) -> bool {
            board.is_full() == board.cells().all(|(_, occupant)| occupant != FREE)
        }

        fn winner_matches_brute_force(board: Board) -> bool {
            // Every line is found from its earlier end first, so the first
            // hit in scan order is the one that decides.
            board.winner() == winners_brute_force(&board).first().copied()
        }

        fn out_of_bounds_move_never_mutates(board: Board, c: Coordinate) -> bool {
            let mut copy = board.clone();
            if c.in_bounds(board.size(), board.size()) {
                return true;
            }
            copy.add_move(c, 1) == Err(IllegalMove::OutOfBounds { position: c }) && copy == board
        }

        fn invalid_player_never_mutates(board: Board, offset: u8) -> bool {
            let mut copy = board.clone();
            let c = Coordinate::new(0, 0);
            let too_large = board.size() as PlayerId + PlayerId::from(offset);
            copy.add_move(c, FREE) == Err(IllegalMove::InvalidPlayer { player: FREE })
                && copy.add_move(c, too_large) == Err(IllegalMove::InvalidPlayer { player: too_large })
                && copy == board
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(2);
        assert_eq!(board.size(), 3);
        assert_eq!(board.free_cells().count(), 9);
        assert!(!board.is_full());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn add_move_records_player() {
        let mut board = Board::new(3);
        let c = Coordinate::new(3, 1);
        assert!(board.is_free(c));
        board.add_move(c, 3).unwrap();
        assert!(!board.is_free(c));
        assert_eq!(board.get_player(c), 3);
        assert_eq!(board.free_cells().count(), 15);
    }

    #[test]
    fn player_limit_is_tied_to_board_size() {
        let mut board = Board::new(2);
        assert_eq!(
            board.add_move(Coordinate::new(0, 0), 3),
            Err(IllegalMove::InvalidPlayer { player: 3 })
        );
        assert!(board.add_move(Coordinate::new(0, 0), 2).is_ok());
    }

    #[test]
    fn out_of_bounds_is_checked_before_player() {
        let mut board = Board::new(2);
        let c = Coordinate::new(-1, 0);
        assert_eq!(
            board.add_move(c, 0),
            Err(IllegalMove::OutOfBounds { position: c })
        );
    }

    #[test]
    fn occupied_cell_cannot_change_hands() {
        let mut board = board_with_moves(2, &[(1, 1, 1)]);
        let c = Coordinate::new(1, 1);
        assert_eq!(
            board.add_move(c, 2),
            Err(IllegalMove::CellOccupied {
                position: c,
                occupant: 1
            })
        );
        assert_eq!(board.get_player(c), 1);
    }

    #[test]
    fn full_board() {
        let mut board = Board::new(1);
        for (i, c) in [(0, 0), (0, 1), (1, 0)].into_iter().enumerate() {
            board.add_move(c.into(), 1).unwrap();
            assert!(!board.is_full(), "full after {} moves", i + 1);
        }
        board.add_move(Coordinate::new(1, 1), 1).unwrap();
        assert!(board.is_full());
    }

    #[test]
    fn winning_lines() {
        // Column
        let board = board_with_moves(2, &[(2, 0, 2), (2, 1, 2), (2, 2, 2)]);
        assert_eq!(board.winner(), Some(2));
        // Row
        let board = board_with_moves(3, &[(1, 3, 1), (2, 3, 1), (3, 3, 1)]);
        assert_eq!(board.winner(), Some(1));
        // Diagonal
        let board = board_with_moves(3, &[(1, 0, 3), (2, 1, 3), (3, 2, 3)]);
        assert_eq!(board.winner(), Some(3));
        // Anti-diagonal
        let board = board_with_moves(2, &[(2, 0, 1), (1, 1, 1), (0, 2, 1)]);
        assert_eq!(board.winner(), Some(1));
    }

    #[test]
    fn no_winner_for_short_or_broken_lines() {
        let board = board_with_moves(2, &[(0, 0, 1), (1, 0, 1), (2, 1, 1)]);
        assert_eq!(board.winner(), None);
        let board = board_with_moves(2, &[(0, 0, 1), (1, 0, 2), (2, 0, 1)]);
        assert_eq!(board.winner(), None);
        // Two in a row on the smallest board can never win
        let board = board_with_moves(1, &[(0, 0, 1), (1, 1, 1), (0, 1, 1)]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn first_line_in_scan_order_wins() {
        let board = board_with_moves(
            3,
            &[
                (1, 0, 1),
                (1, 1, 1),
                (1, 2, 1),
                (0, 0, 2),
                (0, 1, 2),
                (0, 2, 2),
            ],
        );
        assert_eq!(board.winner(), Some(2));
    }

    #[test]
    fn clone_is_independent() {
        let original = board_with_moves(2, &[(0, 0, 1)]);
        let mut copy = original.clone();
        copy.add_move(Coordinate::new(1, 1), 2).unwrap();
        assert!(original.is_free(Coordinate::new(1, 1)));
        assert_eq!(copy.get_player(Coordinate::new(0, 0)), 1);
    }

    #[test]
    fn cells_scan_columns_first() {
        let board = Board::new(1);
        let order: Vec<Coordinate> = board.cells().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1)
            ]
        );
    }
}
