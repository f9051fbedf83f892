use crate::{Board, Coordinate, PlayerId};

impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_players = u32::from(u8::arbitrary(g) % 5) + 1;
        let mut board = Board::new(num_players);
        // Between 0 (empty board) and 4 (full board) quarters of the cells are taken
        let density = u8::arbitrary(g) % 5;
        let size = board.size();
        for x in 0..size {
            for y in 0..size {
                if u8::arbitrary(g) % 4 < density {
                    let player = PlayerId::from(u8::arbitrary(g)) % num_players + 1;
                    board
                        .add_move(Coordinate::new(x, y), player)
                        .expect("Generated an illegal move");
                }
            }
        }
        board
    }
}

impl quickcheck::Arbitrary for Coordinate {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Mostly near the board, sometimes on it
        Self {
            x: i32::from(i8::arbitrary(g) % 9),
            y: i32::from(i8::arbitrary(g) % 9),
        }
    }
}
