use crate::{Board, Coordinate, PlayerId, FREE};

/// The number of probes taken around a cell by [`probes()`].
pub const NUM_PROBES: usize = 12;

/// Two cells that, together with the probed cell, form a line of three.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    pub first: Coordinate,
    pub second: Coordinate,
}

/// What a [`Probe`] found on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// Both cells are free.
    Empty,
    /// One cell belongs to the player, the other one is free.
    OneSided(PlayerId),
    /// Both cells belong to the player, who would complete the line by
    /// moving on the probed cell.
    Same(PlayerId),
    /// At least one cell is outside of the board, or the two cells belong to
    /// different players. Nobody can complete this line.
    MixedOrOutOfBounds,
}

impl Line {
    /// The player holding cells on this line, if they could still complete it.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Line::OneSided(player) | Line::Same(player) => Some(player),
            Line::Empty | Line::MixedOrOutOfBounds => None,
        }
    }
}

/// Returns the twelve lines of three through `start`, as pairs of the other two cells.
///
/// The eight compass directions are visited column-wise, from `(-1, -1)` to
/// `(1, 1)`. Each contributes the cells at distance one and two from `start`.
/// For directions with a non-negative `dx`, except straight up, the pair of
/// neighbours on opposite sides of `start` follows right after, so that each
/// of the four axes through `start` is probed once in the middle.
pub fn probes(start: Coordinate) -> [Probe; NUM_PROBES] {
    let mut probes = [Probe {
        first: start,
        second: start,
    }; NUM_PROBES];
    let mut idx = 0;
    for dx in -1..=1 {
        for dy in -1..=1 {
            if (dx, dy) == (0, 0) {
                continue;
            }
            probes[idx] = Probe {
                first: start.shift(dx, dy),
                second: start.shift(2 * dx, 2 * dy),
            };
            idx += 1;
            if dx > -1 && (dx, dy) != (0, -1) {
                probes[idx] = Probe {
                    first: start.shift(-dx, -dy),
                    second: start.shift(dx, dy),
                };
                idx += 1;
            }
        }
    }
    debug_assert_eq!(idx, NUM_PROBES);
    probes
}

pub fn classify(board: &Board, probe: Probe) -> Line {
    let size = board.size();
    if !probe.first.in_bounds(size, size) || !probe.second.in_bounds(size, size) {
        return Line::MixedOrOutOfBounds;
    }
    match (board.get_player(probe.first), board.get_player(probe.second)) {
        (FREE, FREE) => Line::Empty,
        (FREE, player) | (player, FREE) => Line::OneSided(player),
        (p1, p2) if p1 == p2 => Line::Same(p1),
        _ => Line::MixedOrOutOfBounds,
    }
}

/// Classifies all [`probes()`] around `start`, in the same order.
pub fn surroundings(board: &Board, start: Coordinate) -> [Line; NUM_PROBES] {
    probes(start).map(|probe| classify(board, probe))
}
