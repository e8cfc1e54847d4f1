//! The turn ring.
//!
//! Seats are fixed at construction. Turn order is an index into the seat list
//! plus a direction, so both `advance` and `reverse` are O(1).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Which way play moves around the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Seat 1, 2, 3, ...
    #[default]
    Forward,
    /// Seat 3, 2, 1, ...
    Backward,
}

impl Direction {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Cyclic turn order over a fixed set of seats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOrder {
    seats: Vec<PlayerId>,
    current: usize,
    direction: Direction,
}

impl TurnOrder {
    /// Seats `Player 1..=n`, with `Player 1` to act.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` is zero.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "turn order needs at least one seat");
        Self {
            seats: PlayerId::all(player_count).collect(),
            current: 0,
            direction: Direction::Forward,
        }
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.seats[self.current]
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    fn step(&self, from: usize) -> usize {
        let n = self.seats.len();
        match self.direction {
            Direction::Forward => (from + 1) % n,
            Direction::Backward => (from + n - 1) % n,
        }
    }

    /// Pass the turn to the next seat in the current direction.
    pub fn advance(&mut self) -> PlayerId {
        self.current = self.step(self.current);
        self.current()
    }

    /// Flip direction, then advance once.
    ///
    /// With three seats and `Player 1` to act, `Player 3` acts next. With
    /// two seats the turn passes to the other player.
    pub fn reverse(&mut self) -> PlayerId {
        self.direction = self.direction.flipped();
        self.advance()
    }

    /// Every seat, starting from `start` and following the current direction.
    pub fn order_from(&self, start: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        let first = self.seat_of(start).unwrap_or(self.current);
        std::iter::successors(Some(first), move |&i| Some(self.step(i)))
            .take(self.seats.len())
            .map(move |i| self.seats[i])
    }

    /// Every seat, starting from the current player.
    pub fn acting_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order_from(self.current())
    }

    /// Give the turn back to the first seat. Direction is left alone.
    pub fn reset_to_first_seat(&mut self) {
        self.current = 0;
    }

    /// Make `player` the current player. Returns false for an unknown id.
    pub fn set_current(&mut self, player: PlayerId) -> bool {
        match self.seat_of(player) {
            Some(seat) => {
                self.current = seat;
                true
            }
            None => false,
        }
    }

    /// Seat index of `player`, if seated.
    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<usize> {
        player.seat().filter(|&s| s < self.seats.len())
    }
}
