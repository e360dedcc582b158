//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of one of the two players: `PlayerId(0)` is the first
//! identity given at construction, `PlayerId(1)` the second.
//!
//! ## PlayerMap
//!
//! Per-player storage with one entry per seat, indexable by `PlayerId`.
//!
//! ## Players
//!
//! The roster of the two `(name, color)` identities. Names and colors are
//! checked for uniqueness when the roster is built.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::SetupError;
use crate::board::PieceColor;

/// Number of players in every game.
pub const PLAYER_COUNT: usize = 2;

/// Seat index of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "PlayerId must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use focus_engine::core::{PlayerId, PlayerMap};
///
/// let mut reserve: PlayerMap<u32> = PlayerMap::with_value(0);
/// reserve[PlayerId::new(1)] += 2;
/// assert_eq!(reserve[PlayerId::new(0)], 0);
/// assert_eq!(reserve[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap from the first and second seat's values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: vec![first, second],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Find the first player whose entry satisfies `pred`.
    pub fn position(&self, pred: impl Fn(&T) -> bool) -> Option<PlayerId> {
        self.data
            .iter()
            .position(pred)
            .map(|i| PlayerId(i as u8))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A named player and the color they control for the whole game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: PieceColor,
}

impl Player {
    /// Create a new player identity.
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl<S: Into<String>> From<(S, PieceColor)> for Player {
    fn from((name, color): (S, PieceColor)) -> Self {
        Self::new(name, color)
    }
}

/// The two registered identities with name lookup.
#[derive(Clone, Debug)]
pub struct Players {
    seats: PlayerMap<Player>,
    by_name: FxHashMap<String, PlayerId>,
}

impl Players {
    /// Build a roster, rejecting shared names or shared colors.
    pub fn new(first: Player, second: Player) -> Result<Self, SetupError> {
        if first.name == second.name {
            return Err(SetupError::DuplicateName(first.name));
        }
        if first.color == second.color {
            return Err(SetupError::DuplicateColor(first.color));
        }

        let mut by_name = FxHashMap::default();
        by_name.insert(first.name.clone(), PlayerId(0));
        by_name.insert(second.name.clone(), PlayerId(1));

        Ok(Self {
            seats: PlayerMap::from_pair(first, second),
            by_name,
        })
    }

    /// Look up a player by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).copied()
    }

    /// Get a player's identity.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &Player {
        &self.seats[player]
    }

    /// Seat that plays `color`.
    #[must_use]
    pub fn id_of_color(&self, color: PieceColor) -> PlayerId {
        match self.seats.position(|p| p.color == color) {
            Some(id) => id,
            None => unreachable!("both colors are always assigned"),
        }
    }

    /// Iterate over `(PlayerId, &Player)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.seats.iter()
    }
}
