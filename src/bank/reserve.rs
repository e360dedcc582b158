//! Per-player reserve and captured counters.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, GameResult};
use crate::core::player::{PlayerId, PlayerMap, Players};

/// Which counter a credit applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Counter {
    /// Own-color pieces available for placement.
    Reserve,
    /// Opponent-color pieces taken out of play.
    Captured,
}

/// One player's counters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub reserve: u32,
    pub captured: u32,
}

impl Account {
    fn counter_mut(&mut self, counter: Counter) -> &mut u32 {
        match counter {
            Counter::Reserve => &mut self.reserve,
            Counter::Captured => &mut self.captured,
        }
    }
}

/// Reserve and captured counts for both players, addressed by name.
///
/// ```
/// use focus_engine::bank::{Counter, ReserveBank};
/// use focus_engine::board::PieceColor;
/// use focus_engine::core::{Player, Players};
///
/// let players = Players::new(
///     Player::new("PlayerA", PieceColor::Red),
///     Player::new("PlayerB", PieceColor::Green),
/// ).unwrap();
/// let mut bank = ReserveBank::new(&players);
///
/// bank.credit(Counter::Reserve, "PlayerA", 2).unwrap();
/// bank.debit_reserve("PlayerA").unwrap();
/// assert_eq!(bank.reserve_of("PlayerA"), Ok(1));
/// assert!(bank.captured_of("Nobody").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveBank {
    accounts: PlayerMap<Account>,
}

impl ReserveBank {
    /// Open zeroed accounts for both registered players.
    #[must_use]
    pub fn new(players: &Players) -> Self {
        Self {
            accounts: PlayerMap::new(|p| Account {
                name: players.get(p).name.clone(),
                reserve: 0,
                captured: 0,
            }),
        }
    }

    fn seat(&self, name: &str) -> GameResult<PlayerId> {
        self.accounts
            .position(|a| a.name == name)
            .ok_or_else(|| GameError::UnknownPlayer { name: name.to_string() })
    }

    /// Add `amount` to one of a player's counters.
    pub fn credit(&mut self, counter: Counter, name: &str, amount: u32) -> GameResult<()> {
        let seat = self.seat(name)?;
        *self.accounts[seat].counter_mut(counter) += amount;
        Ok(())
    }

    /// Take one piece out of a player's reserve.
    pub fn debit_reserve(&mut self, name: &str) -> GameResult<()> {
        let seat = self.seat(name)?;
        let account = &mut self.accounts[seat];
        if account.reserve == 0 {
            return Err(GameError::EmptyReserve { player: account.name.clone() });
        }
        account.reserve -= 1;
        Ok(())
    }

    /// Pieces in a player's reserve.
    pub fn reserve_of(&self, name: &str) -> GameResult<u32> {
        self.seat(name).map(|p| self.accounts[p].reserve)
    }

    /// Opponent pieces a player has captured.
    pub fn captured_of(&self, name: &str) -> GameResult<u32> {
        self.seat(name).map(|p| self.accounts[p].captured)
    }

    /// Account for a seat.
    #[must_use]
    pub fn account(&self, player: PlayerId) -> &Account {
        &self.accounts[player]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceColor;
    use crate::core::player::Player;

    fn bank() -> ReserveBank {
        let players = Players::new(
            Player::new("PlayerA", PieceColor::Red),
            Player::new("PlayerB", PieceColor::Green),
        )
        .unwrap();
        ReserveBank::new(&players)
    }

    #[test]
    fn test_starts_at_zero() {
        let bank = bank();
        for name in ["PlayerA", "PlayerB"] {
            assert_eq!(bank.reserve_of(name), Ok(0));
            assert_eq!(bank.captured_of(name), Ok(0));
        }
    }

    #[test]
    fn test_credit_counters_independently() {
        let mut bank = bank();

        bank.credit(Counter::Reserve, "PlayerA", 2).unwrap();
        bank.credit(Counter::Captured, "PlayerA", 1).unwrap();
        bank.credit(Counter::Captured, "PlayerB", 3).unwrap();

        assert_eq!(bank.reserve_of("PlayerA"), Ok(2));
        assert_eq!(bank.captured_of("PlayerA"), Ok(1));
        assert_eq!(bank.reserve_of("PlayerB"), Ok(0));
        assert_eq!(bank.captured_of("PlayerB"), Ok(3));
        assert_eq!(bank.account(PlayerId::new(1)).captured, 3);
    }

    #[test]
    fn test_credit_zero_is_noop() {
        let mut bank = bank();
        bank.credit(Counter::Reserve, "PlayerB", 0).unwrap();
        assert_eq!(bank.reserve_of("PlayerB"), Ok(0));
    }

    #[test]
    fn test_debit_reserve() {
        let mut bank = bank();
        bank.credit(Counter::Reserve, "PlayerB", 1).unwrap();

        assert_eq!(bank.debit_reserve("PlayerB"), Ok(()));
        assert_eq!(bank.reserve_of("PlayerB"), Ok(0));
        assert_eq!(
            bank.debit_reserve("PlayerB"),
            Err(GameError::EmptyReserve { player: "PlayerB".into() })
        );
        assert_eq!(bank.reserve_of("PlayerB"), Ok(0));
    }

    #[test]
    fn test_unknown_player() {
        let mut bank = bank();
        let unknown = GameError::UnknownPlayer { name: "PlayerC".into() };

        assert_eq!(bank.credit(Counter::Reserve, "PlayerC", 1), Err(unknown.clone()));
        assert_eq!(bank.debit_reserve("PlayerC"), Err(unknown.clone()));
        assert_eq!(bank.reserve_of("PlayerC"), Err(unknown.clone()));
        assert_eq!(bank.captured_of("PlayerC"), Err(unknown));
    }
}
