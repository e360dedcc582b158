//! Property tests over random operation sequences.
//!
//! Random games are played by picking, for whichever player is due, a
//! stack they control, a direction and a piece count (or a reserve drop).
//! Many generated moves are illegal; those must be rejected atomically.

use proptest::prelude::*;

use focus_engine::{
    Cell, DistanceRule, GameBuilder, GameEngine, PieceColor, RulesConfig, TurnState,
};

const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Clone, Debug)]
struct Step {
    pick: usize,
    direction: usize,
    count: usize,
    drop_from_reserve: bool,
    drop_at: (i32, i32),
}

fn step() -> impl Strategy<Value = Step> {
    (any::<usize>(), 0..4usize, 0..7usize, any::<bool>(), (-1..7i32, -1..7i32)).prop_map(
        |(pick, direction, count, drop_from_reserve, drop_at)| Step {
            pick,
            direction,
            count,
            drop_from_reserve,
            drop_at,
        },
    )
}

fn next_actor(game: &GameEngine) -> &str {
    let (first, second) = ("PlayerA", "PlayerB");
    match game.last_mover() {
        Some(name) if name == first => second,
        _ => first,
    }
}

fn color_of(name: &str) -> PieceColor {
    if name == "PlayerA" {
        PieceColor::Red
    } else {
        PieceColor::Green
    }
}

/// Apply one step for the player who is due. Returns whether it succeeded.
fn play(game: &mut GameEngine, step: &Step) -> bool {
    let actor = next_actor(game).to_string();

    // Drops only with a non-empty reserve.
    if step.drop_from_reserve && game.reserve_of(&actor) != Ok(0) {
        return game.reserved_move(&actor, step.drop_at).is_ok();
    }

    let owned: Vec<Cell> = game
        .board()
        .cells()
        .filter(|(_, s)| s.last() == Some(&color_of(&actor)))
        .map(|(c, _)| c)
        .collect();
    if owned.is_empty() {
        return false;
    }

    let source = owned[step.pick % owned.len()];
    let (dr, dc) = DIRECTIONS[step.direction];
    let distance = step.count.max(1) as i32;
    let destination = Cell::new(source.row + dr * distance, source.col + dc * distance);

    game.move_piece(&actor, source, destination, step.count).is_ok()
}

fn check_sequence(config: RulesConfig, steps: &[Step]) -> Result<(), TestCaseError> {
    let mut game = GameBuilder::new(("PlayerA", PieceColor::Red), ("PlayerB", PieceColor::Green))
        .config(config)
        .build()
        .unwrap();
    let mut successes = 0;

    for step in steps {
        let before = game.snapshot();
        let actor = next_actor(&game).to_string();

        if play(&mut game, step) {
            successes += 1;
            prop_assert_eq!(game.last_mover(), Some(actor.as_str()));
        } else {
            prop_assert_eq!(&game.snapshot(), &before);
        }

        prop_assert_eq!(game.color_total(PieceColor::Red), 18);
        prop_assert_eq!(game.color_total(PieceColor::Green), 18);
        prop_assert!(game.board().max_height() <= 5);
        prop_assert_eq!(game.history().len(), successes);
    }

    if successes == 0 {
        prop_assert_eq!(game.turn_state(), TurnState::NotStarted);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Pieces are never created or destroyed, stacks never stay above five,
    /// and rejected calls never change the game.
    #[test]
    fn test_invariants_exact_distance(steps in prop::collection::vec(step(), 0..150)) {
        check_sequence(RulesConfig::default(), &steps)?;
    }

    /// Same invariants under the legacy distance rule.
    #[test]
    fn test_invariants_up_to_distance(steps in prop::collection::vec(step(), 0..150)) {
        check_sequence(RulesConfig::default().with_distance_rule(DistanceRule::UpTo), &steps)?;
    }

    /// The same inputs always produce the same game.
    #[test]
    fn test_replay_is_deterministic(steps in prop::collection::vec(step(), 0..80)) {
        let mut first = GameEngine::new(("PlayerA", PieceColor::Red), ("PlayerB", PieceColor::Green)).unwrap();
        let mut second = first.clone();

        for step in &steps {
            prop_assert_eq!(play(&mut first, step), play(&mut second, step));
        }
        prop_assert_eq!(first.snapshot(), second.snapshot());
        prop_assert_eq!(first.history(), second.history());
    }
}
