use duel_minigames::compute::Emitter;
use duel_minigames::consts::*;
use duel_minigames::entities::*;
use duel_minigames::levels::LevelKind;
use duel_minigames::orchestrator::{LevelEnd, Match, MatchResult};
use duel_minigames::platform::{InputSnapshot, Platform};
use duel_minigames::render::Frame;
use duel_minigames::GameError;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Replays a fixed set of presses every tick and asks to quit after
/// `quit_after` polls.
struct ScriptedPlatform {
    polls: usize,
    quit_after: usize,
    presses: Vec<Key>,
    presented: usize,
}

impl ScriptedPlatform {
    fn new(quit_after: usize) -> Self {
        Self { polls: 0, quit_after, presses: Vec::new(), presented: 0 }
    }

    fn pressing(mut self, key: Key) -> Self {
        self.presses.push(key);
        self
    }
}

impl Platform for ScriptedPlatform {
    fn poll(&mut self) -> Result<InputSnapshot, GameError> {
        self.polls += 1;
        Ok(InputSnapshot {
            pressed: self.presses.clone(),
            quit: self.polls > self.quit_after,
            ..Default::default()
        })
    }

    fn present(&mut self, _frame: &Frame) -> Result<(), GameError> {
        self.presented += 1;
        Ok(())
    }

    fn wait_next_tick(&mut self) {}
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn immediate_quit_aborts_the_match() {
    let mut rng = seeded_rng();
    let mut platform = ScriptedPlatform::new(0);
    let mut game = Match::new();

    let result = game.run(&mut platform, &mut rng).unwrap();
    assert_eq!(result, MatchResult::Aborted { scores: [0, 0] });
    assert_eq!(platform.presented, 0);
}

#[test]
fn quit_takes_effect_at_a_tick_boundary() {
    let mut rng = seeded_rng();
    let mut platform = ScriptedPlatform::new(50);
    let mut game = Match::new();

    let result = game.run(&mut platform, &mut rng).unwrap();
    assert_eq!(result, MatchResult::Aborted { scores: [0, 0] });
    assert_eq!(platform.presented, 50);
    assert_eq!(game.state.level_index, 0);
}

#[test]
fn reset_restores_lives_and_clears_shots() {
    let mut rng = seeded_rng();
    let mut game = Match::new();
    for d in &mut game.duelists {
        d.try_emit(&mut rng);
        d.lives = 0;
        d.cooldown = 9;
    }
    game.reset_duelists();
    for d in &game.duelists {
        assert_eq!(d.lives, DUELIST_LIVES);
        assert_eq!(d.cooldown, 0);
        assert!(d.shots.is_empty());
    }
}

#[test]
fn level_entry_resets_even_when_quitting() {
    let mut rng = seeded_rng();
    let mut platform = ScriptedPlatform::new(0);
    let mut game = Match::new();
    game.duelists[0].lives = 0;
    game.duelists[1].lives = 1;

    let end = game.run_level(LevelKind::BossFight, &mut platform, &mut rng).unwrap();
    assert_eq!(end, LevelEnd::Quit);
    assert!(game.duelists.iter().all(|d| d.lives == DUELIST_LIVES));
}

#[test]
fn reaction_level_goes_to_the_trigger_happy_duelist() {
    // Duelist one mashes fire every tick; the first green phase decides it.
    let mut rng = seeded_rng();
    let mut platform = ScriptedPlatform::new(10_000).pressing(Key::Space);
    let mut game = Match::new();

    let end = game.run_level(LevelKind::Reaction, &mut platform, &mut rng).unwrap();
    assert_eq!(end, LevelEnd::Finished(Outcome::Won(Side::One)));
    assert_eq!(platform.presented, platform.polls);
    assert!(platform.polls <= (4 * FPS + 100) as usize);
}

#[test]
fn sweeping_every_level_finishes_five_nil() {
    let mut rng = seeded_rng();
    let mut platform = ScriptedPlatform::new(usize::MAX).pressing(Key::Space);
    let mut game = Match::new();

    let result = game.run_levels(&[LevelKind::Reaction; 5], &mut platform, &mut rng).unwrap();
    assert_eq!(
        result,
        MatchResult::Finished { outcome: Outcome::Won(Side::One), scores: [5, 0] }
    );
    assert_eq!(game.state.levels_played, 5);
    assert_eq!(game.state.level_index, 4);
    assert_eq!(platform.presented, platform.polls);
}
