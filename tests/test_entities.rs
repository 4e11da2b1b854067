use duel_minigames::consts::*;
use duel_minigames::entities::*;

#[test]
fn side_index_and_opponent() {
    assert_eq!(Side::One.index(), 0);
    assert_eq!(Side::Two.index(), 1);
    assert_eq!(Side::One.opponent(), Side::Two);
    assert_eq!(Side::Two.opponent(), Side::One);
}

#[test]
fn outcome_codes() {
    assert_eq!(Outcome::Draw.code(), 0);
    assert_eq!(Outcome::Won(Side::One).code(), 1);
    assert_eq!(Outcome::Won(Side::Two).code(), 2);
}

#[test]
fn knockout_picks_the_survivor() {
    let [mut one, mut two] = duelist_pair();
    assert_eq!(Outcome::by_knockout(&one, &two), Outcome::Draw);

    one.lives = 0;
    assert_eq!(Outcome::by_knockout(&one, &two), Outcome::Won(Side::Two));

    two.lives = 0;
    assert_eq!(Outcome::by_knockout(&one, &two), Outcome::Draw);

    one.lives = 2;
    assert_eq!(Outcome::by_knockout(&one, &two), Outcome::Won(Side::One));
}

#[test]
fn duelist_pair_defaults() {
    let [one, two] = duelist_pair();
    assert_eq!(one.lives, DUELIST_LIVES);
    assert_eq!(two.lives, DUELIST_LIVES);
    assert_eq!(one.controls, Controls::wasd());
    assert_eq!(two.controls, Controls::arrows());
    assert_eq!(one.color, Color::Blue);
    assert_eq!(two.color, Color::Red);
    assert!(one.shots.is_empty() && two.shots.is_empty());
}

#[test]
fn match_state_scoring() {
    let mut state = MatchState::new();
    state.record(Outcome::Won(Side::Two));
    state.record(Outcome::Draw);
    state.record(Outcome::Won(Side::Two));
    assert_eq!(state.scores, [0, 2]);
    assert_eq!(state.score(Side::Two), 2);
    assert_eq!(state.levels_played, 3);
    assert_eq!(state.final_outcome(), Outcome::Won(Side::Two));

    state.record(Outcome::Won(Side::One));
    state.record(Outcome::Won(Side::One));
    assert_eq!(state.final_outcome(), Outcome::Draw);
}

#[test]
fn sweeping_every_level_scores_five_nil() {
    let mut state = MatchState::new();
    for _ in 0..5 {
        state.record(Outcome::Won(Side::One));
    }
    assert_eq!(state.scores, [5, 0]);
    assert_eq!(state.final_outcome(), Outcome::Won(Side::One));
}

#[test]
fn boss_phases_and_enrage() {
    let mut boss = Boss::new();
    assert_eq!(boss.phase(), BossPhase::Dormant);
    assert!(!boss.enraged());

    boss.start_delay = 0;
    assert_eq!(boss.phase(), BossPhase::Patrolling);

    boss.health = 11;
    assert!(!boss.enraged());
    boss.health = 10;
    assert!(boss.enraged());
    assert!(!boss.defeated());
    boss.health = 0;
    assert!(boss.defeated());
}

#[test]
fn duelist_clone_is_independent() {
    let original = Duelist::new(Side::One);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.lives = 0;
    cloned.pos.x = 999.0;
    cloned.shots.push(Projectile {
        pos: cloned.pos,
        vel: Facing::Right.unit(),
        owner: Owner::Duelist(Side::One),
        color: Color::Blue,
    });

    assert_eq!(original.lives, 3);
    assert_eq!(original.pos.x, 100.0);
    assert!(original.shots.is_empty());
}
