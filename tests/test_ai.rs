use duel_minigames::ai::*;
use duel_minigames::compute::Emitter;
use duel_minigames::consts::*;
use duel_minigames::entities::*;
use duel_minigames::levels::shooter::{arena, spawn_candidates};

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn pair_at(one: Vec2, two: Vec2) -> [Duelist; 2] {
    let [mut a, mut b] = duelist_pair();
    a.pos = one;
    b.pos = two;
    [a, b]
}

// ── Enemy ────────────────────────────────────────────────────────────────────

#[test]
fn nearest_duelist_tie_goes_to_first() {
    let duelists = pair_at(Vec2::new(100.0, 100.0), Vec2::new(300.0, 100.0));
    assert_eq!(nearest_duelist(Vec2::new(215.0, 115.0), &duelists), Some(0));
    assert_eq!(nearest_duelist(Vec2::new(216.0, 115.0), &duelists), Some(1));
    assert_eq!(nearest_duelist(Vec2::ZERO, &[]), None);
}

#[test]
fn enemy_steps_straight_at_target() {
    let duelists = pair_at(Vec2::new(197.5, 97.5), Vec2::new(900.0, 700.0));
    let mut enemy = Enemy::new(Vec2::new(100.0, 100.0), 0);
    hunt(&mut enemy, &duelists);
    assert!((enemy.pos - Vec2::new(102.0, 100.0)).length() < 1e-4);
}

#[test]
fn enemy_on_top_of_target_does_not_blow_up() {
    // Centres coincide: the step length is bounded by the speed.
    let duelists = pair_at(Vec2::new(97.5, 97.5), Vec2::new(900.0, 700.0));
    let mut enemy = Enemy::new(Vec2::new(100.0, 100.0), 0);
    hunt(&mut enemy, &duelists);
    assert!(enemy.pos.is_finite());
    assert!((enemy.pos - Vec2::new(100.0, 100.0)).length() <= ENEMY_SPEED);
}

#[test]
fn enemy_bursts_four_ways() {
    let mut rng = seeded_rng();
    let mut enemy = Enemy::new(Vec2::new(400.0, 400.0), 0);
    assert!(enemy.try_emit(&mut rng));
    assert_eq!(enemy.shots.len(), 4);
    assert!((60..=120).contains(&enemy.cooldown));
    assert!(enemy.shots.iter().all(|s| s.owner == Owner::Enemy));
    assert!(enemy.shots.iter().all(|s| (s.vel.length() - ENEMY_SHOT_SPEED).abs() < 1e-4));
    assert!(!enemy.try_emit(&mut rng));
}

#[test]
fn enemy_shot_costs_a_life() {
    let mut rng = seeded_rng();
    // Right-hand shot starts at the enemy's right edge, a few pixels from duelist one.
    let mut duelists = pair_at(Vec2::new(430.0, 400.0), Vec2::new(900.0, 700.0));
    let mut enemy = Enemy::new(Vec2::new(400.0, 405.0), 0);
    enemy.speed = 0.0;
    for _ in 0..5 {
        update_enemy(&mut enemy, &[], &mut duelists, &mut rng);
    }
    assert_eq!(duelists[0].lives, 2);
    assert_eq!(duelists[1].lives, 3);
}

#[test]
fn arena_blocks_two_spawn_points() {
    let pool = valid_spawn_points(&spawn_candidates(), &arena());
    assert_eq!(pool.len(), 8);
    assert!(!pool.contains(&Vec2::new(200.0, 300.0)));
    assert!(!pool.contains(&Vec2::new(700.0, 200.0)));
}

#[test]
fn fully_blocked_pool_draws_nothing() {
    let mut rng = seeded_rng();
    let slab = [Obstacle::new(0.0, 0.0, WIDTH, HEIGHT)];
    let pool = valid_spawn_points(&spawn_candidates(), &slab);
    assert!(pool.is_empty());
    assert!(draw_enemies(&pool, 5, &mut rng).is_empty());
}

#[test]
fn drawn_enemies_come_from_pool() {
    let mut rng = seeded_rng();
    let pool = valid_spawn_points(&spawn_candidates(), &arena());
    let drawn = draw_enemies(&pool, 5, &mut rng);
    assert_eq!(drawn.len(), 5);
    for e in &drawn {
        assert!(pool.contains(&e.pos));
        assert!((30..=90).contains(&e.cooldown));
        assert!(e.alive);
    }
}

// ── Boss ─────────────────────────────────────────────────────────────────────

#[test]
fn boss_sleeps_then_patrols() {
    let mut boss = Boss::new();
    let start = boss.pos;
    for _ in 0..BOSS_START_DELAY {
        patrol(&mut boss);
    }
    assert_eq!(boss.pos, start);
    assert_eq!(boss.phase(), BossPhase::Patrolling);

    patrol(&mut boss);
    assert_eq!(boss.pos, start + Vec2::new(BOSS_SPEED, 0.0));
}

#[test]
fn boss_turns_at_the_edges() {
    let mut boss = Boss::new();
    boss.start_delay = 0;
    boss.pos.x = 938.0;
    patrol(&mut boss);
    assert_eq!(boss.pos.x, 942.0);
    assert_eq!(boss.direction, -1.0);

    boss.pos.x = 2.0;
    patrol(&mut boss);
    assert_eq!(boss.pos.x, -2.0);
    assert_eq!(boss.direction, 1.0);
}

#[test]
fn boss_holds_fire_while_dormant() {
    let mut rng = seeded_rng();
    let mut boss = Boss::new();
    assert!(!boss.try_emit(&mut rng));
    boss.start_delay = 0;
    assert!(boss.try_emit(&mut rng));
    assert_eq!(boss.shots.len(), BOSS_BURST);
    assert!(boss.shots.iter().all(|s| (s.vel.length() - BOSS_SHOT_SPEED).abs() < 1e-4));
    assert_eq!(boss.cooldown, BOSS_COOLDOWN);
}

#[test]
fn boss_bursts_on_a_fixed_beat() {
    let mut rng = seeded_rng();
    let mut boss = Boss::new();
    let mut duelists = pair_at(Vec2::new(0.0, 0.0), Vec2::new(WIDTH - DUELIST_SIZE, 0.0));

    for _ in 0..BOSS_START_DELAY - 1 {
        update_boss(&mut boss, &mut duelists, &mut rng);
    }
    assert!(boss.shots.is_empty());

    update_boss(&mut boss, &mut duelists, &mut rng);
    assert_eq!(boss.shots.len(), BOSS_BURST);

    for _ in 0..BOSS_COOLDOWN - 1 {
        update_boss(&mut boss, &mut duelists, &mut rng);
    }
    assert_eq!(boss.shots.len(), BOSS_BURST);

    update_boss(&mut boss, &mut duelists, &mut rng);
    assert_eq!(boss.shots.len(), 2 * BOSS_BURST);
    assert_eq!(duelists[0].lives, 3);
    assert_eq!(duelists[1].lives, 3);
}

// ── Ball ─────────────────────────────────────────────────────────────────────

#[test]
fn serve_starts_at_centre_with_listed_speeds() {
    let mut rng = seeded_rng();
    for _ in 0..20 {
        let ball = serve(&mut rng);
        assert_eq!(ball.pos, Ball::center_spot());
        assert!(BALL_SERVE_SPEEDS.contains(&ball.vel.x));
        assert!(BALL_SERVE_SPEEDS.contains(&ball.vel.y));
    }
}

#[test]
fn ball_bounces_off_edges_and_stays_on_field() {
    let mut ball = Ball { pos: Vec2::new(2.0, 400.0), vel: Vec2::new(-4.0, 3.0) };
    roll(&mut ball);
    assert_eq!(ball.vel, Vec2::new(4.0, 3.0));
    assert_eq!(ball.pos, Vec2::new(0.0, 403.0));

    let mut ball = Ball { pos: Vec2::new(500.0, HEIGHT - BALL_SIZE - 1.0), vel: Vec2::new(3.0, 4.0) };
    roll(&mut ball);
    assert_eq!(ball.vel, Vec2::new(3.0, -4.0));
    assert_eq!(ball.pos.y, HEIGHT - BALL_SIZE);
}

#[test]
fn reach_is_measured_between_corners() {
    let d = pair_at(Vec2::new(100.0, 100.0), Vec2::ZERO);
    let near = Ball { pos: Vec2::new(139.0, 100.0), vel: Vec2::ZERO };
    let far = Ball { pos: Vec2::new(140.0, 100.0), vel: Vec2::ZERO };
    assert!(touching(&near, &d[0]));
    assert!(!touching(&far, &d[0]));
}

#[test]
fn kick_sends_ball_away_from_duelist() {
    let d = pair_at(Vec2::new(100.0, 100.0), Vec2::ZERO);
    let k = BALL_KICK_SPEED;
    let cases = [
        (Vec2::new(120.0, 100.0), Vec2::new(k, 0.0)),
        (Vec2::new(80.0, 100.0), Vec2::new(-k, 0.0)),
        (Vec2::new(100.0, 120.0), Vec2::new(0.0, k)),
        (Vec2::new(100.0, 80.0), Vec2::new(0.0, -k)),
        (Vec2::new(120.0, 120.0), Vec2::new(k, k)),
        (Vec2::new(80.0, 80.0), Vec2::new(-k, -k)),
        (Vec2::new(120.0, 80.0), Vec2::new(k, -k)),
        (Vec2::new(80.0, 120.0), Vec2::new(-k, k)),
        (Vec2::new(100.0, 100.0), Vec2::new(k, 0.0)),
    ];
    for (pos, expected) in cases {
        let mut ball = Ball { pos, vel: Vec2::new(-3.0, -3.0) };
        kick(&mut ball, &d[0]);
        assert_eq!(ball.vel, expected, "ball at {pos:?}");
    }
}
