use wave_shooter::compute::*;
use wave_shooter::entities::*;
use wave_shooter::GameConfig;

use proptest::prelude::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    init_state(GameConfig::default())
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Every probability roll succeeds.
fn always_rng() -> StepRng {
    StepRng::new(0, 0)
}

/// Every probability roll fails.
fn never_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn left() -> InputState {
    InputState { moving_left: true, ..InputState::default() }
}

fn right() -> InputState {
    InputState { moving_right: true, ..InputState::default() }
}

fn fire() -> InputState {
    InputState { fire_pressed: true, ..InputState::default() }
}

// ── init_state / new_game ─────────────────────────────────────────────────────

#[test]
fn init_state_player_position() {
    let s = make_state();
    assert_eq!(s.player.x, 375.0); // width / 2 - 25
    assert_eq!(s.player.y, 520.0); // height - 80
    assert_eq!(s.player.lives, 3);
    assert_eq!(s.player.last_shot, None);
}

#[test]
fn init_state_empty_collections() {
    let s = make_state();
    assert!(s.enemies.is_empty());
    assert!(s.projectiles.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.level, 1);
    assert_eq!(s.quota, 5);
    assert_eq!(s.frame, 0);
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.overlay, None);
    assert!(!s.is_level_complete());
}

#[test]
fn new_game_spawns_first_wave() {
    let s = new_game(GameConfig::default(), &mut seeded_rng());
    assert_eq!(s.enemies.len(), 5);
    assert_eq!(s.level, 1);
}

// ── update_player ─────────────────────────────────────────────────────────────

#[test]
fn move_left_normal() {
    let s = make_state();
    let p = update_player(&s.player, &left(), 800.0);
    assert_eq!(p.x, 370.0);
}

#[test]
fn move_left_clamps_at_boundary() {
    let mut s = make_state();
    s.player.x = 0.0;
    let p = update_player(&s.player, &left(), 800.0);
    assert_eq!(p.x, 0.0);
}

#[test]
fn move_left_clamps_near_boundary() {
    let mut s = make_state();
    s.player.x = 3.0;
    let p = update_player(&s.player, &left(), 800.0);
    assert_eq!(p.x, 0.0);
}

#[test]
fn move_right_normal() {
    let s = make_state();
    let p = update_player(&s.player, &right(), 800.0);
    assert_eq!(p.x, 380.0);
}

#[test]
fn move_right_clamps_at_boundary() {
    let mut s = make_state();
    s.player.x = 750.0; // width - player width
    let p = update_player(&s.player, &right(), 800.0);
    assert_eq!(p.x, 750.0);
}

#[test]
fn both_intents_apply_left_then_right() {
    let mut s = make_state();
    let both = InputState { moving_left: true, moving_right: true, fire_pressed: false };

    // Mid-field the two cancel out.
    let p = update_player(&s.player, &both, 800.0);
    assert_eq!(p.x, 375.0);

    // Against the left wall, left clamps to 0 and right then moves off it.
    s.player.x = 0.0;
    let p = update_player(&s.player, &both, 800.0);
    assert_eq!(p.x, 5.0);

    // Against the right wall the right clamp is applied last.
    s.player.x = 750.0;
    let p = update_player(&s.player, &both, 800.0);
    assert_eq!(p.x, 750.0);
}

#[test]
fn move_does_not_mutate_original() {
    let s = make_state();
    let _p = update_player(&s.player, &left(), 800.0);
    assert_eq!(s.player.x, 375.0);
}

proptest! {
    #[test]
    fn player_stays_inside_playfield(
        start in 0.0f32..750.0,
        moves in prop::collection::vec((any::<bool>(), any::<bool>()), 0..200),
    ) {
        let mut player = make_state().player;
        player.x = start;
        for (l, r) in moves {
            let input = InputState { moving_left: l, moving_right: r, fire_pressed: false };
            player = update_player(&player, &input, 800.0);
            prop_assert!(player.x >= 0.0);
            prop_assert!(player.x <= 800.0 - player.width);
        }
    }
}

// ── player_shoot ──────────────────────────────────────────────────────────────

#[test]
fn shoot_spawns_projectile_at_nose() {
    let s = make_state();
    let (p, shot) = player_shoot(&s.player, 1000, 7.0);
    let shot = shot.expect("first shot is never on cooldown");
    assert_eq!(shot.x, 397.5); // centre minus half the projectile width
    assert_eq!(shot.y, 520.0);
    assert_eq!((shot.width, shot.height), (5.0, 15.0));
    assert_eq!(p.last_shot, Some(1000));
}

#[test]
fn shoot_twice_within_cooldown_yields_one_projectile() {
    let s = make_state();
    let (p, first) = player_shoot(&s.player, 1000, 7.0);
    let (p2, second) = player_shoot(&p, 1200, 7.0);
    assert!(first.is_some());
    assert!(second.is_none());
    // A rejected request leaves the cooldown untouched.
    assert_eq!(p2.last_shot, Some(1000));
}

#[test]
fn shoot_cooldown_is_strict() {
    let s = make_state();
    let (p, _) = player_shoot(&s.player, 1000, 7.0);
    assert!(player_shoot(&p, 1300, 7.0).1.is_none()); // exactly 300 ms
    assert!(player_shoot(&p, 1301, 7.0).1.is_some());
}

#[test]
fn first_shot_allowed_at_time_zero() {
    let s = make_state();
    assert!(player_shoot(&s.player, 0, 7.0).1.is_some());
}

// ── update_projectiles ────────────────────────────────────────────────────────

#[test]
fn projectiles_move_up() {
    let shots = vec![Projectile { x: 10.0, y: 100.0, width: 5.0, height: 15.0, speed: 7.0 }];
    let moved = update_projectiles(&shots);
    assert_eq!(moved[0].y, 93.0);
}

#[test]
fn projectiles_leaving_top_are_dropped() {
    let shots = vec![
        Projectile { x: 10.0, y: -8.0, width: 5.0, height: 15.0, speed: 7.0 }, // bottom at 0 → kept
        Projectile { x: 20.0, y: -9.0, width: 5.0, height: 15.0, speed: 7.0 }, // bottom at -1 → gone
    ];
    let moved = update_projectiles(&shots);
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].x, 10.0);
}

#[test]
fn projectile_order_is_preserved() {
    let shots: Vec<Projectile> = (0..3)
        .map(|i| Projectile { x: i as f32, y: 300.0, width: 5.0, height: 15.0, speed: 7.0 })
        .collect();
    let xs: Vec<f32> = update_projectiles(&shots).iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 2.0]);
}

// ── update_enemy ──────────────────────────────────────────────────────────────

#[test]
fn enemy_patrols_in_direction() {
    let config = GameConfig::default();
    let e = Enemy::new(100.0, 50.0, EnemyKind::Normal, &config);
    let e = update_enemy(&e, &config, &mut never_rng());
    assert_eq!(e.x, 101.0);
    assert_eq!(e.y, 50.0);
    assert_eq!(e.motion, Motion::Patrol);
}

#[test]
fn enemy_at_right_edge_descends_without_moving() {
    let config = GameConfig::default();
    let e = Enemy::new(760.0, 50.0, EnemyKind::Normal, &config);
    let e = update_enemy(&e, &config, &mut never_rng());
    assert_eq!(e.motion, Motion::Descending);
    assert_eq!(e.x, 760.0);
    assert_eq!(e.y, 50.0);
}

#[test]
fn enemy_reaching_edge_starts_descending() {
    let config = GameConfig::default();
    let e = Enemy::new(759.5, 50.0, EnemyKind::Normal, &config);
    let e = update_enemy(&e, &config, &mut never_rng());
    assert_eq!(e.x, 760.5);
    assert_eq!(e.motion, Motion::Descending);
}

#[test]
fn enemy_descends_then_reverses() {
    let config = GameConfig::default();
    let mut e = Enemy::new(760.0, 50.0, EnemyKind::Normal, &config);
    let mut rng = never_rng();

    e = update_enemy(&e, &config, &mut rng); // hits the wall
    for _ in 0..9 {
        e = update_enemy(&e, &config, &mut rng);
        assert_eq!(e.motion, Motion::Descending);
    }
    e = update_enemy(&e, &config, &mut rng); // 10th step reaches +20
    assert_eq!(e.y, 70.0);
    assert_eq!(e.motion, Motion::Patrol);
    assert_eq!(e.direction, -1.0);
    assert_eq!(e.baseline_y, 70.0);

    // Heads back left instead of dropping again.
    e = update_enemy(&e, &config, &mut rng);
    assert_eq!(e.x, 759.0);
    assert_eq!(e.motion, Motion::Patrol);
}

#[test]
fn enemy_at_left_edge_heading_left_descends() {
    let config = GameConfig::default();
    let mut e = Enemy::new(0.0, 50.0, EnemyKind::Normal, &config);
    e.direction = -1.0;
    let e = update_enemy(&e, &config, &mut never_rng());
    assert_eq!(e.motion, Motion::Descending);
    assert_eq!(e.x, 0.0);
}

#[test]
fn dive_enemy_dives_when_roll_succeeds() {
    let config = GameConfig::default();
    let e = Enemy::new(300.0, 50.0, EnemyKind::Dive, &config);
    let e = update_enemy(&e, &config, &mut always_rng());
    assert_eq!(e.speed, 3.0);
    assert_eq!(e.motion, Motion::Descending);
    assert_eq!(e.descent_distance, 100.0);
    assert_eq!(e.direction, -1.0);
}

#[test]
fn dive_direction_follows_the_coin_flip() {
    let config = GameConfig::default();
    let e = Enemy::new(300.0, 50.0, EnemyKind::Dive, &config);
    assert_eq!(dive(&e, &config, &mut always_rng()).direction, -1.0);
    assert_eq!(dive(&e, &config, &mut never_rng()).direction, 1.0);

    // An enemy already heading left can still be sent right.
    let mut leftward = e.clone();
    leftward.direction = -1.0;
    assert_eq!(dive(&leftward, &config, &mut never_rng()).direction, 1.0);
}

#[test]
fn dive_enemy_keeps_patrolling_when_roll_fails() {
    let config = GameConfig::default();
    let e = Enemy::new(300.0, 50.0, EnemyKind::Dive, &config);
    let e = update_enemy(&e, &config, &mut never_rng());
    assert_eq!(e.speed, 1.5);
    assert_eq!(e.motion, Motion::Patrol);
    assert_eq!(e.x, 301.5);
}

#[test]
fn normal_enemy_never_dives() {
    let config = GameConfig::default();
    let e = Enemy::new(300.0, 50.0, EnemyKind::Normal, &config);
    let e = update_enemy(&e, &config, &mut always_rng());
    assert_eq!(e.motion, Motion::Patrol);
    assert_eq!(e.speed, 1.0);
}

#[test]
fn dive_plunges_100_pixels() {
    let config = GameConfig::default();
    let e = Enemy::new(300.0, 50.0, EnemyKind::Dive, &config);
    let mut e = dive(&e, &config, &mut never_rng());
    let mut rng = never_rng();
    for _ in 0..50 {
        e = update_enemy(&e, &config, &mut rng);
    }
    assert_eq!(e.y, 150.0);
    assert_eq!(e.motion, Motion::Patrol);
}

// ── update / tick ─────────────────────────────────────────────────────────────

#[test]
fn tick_advances_frame_counter() {
    let s = make_state();
    let s2 = tick(&s, &InputState::default(), 0, &mut seeded_rng());
    assert_eq!(s2.frame, 1);
}

#[test]
fn tick_fires_and_moves_projectile() {
    let s = make_state();
    let s = tick(&s, &fire(), 0, &mut seeded_rng());
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.projectiles[0].y, 513.0);

    // Still on cooldown.
    let s = tick(&s, &fire(), 100, &mut seeded_rng());
    assert_eq!(s.projectiles.len(), 1);

    let s = tick(&s, &fire(), 301, &mut seeded_rng());
    assert_eq!(s.projectiles.len(), 2);
}

#[test]
fn tick_is_frozen_after_game_over() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    s.player.lives = 0;
    let s2 = tick(&s, &left(), 0, &mut seeded_rng());
    assert_eq!(s2.frame, s.frame);
    assert_eq!(s2.player.x, s.player.x);
}

#[test]
fn tick_does_not_mutate_original() {
    let s = new_game(GameConfig::default(), &mut seeded_rng());
    let before: Vec<f32> = s.enemies.iter().map(|e| e.x).collect();
    let _s2 = tick(&s, &right(), 0, &mut seeded_rng());
    let after: Vec<f32> = s.enemies.iter().map(|e| e.x).collect();
    assert_eq!(before, after);
    assert_eq!(s.player.x, 375.0);
}

#[test]
fn player_x_stays_in_bounds_over_many_ticks() {
    let mut s = new_game(GameConfig::default(), &mut seeded_rng());
    let mut rng = seeded_rng();
    for i in 0..400u64 {
        let input = if i < 200 { left() } else { right() };
        s = tick(&s, &input, i * 16, &mut rng);
        if s.status == GameStatus::GameOver {
            break;
        }
        assert!(s.player.x >= 0.0 && s.player.x <= 750.0);
    }
}
