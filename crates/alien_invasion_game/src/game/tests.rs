use super::*;
use crate::levels::LevelGrid;
use crate::settings::FleetDirection;

/// Settings with the random event timers pushed far out of the way.
fn quiet_settings() -> Settings {
    Settings {
        enemy_shoot_frames: 100_000,
        enemy_shoot_jitter: 0,
        powerup_frames: 100_000,
        powerup_jitter: 0,
        ..Settings::default()
    }
}

fn game_with(settings: Settings, grid: LevelGrid) -> Game {
    let levels = Levels::new(vec![grid]).unwrap();
    let mut game = Game::with_seed(settings, levels, 0, 42);
    game.start_game();
    game.drain_events();
    game
}

/// Single level-1 enemy at (60, 70).
fn single_enemy_game() -> Game {
    game_with(quiet_settings(), vec![vec![1]])
}

fn bullet_at(x: f32, y: f32) -> PlayerBullet {
    PlayerBullet {
        rect: Rect::new(x, y, 3.0, 15.0),
    }
}

/// Enemy bullet that reaches the ship's nose on the next frame.
fn enemy_bullet_on_ship(game: &Game) -> EnemyBullet {
    let (cx, top) = game.ship.rect.midtop();
    EnemyBullet {
        rect: Rect::new(cx - 1.5, top - 12.0, 3.0, 15.0),
    }
}

#[test]
fn starts_inactive_with_fleet_on_screen() {
    let levels = Levels::new(vec![vec![vec![1, 0, 2]]]).unwrap();
    let mut game = Game::with_seed(quiet_settings(), levels, 120, 1);
    assert!(!game.stats.game_active);
    assert_eq!(game.stats.high_score, 120);
    assert_eq!(game.enemies.len(), 2);

    let before = game.enemies[0].rect;
    game.step();
    assert_eq!(game.enemies[0].rect, before);

    game.fire_bullet();
    assert!(game.bullets.is_empty());
}

#[test]
fn fleet_is_laid_out_from_the_grid() {
    let game = game_with(quiet_settings(), vec![vec![1, 0, 3], vec![0, 2]]);
    let positions: Vec<_> = game
        .enemies
        .iter()
        .map(|e| (e.rect.x, e.rect.y, e.level, e.life))
        .collect();
    assert_eq!(
        positions,
        vec![(60.0, 70.0, 1, 1), (240.0, 70.0, 3, 3), (150.0, 110.0, 2, 2)]
    );
    assert_eq!(game.ship.rect.midbottom(), (600.0, 800.0));
}

#[test]
fn bullet_limit_is_enforced() {
    let mut game = single_enemy_game();
    for _ in 0..15 {
        game.fire_bullet();
    }
    assert_eq!(game.bullets.len(), game.settings.bullets_allowed);
}

#[test]
fn killing_an_enemy_scores_hit_and_kill_points() {
    let mut game = single_enemy_game();
    game.bullets.push(bullet_at(85.0, 100.0));
    game.step();

    assert!(game.enemies.is_empty());
    assert!(game.bullets.is_empty());
    assert_eq!(game.stats.score, 10 + 50);
    assert_eq!(game.stats.high_score, 60);
    assert_eq!(game.drain_events(), vec![GameEvent::Boom]);
}

#[test]
fn tough_enemies_take_several_hits() {
    let mut game = game_with(quiet_settings(), vec![vec![3]]);
    for hit in 1..=3 {
        let x = game.enemies[0].rect.center_x();
        game.bullets.push(bullet_at(x, 100.0));
        game.step();
        assert!(game.bullets.is_empty());
        if hit < 3 {
            assert_eq!(game.enemies[0].life, 3 - hit);
        }
    }
    assert!(game.enemies.is_empty());
    assert_eq!(game.stats.score, 3 * 10 + 3 * 50);
}

#[test]
fn one_bullet_can_hit_overlapping_enemies() {
    let mut game = single_enemy_game();
    let mut twin = game.enemies[0].clone();
    twin.rect.x += 10.0;
    game.enemies.push(twin);
    game.bullets.push(bullet_at(85.0, 100.0));
    game.step();
    assert!(game.enemies.is_empty());
    assert_eq!(game.stats.score, 2 * 10 + 2 * 50);
    assert_eq!(game.drain_events(), vec![GameEvent::Boom]);
}

#[test]
fn every_bullet_on_a_dying_enemy_is_spent() {
    let mut game = game_with(quiet_settings(), vec![vec![1], vec![1]]);
    game.bullets.push(bullet_at(85.0, 120.0));
    game.bullets.push(bullet_at(88.0, 120.0));
    game.step();

    assert!(game.bullets.is_empty());
    assert_eq!(game.enemies.len(), 1);
    assert_eq!(game.enemies[0].rect.y, 70.0);
    assert_eq!(game.stats.score, 2 * 10 + 50);

    for _ in 0..3 {
        game.step();
    }
    assert_eq!(game.enemies.len(), 1);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.score, 2 * 10 + 50);
}

#[test]
fn several_hits_in_one_frame_make_one_boom() {
    let mut game = game_with(quiet_settings(), vec![vec![1, 1]]);
    game.bullets.push(bullet_at(85.0, 100.0));
    game.bullets.push(bullet_at(175.0, 100.0));
    game.step();

    assert!(game.enemies.is_empty());
    assert!(game.bullets.is_empty());
    assert_eq!(game.stats.score, 2 * (10 + 50));
    assert_eq!(game.drain_events(), vec![GameEvent::Boom]);
}

#[test]
fn cleared_fleet_moves_to_the_next_level() {
    let mut game = single_enemy_game();
    game.bullets.push(bullet_at(85.0, 100.0));
    game.step();
    game.drain_events();
    let speed = game.settings.enemy_speed;

    game.step();
    assert_eq!(game.stats.level, 2);
    assert_eq!(game.enemies.len(), 1);
    assert!(game.stats.game_active);
    assert!((game.settings.enemy_speed - speed * 1.1).abs() < 1e-4);
    assert_eq!(game.drain_events(), vec![GameEvent::LevelUp { level: 2 }]);
}

#[test]
fn clearing_the_last_level_wins() {
    let settings = Settings {
        max_level: 1,
        ..quiet_settings()
    };
    let mut game = game_with(settings, vec![vec![1]]);
    game.enemies.clear();
    game.step();

    assert!(game.stats.win_game);
    assert!(!game.stats.game_active);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::LevelUp { level: 2 }, GameEvent::Won]
    );
}

#[test]
fn enemy_bullet_costs_a_ship_and_freezes_the_field() {
    let mut game = single_enemy_game();
    let bullet = enemy_bullet_on_ship(&game);
    game.enemy_bullets.push(bullet);
    game.enemies[0].rect.x = 300.0;
    game.step();

    assert_eq!(game.stats.ships_left, 2);
    assert!(game.stats.game_active);
    assert!(game.hit_paused());
    assert!(game.enemy_bullets.is_empty());
    assert_eq!(game.enemies[0].rect.x, 60.0, "level was reset");
    assert_eq!(game.drain_events(), vec![GameEvent::ShipHit]);

    for _ in 0..game.settings.hit_pause_frames {
        game.step();
        assert_eq!(game.enemies[0].rect.x, 60.0);
    }
    game.step();
    assert_eq!(game.enemies[0].rect.x, 60.0 + game.settings.enemy_speed);
}

#[test]
fn losing_the_last_ship_ends_the_game() {
    let mut game = single_enemy_game();
    game.stats.ships_left = 1;
    let bullet = enemy_bullet_on_ship(&game);
    game.enemy_bullets.push(bullet);
    game.step();

    assert_eq!(game.stats.ships_left, 0);
    assert!(!game.stats.game_active);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::ShipHit, GameEvent::GameOver]
    );

    let before = game.enemies[0].rect;
    game.step();
    assert_eq!(game.enemies[0].rect, before);
}

#[test]
fn shield_absorbs_one_hit() {
    let mut game = single_enemy_game();
    game.apply_powerup(PowerupKind::Shield);
    game.drain_events();
    let bullet = enemy_bullet_on_ship(&game);
    game.enemy_bullets.push(bullet);
    game.step();

    assert!(!game.ship.shield);
    assert_eq!(game.stats.ships_left, 3);
    assert!(!game.hit_paused());
    assert_eq!(game.drain_events(), vec![GameEvent::ShieldDown]);
}

/// Two enemy bullets that reach the ship on the same frame.
fn enemy_volley_on_ship(game: &mut Game) {
    let first = enemy_bullet_on_ship(game);
    let mut second = first.clone();
    second.rect.x += 5.0;
    game.enemy_bullets.push(first);
    game.enemy_bullets.push(second);
}

#[test]
fn volley_on_the_ship_costs_a_single_ship() {
    let mut game = single_enemy_game();
    game.enemies[0].rect.x = 300.0;
    enemy_volley_on_ship(&mut game);
    game.step();

    assert_eq!(game.stats.ships_left, 2);
    assert!(game.enemy_bullets.is_empty());
    assert_eq!(game.drain_events(), vec![GameEvent::ShipHit]);
}

#[test]
fn volley_on_a_shield_only_drops_the_shield() {
    let mut game = single_enemy_game();
    game.ship.create_shield();
    enemy_volley_on_ship(&mut game);
    game.step();

    assert!(!game.ship.shield);
    assert_eq!(game.stats.ships_left, 3);
    assert!(game.enemy_bullets.is_empty());
    assert_eq!(game.drain_events(), vec![GameEvent::ShieldDown]);
}

#[test]
fn shielded_ship_rams_through_an_enemy() {
    let mut game = game_with(quiet_settings(), vec![vec![1, 1]]);
    game.ship.create_shield();
    let (cx, top) = game.ship.rect.midtop();
    game.enemies[0].rect.set_midbottom((cx, top + 5.0));

    game.step();
    assert_eq!(game.enemies.len(), 1);
    assert!(!game.ship.shield);
    assert_eq!(game.stats.ships_left, 3);
}

#[test]
fn enemy_touching_the_ship_costs_a_ship() {
    let mut game = single_enemy_game();
    let (cx, top) = game.ship.rect.midtop();
    game.enemies[0].rect.set_midbottom((cx, top + 5.0));
    game.step();
    assert_eq!(game.stats.ships_left, 2);
}

#[test]
fn enemy_at_the_bottom_costs_a_ship_even_with_shield() {
    let mut game = single_enemy_game();
    game.ship.create_shield();
    game.enemies[0].rect.y = 800.0 - 40.0;
    game.step();

    assert_eq!(game.stats.ships_left, 2);
    assert!(game.ship.shield);
}

#[test]
fn fleet_drops_and_turns_at_the_edge() {
    let mut game = game_with(quiet_settings(), vec![vec![1, 1]]);
    game.enemies[1].rect.x = 1140.0;
    game.step();

    assert_eq!(game.settings.fleet_direction, FleetDirection::Left);
    assert_eq!(game.enemies[0].rect.y, 80.0);
    assert_eq!(game.enemies[1].rect.y, 80.0);
    assert_eq!(game.enemies[1].rect.x, 1140.0 - game.settings.enemy_speed);
}

#[test]
fn life_powerup_is_capped() {
    let mut game = single_enemy_game();
    let (cx, top) = game.ship.rect.midtop();
    let mut life = Powerup {
        kind: PowerupKind::Life,
        rect: Rect::new(0.0, 0.0, 30.0, 30.0),
    };
    life.rect.set_midbottom((cx, top + 1.0));
    game.powerups.push(life.clone());
    game.step();
    assert_eq!(game.stats.ships_left, 4);
    assert!(game.powerups.is_empty());
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::PowerupCollected(PowerupKind::Life)]
    );

    game.stats.ships_left = game.settings.max_ships;
    game.powerups.push(life);
    game.step();
    assert_eq!(game.stats.ships_left, game.settings.max_ships);
}

#[test]
fn weapon_powerup_fires_a_spread_until_it_expires() {
    let settings = Settings {
        weapon_frames: 2,
        ..quiet_settings()
    };
    let mut game = game_with(settings, vec![vec![1]]);
    game.apply_powerup(PowerupKind::Weapon);
    game.fire_bullet();
    let mut centers: Vec<_> = game.bullets.iter().map(|b| b.rect.center_x()).collect();
    centers.sort_by(f32::total_cmp);
    assert_eq!(centers, vec![580.0, 600.0, 620.0]);

    game.step();
    game.step();
    assert!(!game.weapon_active());
    game.bullets.clear();
    game.fire_bullet();
    assert_eq!(game.bullets.len(), 1);
}

#[test]
fn spread_shot_respects_the_bullet_limit() {
    let mut game = single_enemy_game();
    game.apply_powerup(PowerupKind::Weapon);
    for _ in 0..4 {
        game.fire_bullet();
    }
    assert_eq!(game.bullets.len(), game.settings.bullets_allowed);
}

#[test]
fn pause_freezes_everything() {
    let mut game = single_enemy_game();
    game.fire_bullet();
    game.toggle_pause();
    let bullet_y = game.bullets[0].rect.y;
    game.step();
    game.fire_bullet();
    assert_eq!(game.bullets.len(), 1);
    assert_eq!(game.bullets[0].rect.y, bullet_y);

    game.toggle_pause();
    game.step();
    assert!(game.bullets[0].rect.y < bullet_y);
}

#[test]
fn play_button_starts_only_an_inactive_game() {
    let levels = Levels::new(vec![vec![vec![1]]]).unwrap();
    let mut game = Game::with_seed(quiet_settings(), levels, 0, 3);
    assert!(!game.handle_click(10.0, 10.0));
    assert!(!game.stats.game_active);
    assert!(game.handle_click(600.0, 400.0));
    assert!(game.stats.game_active);
    assert!(!game.handle_click(600.0, 400.0));
}

#[test]
fn restart_after_game_over_resets_the_run() {
    let mut game = single_enemy_game();
    game.stats.add_score(500);
    game.stats.check_high_score();
    game.settings.increase_speed();
    game.stats.game_active = false;

    game.start_game();
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
    assert_eq!(game.stats.ships_left, 3);
    assert_eq!(game.stats.high_score, 500);
    assert_eq!(game.settings.enemy_speed, 1.5);
}

#[test]
fn timers_drop_enemy_bullets_and_powerups() {
    let settings = Settings {
        enemy_shoot_frames: 1,
        powerup_frames: 1,
        ..quiet_settings()
    };
    let mut game = game_with(settings, vec![vec![1]]);
    game.step();
    assert_eq!(game.enemy_bullets.len(), 1);
    assert_eq!(game.enemy_bullets[0].rect.center_x(), 90.0);
    assert_eq!(game.powerups.len(), 1);
}

#[test]
fn score_never_decreases_and_high_score_tracks_it() {
    let settings = Settings {
        enemy_shoot_frames: 20,
        enemy_shoot_jitter: 10,
        powerup_frames: 90,
        powerup_jitter: 30,
        ..Settings::default()
    };
    let mut game = game_with(settings, vec![vec![1, 2, 3, 1, 2, 3]]);
    game.set_moving(Movement::LEFT, true);
    let mut last_score = 0;
    for frame in 0..3_000 {
        if frame % 7 == 0 {
            game.fire_bullet();
        }
        game.step();
        assert!(game.stats.score >= last_score);
        assert!(game.stats.high_score >= game.stats.score);
        assert!(game.bullets.len() <= game.settings.bullets_allowed);
        if game.stats.game_active {
            assert!(game.stats.ships_left >= 1);
        }
        last_score = game.stats.score;
    }
}
