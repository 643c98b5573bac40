//! End-to-end checks of the published worked examples through the public API

use pokecalc_core::prelude::*;

#[test]
fn capture_half_hp_with_poke_ball() {
    let ball = find_ball("pokeball").unwrap();
    let multiplier = resolve_ball_multiplier(ball, &SituationalFlags::default());

    let result = capture_probability(&CaptureInput {
        max_hp: 100,
        current_hp: 50,
        base_catch_rate: 45,
        ball_multiplier: multiplier,
        status_multiplier: StatusCondition::None.multiplier(),
        level: 50,
    });

    assert!((result.hp_factor - 0.667).abs() < f64::EPSILON);
    assert!((result.modified_catch_rate - 30.0).abs() < f64::EPSILON);
    assert!((result.probability - 11.76).abs() < f64::EPSILON);
    assert_eq!(result.outlook(), CaptureOutlook::Tough);
}

#[test]
fn capture_master_ball_at_full_hp() {
    let ball = find_ball("masterball").unwrap();
    let multiplier = resolve_ball_multiplier(ball, &SituationalFlags::default());

    let result = capture_probability(&CaptureInput {
        max_hp: 300,
        current_hp: 300,
        base_catch_rate: 3,
        ball_multiplier: multiplier,
        status_multiplier: 1.0,
        level: 70,
    });

    assert!((result.probability - 100.0).abs() < f64::EPSILON);
    assert!(result.is_guaranteed());
}

#[test]
fn capture_timer_ball_late_in_battle() {
    let ball = find_ball("timerball").unwrap();
    let flags = SituationalFlags {
        is_first_turn: false,
        turn_count: 10,
        ..Default::default()
    };
    let resolution = resolve_ball(ball, &flags);
    assert!((resolution.multiplier - 4.0).abs() < f64::EPSILON);
    assert!(resolution.condition_met);

    let result = capture_probability(&CaptureInput {
        max_hp: 100,
        current_hp: 50,
        base_catch_rate: 45,
        ball_multiplier: resolution.multiplier,
        status_multiplier: StatusCondition::Paralysis.multiplier(),
        level: 30,
    });

    // 0.6667 * 45 * 4.0 * 1.5 = 180 -> 70.59%
    assert!((result.modified_catch_rate - 180.0).abs() < f64::EPSILON);
    assert!((result.probability - 70.59).abs() < f64::EPSILON);
    assert_eq!(result.outlook(), CaptureOutlook::Good);
}

#[test]
fn damage_neutral_stab_hit() {
    let result = calculate_damage(&DamageInput {
        level: 50,
        power: 80,
        attack: 100,
        defense: 100,
        attacker: Typing::single(PokemonType::Normal),
        defender: Typing::single(PokemonType::Normal),
        move_type: PokemonType::Normal,
        critical: false,
        item_multiplier: 1.0,
    });

    assert_eq!(result.min, 47);
    assert_eq!(result.max, 55);
    assert!((result.type_effectiveness - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.effectiveness_label, "Normal");
    assert_eq!(result.breakdown[2].value, "×1.5");
}

#[test]
fn damage_water_into_ground_fire() {
    let result = calculate_damage(&DamageInput {
        level: 50,
        power: 80,
        attack: 100,
        defense: 100,
        attacker: Typing::single(PokemonType::Fire),
        defender: Typing::dual(PokemonType::Ground, PokemonType::Fire),
        move_type: PokemonType::Water,
        critical: false,
        item_multiplier: 1.0,
    });

    assert!((result.type_effectiveness - 4.0).abs() < f64::EPSILON);
    assert_eq!(result.effectiveness, Effectiveness::DoubleSuperEffective);
    assert_eq!(result.effectiveness_label, "×4 Super Effective");
    assert!(!result.stab);
}

#[test]
fn type_chart_spot_checks() {
    use PokemonType::*;
    assert_eq!(effectiveness(Water, Fire), 2.0);
    assert_eq!(effectiveness(Fire, Water), 0.5);
    assert_eq!(effectiveness(Electric, Ground), 0.0);
    assert_eq!(effectiveness(Ghost, Normal), 0.0);
    assert_eq!(effectiveness(Fighting, Ghost), 0.0);
    assert_eq!(effectiveness(Dragon, Fairy), 0.0);
}
