//! Move/look input → MovementState → Transform (per frame)

use bevy::prelude::*;

use crate::components::MovementState;
use crate::config::ControllerConfig;
use crate::input::{LookInput, MoveInput};

/// Scale a raw move input by `speed`
///
/// Speed is applied twice (once to the vector, once per axis), so the
/// effective scale is `speed²`. Kept as-is: tuned configs depend on it.
pub fn scale_move_input(direction: Vec2, speed: f32) -> Vec2 {
    let scaled = direction * speed;
    Vec2::new(scaled.x * speed, scaled.y * speed)
}

/// Yaw rate (degrees/sec) for a raw look input
pub fn look_yaw_rate(direction: Vec2, rotation_speed: f32) -> f32 {
    direction.x * rotation_speed
}

/// System: MoveInput → MovementState.planar_velocity
pub fn handle_move_input(
    mut events: EventReader<MoveInput>,
    mut controllers: Query<(&ControllerConfig, &mut MovementState)>,
) {
    for event in events.read() {
        let Ok((config, mut movement)) = controllers.get_mut(event.entity) else {
            crate::log_warning(&format!("MoveInput: entity {:?} has no controller", event.entity));
            continue;
        };

        movement.planar_velocity = scale_move_input(event.direction, config.speed);
    }
}

/// System: LookInput → MovementState.yaw_rate
pub fn handle_look_input(
    mut events: EventReader<LookInput>,
    mut controllers: Query<(&ControllerConfig, &mut MovementState)>,
) {
    for event in events.read() {
        let Ok((config, mut movement)) = controllers.get_mut(event.entity) else {
            crate::log_warning(&format!("LookInput: entity {:?} has no controller", event.entity));
            continue;
        };

        movement.yaw_rate = look_yaw_rate(event.direction, config.rotation_speed);
    }
}

/// System: translate/rotate by pending motion × frame delta
///
/// Работает в Update (variable step). `Time` = virtual time, поэтому
/// relative speed 0 (pause) → delta 0 → никакого движения.
pub fn apply_planar_motion(
    mut bodies: Query<(&MovementState, &mut Transform)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (movement, mut transform) in bodies.iter_mut() {
        movement.apply_to(&mut transform, delta);
    }
}
