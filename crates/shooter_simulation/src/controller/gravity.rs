//! Extra gravity (fixed step)

use bevy::prelude::*;
use bevy_rapier3d::prelude::ExternalForce;

use crate::components::Player;
use crate::config::ControllerConfig;

/// System: constant downward force on every fixed step
///
/// Работает в FixedUpdate. Не зависит от JumpState: и на земле, и в воздухе.
/// `ExternalForce` в rapier persistent, поэтому force перезаписывается (не +=),
/// а torque не трогаем.
pub fn apply_extra_gravity(mut bodies: Query<(&ControllerConfig, &mut ExternalForce), With<Player>>) {
    for (config, mut external) in bodies.iter_mut() {
        external.force = Vec3::NEG_Y * config.fall_force;
    }
}
