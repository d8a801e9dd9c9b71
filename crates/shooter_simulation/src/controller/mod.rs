//! Character controller
//!
//! Input events → state components → rapier body / Transform.
//!
//! Update (variable step), строго по порядку:
//! 1. reset_jumps_on_contact: CollisionEvent::Started → JumpState::default()
//! 2. handle_move_input / handle_look_input: MovementState
//! 3. handle_jump_input: JumpState + ExternalImpulse/Velocity
//! 4. handle_fire_input: projectile spawn (поза spawn point до движения этого frame)
//! 5. apply_planar_motion: Transform += MovementState × delta
//!
//! FixedUpdate: apply_extra_gravity (каждый fixed step, безусловно).

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

pub mod contact;
pub mod gravity;
pub mod jump;
pub mod motion;

pub use contact::reset_jumps_on_contact;
pub use gravity::apply_extra_gravity;
pub use jump::handle_jump_input;
pub use motion::{apply_planar_motion, handle_look_input, handle_move_input, look_yaw_rate, scale_move_input};

use crate::components::{JumpState, MovementState, Player, ProjectileSpawnPoint, ShootPoint};
use crate::config::ControllerConfig;
use crate::input::{FireInput, JumpInput, LookInput, MoveInput};
use crate::projectile::{handle_fire_input, ProjectilePlugin};

/// System set of the per-frame controller chain (для ordering client systems)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerSet;

pub struct CharacterControllerPlugin;

impl Plugin for CharacterControllerPlugin {
    fn build(&self, app: &mut App) {
        // add_event идемпотентен: если RapierPhysicsPlugin уже зарегистрировал CollisionEvent, ок
        app.add_event::<MoveInput>()
            .add_event::<LookInput>()
            .add_event::<FireInput>()
            .add_event::<JumpInput>()
            .add_event::<CollisionEvent>();

        // handle_fire_input нужен ProjectilePrefab + ProjectileFired
        if !app.is_plugin_added::<ProjectilePlugin>() {
            app.add_plugins(ProjectilePlugin);
        }

        app.register_type::<ControllerConfig>()
            .register_type::<MovementState>()
            .register_type::<JumpState>()
            .register_type::<Player>()
            .register_type::<ShootPoint>()
            .register_type::<ProjectileSpawnPoint>();

        app.add_systems(
            Update,
            (
                reset_jumps_on_contact,
                handle_move_input,
                handle_look_input,
                handle_jump_input,
                handle_fire_input,
                apply_planar_motion,
            )
                .chain()
                .in_set(ControllerSet),
        );

        app.add_systems(FixedUpdate, apply_extra_gravity);
    }
}
