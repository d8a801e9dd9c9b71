//! Jump input → JumpState state machine → rapier impulse

use bevy::prelude::*;
use bevy_rapier3d::prelude::{ExternalImpulse, Velocity};

use crate::components::{JumpOutcome, JumpState};
use crate::config::ControllerConfig;
use crate::input::JumpInput;

/// System: JumpInput → ground/aerial jump
///
/// - Ground: `impulse += up * jump_force`
/// - Air: vertical velocity = 0, затем тот же impulse
/// - Exhausted: ничего
///
/// Impulse накапливается в `ExternalImpulse`, rapier применяет и обнуляет его на ближайшем step.
pub fn handle_jump_input(
    mut events: EventReader<JumpInput>,
    mut controllers: Query<(&ControllerConfig, &mut JumpState, &mut Velocity, &mut ExternalImpulse)>,
) {
    for event in events.read() {
        let Ok((config, mut jump, mut velocity, mut impulse)) = controllers.get_mut(event.entity) else {
            crate::log_warning(&format!("JumpInput: entity {:?} has no jump controller", event.entity));
            continue;
        };

        let outcome = jump.try_jump();
        match outcome {
            JumpOutcome::Ground => {
                impulse.impulse += Vec3::Y * config.jump_force;
            }
            JumpOutcome::Air => {
                velocity.linvel.y = 0.0;
                impulse.impulse += Vec3::Y * config.jump_force;
            }
            JumpOutcome::Exhausted => {}
        }

        crate::log(&format!(
            "Jump {:?}: {:?} (performed {}, remaining {})",
            event.entity, outcome, jump.jumps_performed, jump.jumps_remaining
        ));
    }
}
