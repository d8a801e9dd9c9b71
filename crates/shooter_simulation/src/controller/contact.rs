//! Contact → jump reset

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

use crate::components::JumpState;

/// System: any contact start resets JumpState
///
/// Нормаль контакта и группы коллайдеров НЕ проверяются: стена, потолок,
/// снаряд: всё считается "приземлением". `CollisionEvent::Stopped` игнорируется.
///
/// Требует `ActiveEvents::COLLISION_EVENTS` на коллайдере игрока (см. `spawn_player`).
pub fn reset_jumps_on_contact(
    mut collisions: EventReader<CollisionEvent>,
    mut jumpers: Query<&mut JumpState>,
) {
    for collision in collisions.read() {
        let CollisionEvent::Started(first, second, _) = collision else {
            continue;
        };

        for entity in [*first, *second] {
            if let Ok(mut jump) = jumpers.get_mut(entity) {
                jump.land();
            }
        }
    }
}
