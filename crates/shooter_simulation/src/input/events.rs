//! Player input events
//!
//! Каждый event адресован конкретному entity (обычно единственный `Player`).
//! Payload = "сырое" значение input action, масштабирование делает controller.

use bevy::prelude::{Entity, Event, Vec2};

/// Move action value (emitted on change, including back to zero)
///
/// - `x`: -1.0 (left) → +1.0 (right)
/// - `y`: -1.0 (backward) → +1.0 (forward)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MoveInput {
    pub entity: Entity,
    pub direction: Vec2,
}

/// Look action value (mouse delta); only `x` drives yaw
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LookInput {
    pub entity: Entity,
    pub direction: Vec2,
}

/// Fire button (press → `true`, release → `false`)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireInput {
    pub entity: Entity,
    pub pressed: bool,
}

/// Jump button
///
/// `pressed` is carried for symmetry with `FireInput`; every `JumpInput`
/// runs the jump state machine.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpInput {
    pub entity: Entity,
    pub pressed: bool,
}
