//! Movement компоненты: pending motion + jump counters

use bevy::prelude::*;

/// Jumps allowed between two contacts
pub const MAX_JUMPS: u8 = 2;

/// Pending motion of the controlled body
///
/// Пишется input handlers (move/look), применяется каждый frame к Transform.
/// Значения остаются до следующего input event (не обнуляются после frame).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MovementState {
    /// Local-space planar velocity: `x` = right, `y` = forward (units/sec)
    pub planar_velocity: Vec2,
    /// Yaw rate (degrees/sec), positive turns right
    pub yaw_rate: f32,
}

impl MovementState {
    /// Translate + rotate `transform` by this state over `delta` seconds
    ///
    /// Translation is in local space (rotated by the current orientation),
    /// then yaw is applied around local Y.
    pub fn apply_to(&self, transform: &mut Transform, delta: f32) {
        // forward = local -Z
        let local_offset = Vec3::new(self.planar_velocity.x, 0.0, -self.planar_velocity.y) * delta;
        let world_offset = transform.rotation * local_offset;
        transform.translation += world_offset;

        // Positive yaw_rate = clockwise seen from above = negative rotation around +Y
        transform.rotate_local_y(-(self.yaw_rate * delta).to_radians());
    }
}

/// Result of a jump request against `JumpState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// First jump from the ground: impulse only
    Ground,
    /// Aerial jump: zero vertical velocity, then impulse
    Air,
    /// Both jumps used, nothing happens until the next contact
    Exhausted,
}

/// Double jump counters
///
/// Инвариант: `jumps_performed <= MAX_JUMPS`.
/// Сбрасывается в `default()` при ЛЮБОМ контакте (см. `reset_jumps_on_contact`).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct JumpState {
    pub airborne: bool,
    pub jumps_remaining: u8,
    pub jumps_performed: u8,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            airborne: false,
            jumps_remaining: MAX_JUMPS,
            jumps_performed: 0,
        }
    }
}

impl JumpState {
    /// Advance the state machine by one jump request
    ///
    /// The ground branch only fires once per contact because it sets `airborne`;
    /// the second jump always goes through the aerial branch, so
    /// `jumps_remaining` never gets below `MAX_JUMPS - 1` in practice.
    pub fn try_jump(&mut self) -> JumpOutcome {
        if self.jumps_remaining > 0 && !self.airborne {
            self.airborne = true;
            self.jumps_remaining -= 1;
            self.jumps_performed += 1;
            JumpOutcome::Ground
        } else if self.jumps_performed < MAX_JUMPS {
            self.jumps_performed += 1;
            JumpOutcome::Air
        } else {
            JumpOutcome::Exhausted
        }
    }

    /// Contact: back to grounded with full jumps
    pub fn land(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_jump_from_ground() {
        let mut jump = JumpState::default();

        assert_eq!(jump.try_jump(), JumpOutcome::Ground);
        assert_eq!(
            jump,
            JumpState {
                airborne: true,
                jumps_remaining: 1,
                jumps_performed: 1,
            }
        );
    }

    #[test]
    fn test_second_jump_is_aerial() {
        let mut jump = JumpState::default();
        jump.try_jump();

        // jumps_remaining == 1, но airborne → aerial branch
        assert_eq!(jump.try_jump(), JumpOutcome::Air);
        assert_eq!(jump.jumps_performed, 2);
        assert_eq!(jump.jumps_remaining, 1);
    }

    #[test]
    fn test_third_jump_is_noop() {
        let mut jump = JumpState::default();
        jump.try_jump();
        jump.try_jump();

        let before = jump;
        assert_eq!(jump.try_jump(), JumpOutcome::Exhausted);
        assert_eq!(jump, before);
    }

    #[test]
    fn test_aerial_jump_with_no_remaining() {
        // Airborne без оставшихся прыжков, но performed < 2 → ещё один aerial
        let mut jump = JumpState {
            airborne: true,
            jumps_remaining: 0,
            jumps_performed: 1,
        };

        assert_eq!(jump.try_jump(), JumpOutcome::Air);
        assert_eq!(jump.jumps_performed, 2);
    }

    #[test]
    fn test_at_most_two_jumps_per_contact() {
        let mut jump = JumpState::default();
        let applied = (0..10)
            .map(|_| jump.try_jump())
            .filter(|outcome| *outcome != JumpOutcome::Exhausted)
            .count();

        assert_eq!(applied, 2);
        assert!(jump.jumps_performed <= MAX_JUMPS);
    }

    #[test]
    fn test_land_resets_any_state() {
        let states = [
            JumpState::default(),
            JumpState { airborne: true, jumps_remaining: 1, jumps_performed: 1 },
            JumpState { airborne: true, jumps_remaining: 1, jumps_performed: 2 },
            JumpState { airborne: true, jumps_remaining: 0, jumps_performed: 2 },
        ];

        for mut jump in states {
            jump.land();
            assert_eq!(jump, JumpState::default());
            assert!(!jump.airborne);
            assert_eq!(jump.jumps_remaining, MAX_JUMPS);
            assert_eq!(jump.jumps_performed, 0);
        }
    }

    #[test]
    fn test_apply_forward_motion() {
        let state = MovementState {
            planar_velocity: Vec2::new(0.0, 4.0),
            yaw_rate: 0.0,
        };
        let mut transform = Transform::IDENTITY;

        state.apply_to(&mut transform, 0.5);

        // Forward = -Z, 4 units/sec * 0.5 sec
        assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-5));
    }

    #[test]
    fn test_apply_motion_is_local_space() {
        let state = MovementState {
            planar_velocity: Vec2::new(0.0, 1.0),
            yaw_rate: 0.0,
        };
        // Повёрнут на 90° вправо → forward смотрит в +X
        let mut transform = Transform::from_rotation(Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2));

        state.apply_to(&mut transform, 1.0);

        assert!(transform.translation.abs_diff_eq(Vec3::X, 1e-5), "got {:?}", transform.translation);
    }

    #[test]
    fn test_apply_yaw_turns_right() {
        let state = MovementState {
            planar_velocity: Vec2::ZERO,
            yaw_rate: 90.0,
        };
        let mut transform = Transform::IDENTITY;

        state.apply_to(&mut transform, 1.0);

        assert!(transform.forward().as_vec3().abs_diff_eq(Vec3::X, 1e-5), "forward = {:?}", transform.forward());
    }

    #[test]
    fn test_apply_zero_delta_is_noop() {
        let state = MovementState {
            planar_velocity: Vec2::new(3.0, -7.0),
            yaw_rate: 45.0,
        };
        let start = Transform::from_xyz(1.0, 2.0, 3.0);
        let mut transform = start;

        state.apply_to(&mut transform, 0.0);

        assert_eq!(transform, start);
    }

    #[test]
    fn test_apply_scales_linearly_with_delta() {
        let state = MovementState {
            planar_velocity: Vec2::new(1.5, 2.0),
            yaw_rate: 0.0,
        };
        let mut short = Transform::IDENTITY;
        let mut long = Transform::IDENTITY;

        state.apply_to(&mut short, 0.1);
        state.apply_to(&mut long, 0.3);

        assert!((long.translation - short.translation * 3.0).length() < 1e-5);
    }
}
