//! Keyboard/mouse → simulation input events
//!
//! - WASD / стрелки → MoveInput (только при изменении значения, включая возврат в ноль)
//! - Mouse motion (накоплено за frame) → LookInput (только при изменении)
//! - LMB press/release → FireInput { true / false }
//! - Space press → JumpInput
//! - Escape → отпустить курсор, LMB по окну → снова захватить

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use shooter_simulation::{ControllerSet, FireInput, JumpInput, LookInput, MoveInput, Player};

pub struct InputBindingsPlugin;

impl Plugin for InputBindingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, lock_cursor)
            .add_systems(
                Update,
                (
                    toggle_cursor_lock,
                    emit_move_input,
                    emit_look_input,
                    emit_fire_input,
                    emit_jump_input,
                )
                    .before(ControllerSet),
            );
    }
}

/// WASD/arrow keys → normalized planar direction (`y` = forward)
pub fn move_direction(keys: &ButtonInput<KeyCode>) -> Vec2 {
    let axis = |positive: [KeyCode; 2], negative: [KeyCode; 2]| {
        let pos = keys.any_pressed(positive) as i8 as f32;
        let neg = keys.any_pressed(negative) as i8 as f32;
        pos - neg
    };

    let x = axis([KeyCode::KeyD, KeyCode::ArrowRight], [KeyCode::KeyA, KeyCode::ArrowLeft]);
    let y = axis([KeyCode::KeyW, KeyCode::ArrowUp], [KeyCode::KeyS, KeyCode::ArrowDown]);

    Vec2::new(x, y).normalize_or_zero()
}

fn set_cursor_locked(window: &mut Window, locked: bool) {
    window.cursor_options.grab_mode = if locked {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::None
    };
    window.cursor_options.visible = !locked;
}

fn lock_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if let Ok(mut window) = windows.single_mut() {
        set_cursor_locked(&mut window, true);
    }
}

fn toggle_cursor_lock(
    keys: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::Escape) {
        set_cursor_locked(&mut window, false);
    } else if mouse_buttons.just_pressed(MouseButton::Left) && window.cursor_options.visible {
        set_cursor_locked(&mut window, true);
    }
}

fn emit_move_input(
    keys: Res<ButtonInput<KeyCode>>,
    players: Query<Entity, With<Player>>,
    mut last: Local<Vec2>,
    mut move_events: EventWriter<MoveInput>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    let direction = move_direction(&keys);
    if direction != *last {
        move_events.write(MoveInput { entity: player, direction });
        *last = direction;
    }
}

fn emit_look_input(
    motion: Res<AccumulatedMouseMotion>,
    players: Query<Entity, With<Player>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut last: Local<Vec2>,
    mut look_events: EventWriter<LookInput>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    // Курсор отпущен → мышь двигает курсор, а не камеру
    let cursor_free = windows
        .single()
        .map(|window| window.cursor_options.visible)
        .unwrap_or(false);
    let direction = if cursor_free { Vec2::ZERO } else { motion.delta };

    if direction != *last {
        look_events.write(LookInput { entity: player, direction });
        *last = direction;
    }
}

fn emit_fire_input(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    players: Query<Entity, With<Player>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut fire_events: EventWriter<FireInput>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    // Клик по отпущенному курсору только захватывает его
    if windows.single().is_ok_and(|window| window.cursor_options.visible) {
        return;
    }

    if mouse_buttons.just_pressed(MouseButton::Left) {
        fire_events.write(FireInput { entity: player, pressed: true });
    }
    if mouse_buttons.just_released(MouseButton::Left) {
        fire_events.write(FireInput { entity: player, pressed: false });
    }
}

fn emit_jump_input(
    keys: Res<ButtonInput<KeyCode>>,
    players: Query<Entity, With<Player>>,
    mut jump_events: EventWriter<JumpInput>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    if keys.just_pressed(KeyCode::Space) {
        jump_events.write(JumpInput { entity: player, pressed: true });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_direction() {
        let keys = ButtonInput::<KeyCode>::default();
        assert_eq!(move_direction(&keys), Vec2::ZERO);
    }

    #[test]
    fn test_forward_is_positive_y() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);
        assert_eq!(move_direction(&keys), Vec2::Y);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::KeyD);

        let direction = move_direction(&keys);
        assert!((direction.length() - 1.0).abs() < 1e-5);
        assert!(direction.x > 0.0 && direction.y > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::ArrowRight);
        assert_eq!(move_direction(&keys), Vec2::ZERO);
    }
}
