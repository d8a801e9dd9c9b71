use bevy::input::mouse::{AccumulatedMouseMotion, MouseWheel};
use bevy::prelude::*;
use shooter_simulation::{ControllerSet, Player};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (follow_camera_controls, update_camera_transform)
                .chain()
                .after(ControllerSet),
        );
    }
}

/// Third-person camera behind the player
///
/// Yaw берётся у игрока (его крутит LookInput), мышь по Y меняет только pitch камеры.
#[derive(Component)]
pub struct FollowCamera {
    pub distance: f32,
    pub pitch: f32, // Vertical angle above the player's forward axis (radians)
    pub focus_height: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            distance: 6.0,
            pitch: std::f32::consts::FRAC_PI_8,
            focus_height: 1.2,
            sensitivity: 0.003,
            zoom_speed: 0.5,
        }
    }
}

/// Mouse Y → pitch, wheel → distance
fn follow_camera_controls(
    mut query: Query<&mut FollowCamera>,
    motion: Res<AccumulatedMouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
) {
    let mut camera = match query.single_mut() {
        Ok(cam) => cam,
        Err(_) => return,
    };

    if motion.delta.y != 0.0 {
        camera.pitch += motion.delta.y * camera.sensitivity;
        camera.pitch = camera.pitch.clamp(-0.2, std::f32::consts::FRAC_PI_2 - 0.1);
    }

    for wheel in mouse_wheel.read() {
        camera.distance -= wheel.y * camera.zoom_speed;
        camera.distance = camera.distance.clamp(2.0, 20.0);
    }
}

/// Place the camera behind the player every frame
fn update_camera_transform(
    players: Query<&Transform, (With<Player>, Without<FollowCamera>)>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    for (camera, mut transform) in cameras.iter_mut() {
        let focus = player.translation + Vec3::Y * camera.focus_height;
        let back = -player.forward().as_vec3();

        let offset = back * camera.distance * camera.pitch.cos() + Vec3::Y * camera.distance * camera.pitch.sin();

        *transform = Transform::from_translation(focus + offset).looking_at(focus, Vec3::Y);
    }
}
