use std::path::PathBuf;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use shooter_simulation::{spawn_ground, spawn_player, ShooterConfig, SimulationPlugin};

mod bindings;
mod camera;
mod rendering;

use bindings::InputBindingsPlugin;
use camera::CameraPlugin;
use rendering::RenderingSyncPlugin;

const ARENA_HALF_EXTENT: f32 = 25.0;

/// Loaded config, read once by `setup_scene`
#[derive(Resource)]
struct ClientConfig(ShooterConfig);

fn main() {
    // Usage: shooter_client [config.ron]
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    shooter_simulation::init_logger();
    let config = ShooterConfig::load_or_default(config_path.as_deref());

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Shooter".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Physics (rigid body step, impulses, collision events)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        // Simulation (controller + projectiles)
        .add_plugins(SimulationPlugin)
        .insert_resource(config.projectile)
        .insert_resource(ClientConfig(config))
        // Keyboard/mouse → input events
        .add_plugins(InputBindingsPlugin)
        // Projectile visuals
        .add_plugins(RenderingSyncPlugin)
        // Follow camera
        .add_plugins(CameraPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Spawn ground, some cover boxes, lights, camera and the player
fn setup_scene(
    mut commands: Commands,
    config: Res<ClientConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let controller = config.0.controller;

    // Ground (top face at y=0)
    let ground = spawn_ground(&mut commands, Vec2::splat(ARENA_HALF_EXTENT), &controller);
    commands.entity(ground).insert((
        Mesh3d(meshes.add(Cuboid::new(ARENA_HALF_EXTENT * 2.0, 0.2, ARENA_HALF_EXTENT * 2.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
    ));

    // Boxes to jump on / shoot at
    let crate_mesh = meshes.add(Cuboid::new(2.0, 2.0, 2.0));
    let crate_material = materials.add(Color::srgb(0.55, 0.4, 0.25));
    for position in [
        Vec3::new(4.0, 1.0, -6.0),
        Vec3::new(-5.0, 1.0, -3.0),
        Vec3::new(0.0, 1.0, -12.0),
        Vec3::new(8.0, 3.0, -10.0),
    ] {
        commands.spawn((
            Mesh3d(crate_mesh.clone()),
            MeshMaterial3d(crate_material.clone()),
            Transform::from_translation(position),
            RigidBody::Fixed,
            Collider::cuboid(1.0, 1.0, 1.0),
        ));
    }

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4)),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    // Player (capsule visual on the physics entity)
    let spawned = spawn_player(&mut commands, Vec3::new(0.0, 1.5, 0.0), controller);
    commands.entity(spawned.player).insert((
        Mesh3d(meshes.add(Capsule3d::new(
            shooter_simulation::player::PLAYER_RADIUS,
            shooter_simulation::player::PLAYER_HALF_HEIGHT * 2.0,
        ))),
        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.8))),
    ));

    // Camera (follows the player)
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
        camera::FollowCamera::default(),
    ));
}
