//! Player + arena spawn helpers
//!
//! Создают entity с полным набором компонентов контроллера и rapier body.
//! Визуалы (mesh/material) добавляет client поверх возвращённых entity.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{JumpState, MovementState, Player, ProjectileSpawnPoint, ShootPoint};
use crate::config::ControllerConfig;

/// Capsule: half height 0.5m + radius 0.4m (total 1.8m)
pub const PLAYER_HALF_HEIGHT: f32 = 0.5;
pub const PLAYER_RADIUS: f32 = 0.4;

/// Spawn point offset in player-local space: chest height, in front of the capsule
pub const SPAWN_POINT_OFFSET: Vec3 = Vec3::new(0.0, 0.4, -0.8);

/// Handles returned by `spawn_player`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedPlayer {
    pub player: Entity,
    pub spawn_point: Entity,
}

/// Spawn the controlled character
///
/// - Transform + наши компоненты (Player, ControllerConfig, MovementState, JumpState, ShootPoint)
/// - Rapier: dynamic capsule, rotation locked (yaw крутим через Transform),
///   Velocity/ExternalImpulse/ExternalForce, collision events для jump reset
/// - Child: ProjectileSpawnPoint на `SPAWN_POINT_OFFSET`
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: ControllerConfig) -> SpawnedPlayer {
    let spawn_point = commands
        .spawn((ProjectileSpawnPoint, Transform::from_translation(SPAWN_POINT_OFFSET)))
        .id();

    let player = commands
        .spawn((
            Transform::from_translation(position),
            Player,
            config,
            MovementState::default(),
            JumpState::default(),
            ShootPoint(spawn_point),
            RigidBody::Dynamic,
            Collider::capsule_y(PLAYER_HALF_HEIGHT, PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            Velocity::default(),
            ExternalImpulse::default(),
            ExternalForce::default(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .add_child(spawn_point)
        .id();

    crate::log_info(&format!("Spawned player {:?} at {:?}", player, position));

    SpawnedPlayer { player, spawn_point }
}

/// Spawn a fixed ground slab whose top face is at `y = 0`
///
/// Коллайдер входит в `config.ground_groups`.
pub fn spawn_ground(commands: &mut Commands, half_extents: Vec2, config: &ControllerConfig) -> Entity {
    const HALF_THICKNESS: f32 = 0.1;

    let membership = Group::from_bits_truncate(config.ground_groups);

    commands
        .spawn((
            Transform::from_xyz(0.0, -HALF_THICKNESS, 0.0),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, HALF_THICKNESS, half_extents.y),
            CollisionGroups::new(membership, Group::ALL),
        ))
        .id()
}
