//! Projectile domain
//!
//! - ProjectilePrefab (resource): шаблон, из которого спавнится снаряд
//! - Projectile (component) + ProjectileFired (event)
//! - handle_fire_input: FireInput → spawn в позе spawn point
//! - expire_projectiles: lifetime cleanup (FixedUpdate)
//!
//! Ни pooling, ни rate limiting: каждый FireInput { pressed: true } = один новый entity.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody, Velocity};
use serde::{Deserialize, Serialize};

use crate::components::{ProjectileSpawnPoint, ShootPoint};
use crate::input::FireInput;

/// Template for spawned projectiles
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct ProjectilePrefab {
    /// Ball collider radius (m)
    pub radius: f32,
    /// Initial speed along the spawn point's forward axis (m/s)
    pub muzzle_speed: f32,
    /// Seconds before despawn; `<= 0` = never
    pub lifetime_secs: f32,
}

impl Default for ProjectilePrefab {
    fn default() -> Self {
        Self {
            radius: 0.1,
            muzzle_speed: 30.0,
            lifetime_secs: 5.0,
        }
    }
}

impl ProjectilePrefab {
    /// Spawn one projectile at `pose`, returns its entity
    pub fn instantiate(&self, commands: &mut Commands, shooter: Entity, pose: Transform) -> Entity {
        let remaining = (self.lifetime_secs > 0.0).then_some(self.lifetime_secs);

        commands
            .spawn((
                Projectile { shooter, remaining },
                pose,
                RigidBody::Dynamic,
                Collider::ball(self.radius),
                Velocity::linear(pose.forward().as_vec3() * self.muzzle_speed),
            ))
            .id()
    }
}

/// Spawned projectile
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Projectile {
    /// Кто выстрелил
    pub shooter: Entity,
    /// Seconds left (None = lives until the world drops it)
    pub remaining: Option<f32>,
}

/// Event: projectile spawned
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ProjectileFired {
    pub shooter: Entity,
    pub projectile: Entity,
    pub position: Vec3,
    pub rotation: Quat,
}

/// System: FireInput { pressed: true } → one projectile at the spawn point pose
///
/// Поза берётся из `GlobalTransform` spawn point (world space), т.е. состояние
/// на момент последней propagation (PostUpdate прошлого frame). Система стоит
/// ДО apply_planar_motion, поэтому это и есть текущая поза на момент input.
pub fn handle_fire_input(
    mut commands: Commands,
    mut events: EventReader<FireInput>,
    shooters: Query<&ShootPoint>,
    spawn_points: Query<&GlobalTransform, With<ProjectileSpawnPoint>>,
    prefab: Res<ProjectilePrefab>,
    mut fired_events: EventWriter<ProjectileFired>,
) {
    for event in events.read() {
        if !event.pressed {
            continue;
        }

        let Ok(shoot_point) = shooters.get(event.entity) else {
            crate::log_warning(&format!("FireInput: entity {:?} has no ShootPoint", event.entity));
            continue;
        };

        let Ok(spawn_pose) = spawn_points.get(shoot_point.0) else {
            crate::log_warning(&format!(
                "FireInput: spawn point {:?} of {:?} not found",
                shoot_point.0, event.entity
            ));
            continue;
        };

        let pose = spawn_pose.compute_transform();
        let projectile = prefab.instantiate(&mut commands, event.entity, pose);

        fired_events.write(ProjectileFired {
            shooter: event.entity,
            projectile,
            position: pose.translation,
            rotation: pose.rotation,
        });

        crate::log(&format!(
            "🔫 {:?} fired {:?} at {:?}",
            event.entity, projectile, pose.translation
        ));
    }
}

/// System: tick lifetimes, despawn expired projectiles
pub fn expire_projectiles(
    mut commands: Commands,
    mut projectiles: Query<(Entity, &mut Projectile)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut projectile) in projectiles.iter_mut() {
        let Some(remaining) = projectile.remaining.as_mut() else {
            continue;
        };

        *remaining -= delta;
        if *remaining <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Projectile plugin: prefab resource, event, systems
///
/// handle_fire_input регистрируется в CharacterControllerPlugin (общий chain с input handlers).
pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectilePrefab>()
            .register_type::<ProjectilePrefab>()
            .register_type::<Projectile>()
            .add_event::<ProjectileFired>()
            .add_systems(FixedUpdate, expire_projectiles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn test_prefab_defaults() {
        let prefab = ProjectilePrefab::default();
        assert!(prefab.radius > 0.0);
        assert!(prefab.lifetime_secs > 0.0);
    }

    #[test]
    fn test_instantiate_uses_pose_and_forward_velocity() {
        let mut world = World::new();
        let shooter = world.spawn_empty().id();
        let pose = Transform::from_xyz(1.0, 2.0, 3.0).looking_to(Vec3::X, Vec3::Y);
        let prefab = ProjectilePrefab {
            muzzle_speed: 10.0,
            ..default()
        };

        let projectile = world
            .run_system_once(move |mut commands: Commands| prefab.instantiate(&mut commands, shooter, pose))
            .unwrap();

        assert_eq!(*world.get::<Transform>(projectile).unwrap(), pose);
        let velocity = world.get::<Velocity>(projectile).unwrap();
        assert!(velocity.linvel.abs_diff_eq(Vec3::X * 10.0, 1e-5), "linvel = {:?}", velocity.linvel);
        assert_eq!(world.get::<Projectile>(projectile).unwrap().shooter, shooter);
    }

    #[test]
    fn test_zero_lifetime_never_expires() {
        let mut world = World::new();
        let shooter = world.spawn_empty().id();
        let prefab = ProjectilePrefab {
            lifetime_secs: 0.0,
            ..default()
        };

        let projectile = world
            .run_system_once(move |mut commands: Commands| {
                prefab.instantiate(&mut commands, shooter, Transform::IDENTITY)
            })
            .unwrap();

        assert_eq!(world.get::<Projectile>(projectile).unwrap().remaining, None);
    }

    #[test]
    fn test_expire_after_lifetime() {
        let mut world = World::new();
        world.insert_resource(Time::<Fixed>::from_hz(60.0));
        let shooter = world.spawn_empty().id();
        let short = world
            .spawn(Projectile { shooter, remaining: Some(0.3) })
            .id();
        let long = world
            .spawn(Projectile { shooter, remaining: Some(2.0) })
            .id();
        let forever = world
            .spawn(Projectile { shooter, remaining: None })
            .id();

        world.resource_mut::<Time<Fixed>>().advance_by(Duration::from_millis(500));
        world.run_system_once(expire_projectiles).unwrap();

        assert!(world.get_entity(short).is_err(), "short-lived projectile should be gone");
        assert!(world.get_entity(forever).is_ok());
        let remaining = world.get::<Projectile>(long).unwrap().remaining.unwrap();
        assert!((remaining - 1.5).abs() < 1e-5);
    }
}
