use bevy::prelude::*;
use shooter_simulation::{Projectile, ProjectilePrefab};

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_projectile_visuals)
            .add_systems(Update, attach_projectile_visuals);
    }
}

/// Shared mesh/material for every projectile
#[derive(Resource)]
pub struct ProjectileVisuals {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

fn load_projectile_visuals(
    mut commands: Commands,
    prefab: Res<ProjectilePrefab>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ProjectileVisuals {
        mesh: meshes.add(Sphere::new(prefab.radius)),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(1.0, 0.6, 0.1),
            emissive: LinearRgba::rgb(4.0, 2.0, 0.2),
            ..default()
        }),
    });
}

/// Spawned projectile (simulation entity) → mesh on the same entity
fn attach_projectile_visuals(
    mut commands: Commands,
    visuals: Res<ProjectileVisuals>,
    projectiles: Query<Entity, Added<Projectile>>,
) {
    for entity in projectiles.iter() {
        commands.entity(entity).try_insert((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material.clone()),
        ));
    }
}
