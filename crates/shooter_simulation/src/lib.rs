//! Shooter Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: double-jump character controller + projectiles.
//!
//! - Input events (move/look/fire/jump) → controller systems
//! - Physics body = bevy_rapier3d components (Velocity, ExternalImpulse, ExternalForce)
//! - Rendering/input devices: в shooter_client, здесь только gameplay state

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

pub mod components;
pub mod config;
pub mod controller;
pub mod input;
pub mod logger;
pub mod player;
pub mod projectile;

pub use components::*;
pub use config::{ConfigError, ControllerConfig, ShooterConfig};
pub use controller::{CharacterControllerPlugin, ControllerSet};
pub use input::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use player::{spawn_ground, spawn_player, SpawnedPlayer};
pub use projectile::{Projectile, ProjectileFired, ProjectilePlugin, ProjectilePrefab};

/// Fixed step rate (Hz)
pub const FIXED_HZ: f64 = 60.0;

/// Главный plugin симуляции
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            // Controller тянет за собой ProjectilePlugin
            .add_plugins(CharacterControllerPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время идёт ручными шагами по 1/FIXED_HZ за `app.update()`:
/// FixedUpdate срабатывает ~раз за update (первый update имеет delta 0).
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / FIXED_HZ)))
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ));

    app
}
