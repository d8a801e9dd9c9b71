//! ECS Components для player entity
//!
//! - movement: pending planar velocity + yaw rate (MovementState), jump counters (JumpState)
//! - player: player marker + projectile spawn point link (Player, ShootPoint, ProjectileSpawnPoint)

pub mod movement;
pub mod player;

pub use movement::*;
pub use player::*;
