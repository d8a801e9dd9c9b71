//! Player control marker + spawn point link

use bevy::prelude::*;

/// Marker component для player-controlled entity
///
/// Input bindings (client) ищут entity через `With<Player>`.
/// Сами controller systems работают по entity из input events.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Entity, с которого копируется поза снаряда при выстреле
///
/// Обычно child entity игрока (см. `spawn_player`), но не обязательно.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct ShootPoint(pub Entity);

/// Marker: entity is a projectile spawn point
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ProjectileSpawnPoint;
