//! Headless прогон контроллера
//!
//! Запускает Bevy App без рендера и без rapier step, скармливает scripted input
//! (бег, двойной прыжок, лишний прыжок, "приземление", выстрелы) и логирует состояние.
//!
//! Usage: `shooter_headless [config.ron]`

use std::path::PathBuf;

use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionEvent, ExternalForce, ExternalImpulse};
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use shooter_simulation::{
    create_headless_app, log_info, spawn_ground, spawn_player, FireInput, JumpInput, JumpState, LookInput,
    MoveInput, Projectile, ShooterConfig, SimulationPlugin,
};

const TICKS: u32 = 240;

fn main() {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ShooterConfig::load_or_default(config_path.as_deref());
    app.insert_resource(config.projectile);

    let ground = spawn_ground(&mut app.world_mut().commands(), Vec2::splat(50.0), &config.controller);
    let spawned = spawn_player(&mut app.world_mut().commands(), Vec3::new(0.0, 0.9, 0.0), config.controller);
    let player = spawned.player;

    log_info("Starting shooter headless simulation");

    for tick in 0..TICKS {
        let world = app.world_mut();
        match tick {
            10 => {
                world.send_event(MoveInput { entity: player, direction: Vec2::new(0.0, 1.0) });
                world.send_event(LookInput { entity: player, direction: Vec2::new(3.0, 0.0) });
            }
            40 | 50 | 60 => {
                world.send_event(JumpInput { entity: player, pressed: true });
            }
            90 => {
                world.send_event(CollisionEvent::Started(player, ground, CollisionEventFlags::empty()));
            }
            120 | 150 => {
                world.send_event(FireInput { entity: player, pressed: true });
                world.send_event(FireInput { entity: player, pressed: false });
            }
            180 => {
                world.send_event(MoveInput { entity: player, direction: Vec2::ZERO });
                world.send_event(LookInput { entity: player, direction: Vec2::ZERO });
            }
            _ => {}
        }

        app.update();

        if tick % 30 == 0 || tick == TICKS - 1 {
            report(&mut app, player, tick);
        }
    }

    log_info("Simulation complete!");
}

fn report(app: &mut App, player: Entity, tick: u32) {
    let projectiles = app
        .world_mut()
        .query::<&Projectile>()
        .iter(app.world())
        .count();

    let world = app.world();
    let (Some(transform), Some(jump), Some(impulse), Some(force)) = (
        world.get::<Transform>(player),
        world.get::<JumpState>(player),
        world.get::<ExternalImpulse>(player),
        world.get::<ExternalForce>(player),
    ) else {
        log_info(&format!("Tick {}: player {:?} missing", tick, player));
        return;
    };

    log_info(&format!(
        "Tick {}: pos {:.2?} jumps {}/{} airborne={} impulse.y={:.1} force.y={:.1} projectiles={}",
        tick,
        transform.translation,
        jump.jumps_performed,
        jump.jumps_remaining,
        jump.airborne,
        impulse.impulse.y,
        force.force.y,
        projectiles,
    ));
}
