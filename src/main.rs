use std::sync::{Arc, RwLock};
use std::time::Duration;

use player_status_server::config::{self, Config};
use player_status_server::host::{BlockPos, LiveStateAccessor, PlayerStatus, PlayerView, Position};
use player_status_server::logger;

/// Ticks before the simulated player joins the world
const JOIN_AFTER_TICKS: u32 = 3;
const TICK: Duration = Duration::from_secs(1);

/// Stand-in for a game client: owns a player that moves every tick
struct DemoHost {
    player: RwLock<Option<PlayerStatus>>,
}

impl DemoHost {
    const fn new() -> Self {
        Self {
            player: RwLock::new(None),
        }
    }

    fn tick(&self, tick: u32) {
        let Ok(mut guard) = self.player.write() else {
            return;
        };
        if tick < JOIN_AFTER_TICKS {
            return;
        }
        let player = guard.get_or_insert_with(|| PlayerStatus {
            name: "Demo Player".to_string(),
            health: 20.0,
            food_level: 20,
            saturation: 5.0,
            position: Position::new(0.5, 64.0, 0.5),
        });

        player.position.x += 1.75;
        player.position.z -= 0.4;
        if tick % 5 == 0 {
            player.food_level = (player.food_level - 1).max(0);
            player.saturation = (player.saturation - 0.6).max(0.0);
        }
        if player.food_level < 6 {
            player.health = (player.health - 0.5).max(0.0);
        }
    }
}

impl LiveStateAccessor for DemoHost {
    fn player(&self) -> Option<Box<dyn PlayerView + '_>> {
        let guard = self.player.read().ok()?;
        guard
            .clone()
            .map(|player| Box::new(player) as Box<dyn PlayerView>)
    }

    fn biome_at(&self, pos: BlockPos) -> Option<String> {
        let biome = match pos.x.rem_euclid(300) {
            0..=99 => "minecraft:plains",
            100..=199 => "minecraft:forest",
            _ => "minecraft:desert",
        };
        Some(biome.to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg.logging)?;

    let host = Arc::new(DemoHost::new());
    let handle = player_status_server::launch(&cfg, Arc::clone(&host) as Arc<dyn LiveStateAccessor>);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut interval = tokio::time::interval(TICK);
        let mut tick = 0u32;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    host.tick(tick);
                    tick = tick.wrapping_add(1);
                }
                _ = tokio::signal::ctrl_c() => {
                    logger::log_info("Ctrl-C received, shutting down");
                    break;
                }
            }
        }
    });

    if let Some(handle) = handle {
        handle.stop()?;
    }
    Ok(())
}
