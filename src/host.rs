//! Host integration points
//!
//! The embedding application owns the live player state. The server only
//! reads it through [`LiveStateAccessor`], which is injected when the
//! application state is built, so nothing here reaches for a global.

/// World-space coordinates of an entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Block containing this position (each coordinate floored)
    #[allow(clippy::cast_possible_truncation)]
    pub fn block_pos(self) -> BlockPos {
        BlockPos {
            x: self.x.floor() as i32,
            y: self.y.floor() as i32,
            z: self.z.floor() as i32,
        }
    }
}

/// Integer block coordinates used for world lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Read access to the host's player entity
///
/// Every getter reads the live value; consecutive calls may observe
/// different host ticks.
pub trait PlayerView {
    fn display_name(&self) -> String;
    fn health(&self) -> f32;
    fn food_level(&self) -> i32;
    fn saturation(&self) -> f32;
    fn position(&self) -> Position;
}

/// Capability handed to the server by the host
pub trait LiveStateAccessor: Send + Sync {
    /// Current player, or `None` while the host has not loaded one
    fn player(&self) -> Option<Box<dyn PlayerView + '_>>;

    /// Namespaced biome identifier at a block, if the world can tell
    fn biome_at(&self, pos: BlockPos) -> Option<String>;
}

/// Plain owned player state
///
/// Hosts that copy their state on every tick can hand this out directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatus {
    pub name: String,
    pub health: f32,
    pub food_level: i32,
    pub saturation: f32,
    pub position: Position,
}

impl PlayerView for PlayerStatus {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn food_level(&self) -> i32 {
        self.food_level
    }

    fn saturation(&self) -> f32 {
        self.saturation
    }

    fn position(&self) -> Position {
        self.position
    }
}
