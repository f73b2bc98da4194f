//! Player snapshot endpoint
//!
//! Reads the host's live player once per request and renders a flat JSON
//! object with fixed key order and fixed numeric precision.

use crate::host::{LiveStateAccessor, Position};
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Body returned while the host has no player loaded (HTTP 200)
pub const PLAYER_NOT_LOADED: &str = r#"{"error":"Player not loaded"}"#;

/// Biome reported when the world lookup has nothing
pub const UNKNOWN_BIOME: &str = "unknown";

/// Point-in-time copy of the player fields served by `/player`
///
/// Fields are read one after another from the live state, so a snapshot
/// taken while the host mutates the player can mix two ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub health: f32,
    pub hunger: i32,
    pub saturation: f32,
    pub position: Position,
    pub biome: String,
}

impl PlayerSnapshot {
    /// Read the current player, or `None` if the host has not loaded one
    pub fn capture(live_state: &dyn LiveStateAccessor) -> Option<Self> {
        let player = live_state.player()?;
        let position = player.position();
        let biome = live_state
            .biome_at(position.block_pos())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| UNKNOWN_BIOME.to_string());

        Some(Self {
            name: player.display_name(),
            health: player.health(),
            hunger: player.food_level(),
            saturation: player.saturation(),
            position,
            biome,
        })
    }

    /// `{"name":..,"health":..,"hunger":..,"saturation":..,"x":..,"y":..,"z":..,"biome":..}`
    pub fn to_json(&self) -> String {
        format!(
            r#"{{"name":{},"health":{},"hunger":{},"saturation":{},"x":{},"y":{},"z":{},"biome":{}}}"#,
            json_string(&self.name),
            fixed(f64::from(self.health), 1),
            self.hunger,
            fixed(f64::from(self.saturation), 1),
            fixed(self.position.x, 2),
            fixed(self.position.y, 2),
            fixed(self.position.z, 2),
            json_string(&self.biome),
        )
    }
}

/// Serve the `/player` route
pub fn serve_player(live_state: &dyn LiveStateAccessor, is_head: bool) -> Response<Full<Bytes>> {
    let body = match PlayerSnapshot::capture(live_state) {
        Some(snapshot) => snapshot.to_json(),
        None => PLAYER_NOT_LOADED.to_string(),
    };
    http::build_json_response(body, is_head)
}

fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Fixed-point rendering, rounding half away from zero on the shortest
/// decimal form of `value` (`64.125` -> `64.13`)
///
/// Non-finite values become zero so the body stays valid JSON.
fn fixed(value: f64, decimals: u32) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let precision = decimals as usize;
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        // Outside Decimal's range: binary rounding is all that is left
        Err(_) => format!("{value:.precision$}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{BlockPos, PlayerStatus, PlayerView};
    use std::collections::BTreeSet;

    struct FakeHost {
        player: Option<PlayerStatus>,
        biome: Option<String>,
    }

    impl LiveStateAccessor for FakeHost {
        fn player(&self) -> Option<Box<dyn PlayerView + '_>> {
            self.player
                .clone()
                .map(|p| Box::new(p) as Box<dyn PlayerView>)
        }

        fn biome_at(&self, _pos: BlockPos) -> Option<String> {
            self.biome.clone()
        }
    }

    fn steve() -> PlayerStatus {
        PlayerStatus {
            name: "Steve".to_string(),
            health: 7.0,
            food_level: 18,
            saturation: 3.3,
            position: Position::new(10.0, 64.5, -3.456),
        }
    }

    fn host_with(player: PlayerStatus, biome: Option<&str>) -> FakeHost {
        FakeHost {
            player: Some(player),
            biome: biome.map(ToString::to_string),
        }
    }

    #[test]
    fn test_exact_body() {
        let host = host_with(steve(), Some("minecraft:plains"));
        let json = PlayerSnapshot::capture(&host).unwrap().to_json();
        assert_eq!(
            json,
            r#"{"name":"Steve","health":7.0,"hunger":18,"saturation":3.3,"x":10.00,"y":64.50,"z":-3.46,"biome":"minecraft:plains"}"#
        );
    }

    #[test]
    fn test_precision_regardless_of_input() {
        let mut player = steve();
        player.health = 19.96;
        player.saturation = 0.0;
        player.position = Position::new(1.0 / 3.0, 70.0, 123_456.789);
        let json = PlayerSnapshot::capture(&host_with(player, None)).unwrap().to_json();
        assert!(json.contains(r#""health":20.0"#), "{json}");
        assert!(json.contains(r#""saturation":0.0"#), "{json}");
        assert!(json.contains(r#""x":0.33,"y":70.00,"z":123456.79"#), "{json}");
    }

    #[test]
    fn test_ties_round_half_up() {
        let mut player = steve();
        player.health = 0.25;
        player.saturation = 2.45;
        player.position = Position::new(10.125, 64.125, 0.005);
        let json = PlayerSnapshot::capture(&host_with(player, None)).unwrap().to_json();
        assert!(json.contains(r#""health":0.3,"#), "{json}");
        assert!(json.contains(r#""saturation":2.5,"#), "{json}");
        assert!(json.contains(r#""x":10.13,"y":64.13,"z":0.01"#), "{json}");
    }

    #[test]
    fn test_negative_ties_round_away_from_zero() {
        assert_eq!(fixed(-10.125, 2), "-10.13");
        assert_eq!(fixed(-0.25, 1), "-0.3");
        assert_eq!(fixed(-3.456, 2), "-3.46");
    }

    #[test]
    fn test_fixed_pads_and_handles_large_values() {
        assert_eq!(fixed(7.0, 1), "7.0");
        assert_eq!(fixed(0.0, 2), "0.00");
        assert_eq!(fixed(29_999_984.5, 2), "29999984.50");
        assert_eq!(fixed(1e30, 2), format!("{:.2}", 1e30));
    }

    #[test]
    fn test_unknown_biome() {
        let snapshot = PlayerSnapshot::capture(&host_with(steve(), None)).unwrap();
        assert_eq!(snapshot.biome, "unknown");

        let snapshot = PlayerSnapshot::capture(&host_with(steve(), Some(""))).unwrap();
        assert_eq!(snapshot.biome, "unknown");
    }

    #[test]
    fn test_biome_looked_up_at_block_position() {
        struct Recorder(std::sync::Mutex<Option<BlockPos>>);
        impl LiveStateAccessor for Recorder {
            fn player(&self) -> Option<Box<dyn PlayerView + '_>> {
                Some(Box::new(steve()))
            }
            fn biome_at(&self, pos: BlockPos) -> Option<String> {
                *self.0.lock().unwrap() = Some(pos);
                None
            }
        }

        let host = Recorder(std::sync::Mutex::new(None));
        PlayerSnapshot::capture(&host).unwrap();
        assert_eq!(
            *host.0.lock().unwrap(),
            Some(BlockPos { x: 10, y: 64, z: -4 })
        );
    }

    #[test]
    fn test_no_player() {
        let host = FakeHost {
            player: None,
            biome: Some("minecraft:plains".to_string()),
        };
        assert!(PlayerSnapshot::capture(&host).is_none());
    }

    #[test]
    fn test_name_escaping_round_trips() {
        let mut player = steve();
        player.name = "\"Quote\" \\ back\u{e9}\u{1f600}\n".to_string();
        let json = PlayerSnapshot::capture(&host_with(player.clone(), None))
            .unwrap()
            .to_json();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], player.name.as_str());
    }

    #[test]
    fn test_exact_key_set() {
        let json = PlayerSnapshot::capture(&host_with(steve(), None)).unwrap().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keys: BTreeSet<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let expected: BTreeSet<&str> =
            ["name", "health", "hunger", "saturation", "x", "y", "z", "biome"].into();
        assert_eq!(keys, expected);

        let value: serde_json::Value = serde_json::from_str(PLAYER_NOT_LOADED).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value["error"], "Player not loaded");
    }

    #[test]
    fn test_non_finite_values_stay_valid_json() {
        let mut player = steve();
        player.health = f32::NAN;
        player.position = Position::new(f64::INFINITY, 0.0, f64::NEG_INFINITY);
        let json = PlayerSnapshot::capture(&host_with(player, None)).unwrap().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["health"], 0.0);
        assert_eq!(value["x"], 0.0);
    }
}
