//! Server configuration.

use std::time::Duration;

/// Tunables for the match coordinator.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Delay between a round concluding (win or draw) and the board reset.
    pub restart_delay: Duration,

    /// Period of the leaderboard push to subscribed connections.
    pub broadcast_interval: Duration,

    /// Points awarded to the winner of a round.
    pub win_points: u64,

    /// Points awarded to each player of a drawn round.
    pub draw_points: u64,

    /// Entries included in leaderboard snapshots.
    pub leaderboard_size: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            restart_delay: Duration::from_millis(2000),
            broadcast_interval: Duration::from_millis(2000),
            win_points: 100,
            draw_points: 10,
            leaderboard_size: 10,
        }
    }
}

/// Tunables for the virtual opponent.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Display name the automated opponent plays under.
    pub display_name: String,

    /// Lower bound on the simulated thinking time per move.
    pub min_response: Duration,

    /// Upper bound on the simulated thinking time per move.
    pub max_response: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            display_name: "The machine".to_string(),
            min_response: Duration::from_millis(1000),
            max_response: Duration::from_millis(1000),
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address of the WebSocket match endpoint.
    pub game_addr: String,

    /// Address of the auxiliary HTTP leaderboard endpoint.
    pub http_addr: String,

    /// Coordinator tunables.
    pub coordinator: CoordinatorConfig,

    /// Virtual-opponent tunables.
    pub bot: BotConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            game_addr: "0.0.0.0:9000".to_string(),
            http_addr: "0.0.0.0:3000".to_string(),
            coordinator: CoordinatorConfig::default(),
            bot: BotConfig::default(),
        }
    }
}
