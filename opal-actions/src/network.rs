//! Network reachability state.
//!
//! One object under [`keys::NETWORK`], mutated a field at a time by the
//! connection monitor. Each setter merges only its own field so monitors
//! running concurrently (reachability probe, clock-skew check) never stomp
//! each other's state.

use opal_store::{Store, StoreResult};
use opal_types::keys;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Reachability as reported by the platform connectivity monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    Online,
    Offline,
    Unknown,
}

/// Network state stored under [`keys::NETWORK`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_offline: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_status: Option<NetworkStatus>,

    /// Offset between server and device clocks, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_skew: Option<i64>,

    /// Test tool: forces offline mode regardless of reachability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_force_offline: Option<bool>,

    /// When the client last went offline (ISO-8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_offline_at: Option<String>,
}

/// Records an offline/online transition, logging why when a reason is given.
pub async fn set_is_offline(store: &Store, is_offline: bool, reason: &str) -> StoreResult<()> {
    if !reason.is_empty() {
        let direction = if is_offline {
            "entering offline mode"
        } else {
            "back online"
        };
        info!("client is {direction} because: {reason}");
    }
    store
        .merge(
            keys::NETWORK,
            Network {
                is_offline: Some(is_offline),
                ..Default::default()
            },
        )
        .await
}

/// Records the monitor's current reachability verdict.
pub async fn set_network_status(store: &Store, status: NetworkStatus) -> StoreResult<()> {
    store
        .merge(
            keys::NETWORK,
            Network {
                network_status: Some(status),
                ..Default::default()
            },
        )
        .await
}

/// Records the measured server/device clock skew.
pub async fn set_time_skew(store: &Store, skew_millis: i64) -> StoreResult<()> {
    store
        .merge(
            keys::NETWORK,
            Network {
                time_skew: Some(skew_millis),
                ..Default::default()
            },
        )
        .await
}

/// Forces (or stops forcing) offline mode; a test tool.
pub async fn set_should_force_offline(store: &Store, should_force: bool) -> StoreResult<()> {
    store
        .merge(
            keys::NETWORK,
            Network {
                should_force_offline: Some(should_force),
                ..Default::default()
            },
        )
        .await
}

/// Records when the client last went offline.
pub async fn set_network_last_offline(store: &Store, last_offline_at: String) -> StoreResult<()> {
    store
        .merge(
            keys::NETWORK,
            Network {
                last_offline_at: Some(last_offline_at),
                ..Default::default()
            },
        )
        .await
}
