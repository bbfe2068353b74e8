use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Env, Order, StdResult, Storage, Timestamp};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<RoundInfo> = Item::new("round");
pub const ROUND_RESULTS: Map<u64, RoundResult> = Map::new("round_results");

#[cw_serde]
pub struct Config {
    /// The name of the raffle
    pub name: String,
    /// Amount every entrant must pay, the denom is also the pool denom
    pub entrance_fee: Coin,
    /// Minimum time (in seconds) a round stays open before upkeep can close it
    pub round_duration: u64,
    /// The only address allowed to deliver randomness
    pub nois_proxy_addr: Addr,
    /// Fee attached to every randomness request, paid outside of the pool
    pub nois_proxy_coin: Coin,
    /// When set, randomness is requested for `now + randomness_delay` seconds
    /// instead of the next available beacon
    pub randomness_delay: Option<u64>,
}

#[cw_serde]
#[derive(Copy)]
pub enum RoundState {
    Open,
    AwaitingRandomness,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::Open => write!(f, "open"),
            RoundState::AwaitingRandomness => write!(f, "awaiting_randomness"),
        }
    }
}

/// The single randomness request a round can have in flight.
#[cw_serde]
pub struct RandomnessRequest {
    pub request_id: u64,
    pub job_id: String,
    /// Entrant count frozen when upkeep was triggered
    pub entrant_count: u32,
    pub requested_at: Timestamp,
}

#[cw_serde]
pub struct RoundInfo {
    pub round_id: u64,
    pub state: RoundState,
    /// `None` between the upkeep trigger and the payout
    pub round_start: Option<Timestamp>,
    pub outstanding_request: Option<RandomnessRequest>,
    /// Request ids are never reused, the first one issued is 1
    pub last_request_id: u64,
}

impl RoundInfo {
    pub fn new(env: &Env) -> Self {
        Self {
            round_id: 0,
            state: RoundState::Open,
            round_start: Some(env.block.time),
            outstanding_request: None,
            last_request_id: 0,
        }
    }

    /// Seconds since the round opened, 0 while the start is not set.
    pub fn elapsed(&self, env: &Env) -> u64 {
        self.round_start
            .map(|start| env.block.time.seconds().saturating_sub(start.seconds()))
            .unwrap_or(0)
    }
}

#[cw_serde]
pub struct RoundResult {
    pub round_id: u64,
    pub winner: Addr,
    pub winner_index: u32,
    pub entrant_count: u32,
    pub payout: Coin,
    pub request_id: u64,
    pub finished_at: Timestamp,
}

pub fn recent_result(storage: &dyn Storage) -> StdResult<Option<RoundResult>> {
    ROUND_RESULTS
        .range(storage, None, None, Order::Descending)
        .next()
        .transpose()
        .map(|result| result.map(|(_, round_result)| round_result))
}
