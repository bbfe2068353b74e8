use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, Timestamp, Uint128};
use nois::NoisCallback;

use crate::{
    ledger::LedgerSnapshot,
    state::{Config, RandomnessRequest, RoundResult, RoundState},
};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub entrance_fee: Coin,
    /// Seconds a round stays open before it can be closed
    pub round_duration: u64,
    pub nois_proxy_addr: String,
    /// Sent along with every randomness request. Use a zero amount for a free proxy
    pub nois_proxy_coin: Coin,
    pub randomness_delay: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the current round, paying at least the entrance fee
    Enter {},
    /// Close the current round and request randomness. Anyone can call it.
    /// `perform_data` is what `CheckUpkeep` returned, it is not trusted
    TriggerUpkeep { perform_data: Binary },
    /// Randomness callback, only accepted from the nois proxy
    NoisReceive { callback: NoisCallback },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(RoundState)]
    State {},
    #[returns(Coin)]
    EntranceFee {},
    #[returns(u64)]
    RoundDuration {},
    #[returns(Option<Timestamp>)]
    RoundStart {},
    #[returns(u64)]
    Elapsed {},
    #[returns(Addr)]
    Entrant { index: u32 },
    #[returns(EntrantsResponse)]
    Entrants {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(u32)]
    EntrantCount {},
    #[returns(Coin)]
    PoolBalance {},
    #[returns(UpkeepCheckResponse)]
    CheckUpkeep {},
    #[returns(RoundResponse)]
    RoundInfo {},
    #[returns(Option<RoundResult>)]
    RecentWinner {},
    #[returns(RoundResult)]
    RoundResult { round_id: u64 },
}

#[cw_serde]
pub struct UpkeepCheckResponse {
    pub upkeep_needed: bool,
    /// JSON encoded `UpkeepDiagnostic`
    pub perform_data: Binary,
}

#[cw_serde]
pub struct EntrantResponse {
    pub index: u32,
    pub participant: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct EntrantsResponse {
    pub entrants: Vec<EntrantResponse>,
}

#[cw_serde]
pub struct RoundResponse {
    pub round_id: u64,
    pub state: RoundState,
    pub round_start: Option<Timestamp>,
    pub elapsed: u64,
    pub outstanding_request: Option<RandomnessRequest>,
    pub ledger: LedgerSnapshot,
}
