use cosmwasm_std::{Addr, Coin, Uint128};
use cw_multi_test::App;
use raffle::{
    msg::{QueryMsg, RoundResponse, UpkeepCheckResponse},
    state::{RoundResult, RoundState},
    upkeep::UpkeepDiagnostic,
};
use utils::state::NATIVE_DENOM;

use crate::common_setup::{msg::RaffleContracts, nois_proxy};

pub fn round_info(app: &App, contracts: &RaffleContracts) -> RoundResponse {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RoundInfo {})
        .unwrap()
}

pub fn raffle_state(app: &App, contracts: &RaffleContracts) -> RoundState {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::State {})
        .unwrap()
}

pub fn pool_balance(app: &App, contracts: &RaffleContracts) -> Uint128 {
    let pool: Coin = app
        .wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::PoolBalance {})
        .unwrap();
    pool.amount
}

pub fn entrant_count(app: &App, contracts: &RaffleContracts) -> u32 {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::EntrantCount {})
        .unwrap()
}

pub fn check_upkeep(app: &App, contracts: &RaffleContracts) -> (bool, UpkeepDiagnostic) {
    let res: UpkeepCheckResponse = app
        .wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::CheckUpkeep {})
        .unwrap();
    let diagnostic = cosmwasm_std::from_json(&res.perform_data).unwrap();
    (res.upkeep_needed, diagnostic)
}

pub fn recent_winner(app: &App, contracts: &RaffleContracts) -> Option<RoundResult> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RecentWinner {})
        .unwrap()
}

/// The job id of the request the raffle is waiting on.
pub fn outstanding_job(app: &App, contracts: &RaffleContracts) -> String {
    round_info(app, contracts)
        .outstanding_request
        .expect("no outstanding request")
        .job_id
}

pub fn pending_jobs(app: &App, contracts: &RaffleContracts) -> Vec<String> {
    app.wrap()
        .query_wasm_smart(
            contracts.nois.clone(),
            &nois_proxy::QueryMsg::PendingJobs {
                requester: contracts.raffle.to_string(),
            },
        )
        .unwrap()
}

pub fn native_balance(app: &App, addr: &Addr) -> Uint128 {
    app.wrap().query_balance(addr, NATIVE_DENOM).unwrap().amount
}
