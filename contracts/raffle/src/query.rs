use cosmwasm_std::{Addr, Coin, Deps, Env, StdResult, Timestamp};
use utils::state::page_limit;

use crate::{
    ledger::{self, POOL},
    msg::{EntrantResponse, EntrantsResponse, RoundResponse},
    state::{recent_result, Config, RoundResult, RoundState, CONFIG, ROUND, ROUND_RESULTS},
};

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_state(deps: Deps) -> StdResult<RoundState> {
    Ok(ROUND.load(deps.storage)?.state)
}

pub fn query_entrance_fee(deps: Deps) -> StdResult<Coin> {
    Ok(CONFIG.load(deps.storage)?.entrance_fee)
}

pub fn query_round_duration(deps: Deps) -> StdResult<u64> {
    Ok(CONFIG.load(deps.storage)?.round_duration)
}

pub fn query_round_start(deps: Deps) -> StdResult<Option<Timestamp>> {
    Ok(ROUND.load(deps.storage)?.round_start)
}

pub fn query_elapsed(deps: Deps, env: Env) -> StdResult<u64> {
    Ok(ROUND.load(deps.storage)?.elapsed(&env))
}

/// Fails when `index` is past the end of the current entrant list.
pub fn query_entrant(deps: Deps, index: u32) -> StdResult<Addr> {
    Ok(ledger::entrant(deps.storage, index)?.participant)
}

pub fn query_entrants(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<EntrantsResponse> {
    let entrants = ledger::entries(deps.storage, start_after, page_limit(limit))?
        .into_iter()
        .map(|(index, entry)| EntrantResponse {
            index,
            participant: entry.participant,
            amount: entry.amount,
        })
        .collect();
    Ok(EntrantsResponse { entrants })
}

pub fn query_entrant_count(deps: Deps) -> StdResult<u32> {
    Ok(POOL.load(deps.storage)?.entrant_count)
}

pub fn query_pool_balance(deps: Deps) -> StdResult<Coin> {
    let config = CONFIG.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;
    Ok(Coin {
        denom: config.entrance_fee.denom,
        amount: pool.balance,
    })
}

pub fn query_round_info(deps: Deps, env: Env) -> StdResult<RoundResponse> {
    let round = ROUND.load(deps.storage)?;
    Ok(RoundResponse {
        round_id: round.round_id,
        state: round.state,
        round_start: round.round_start,
        elapsed: round.elapsed(&env),
        outstanding_request: round.outstanding_request,
        ledger: ledger::snapshot(deps.storage)?,
    })
}

pub fn query_recent_winner(deps: Deps) -> StdResult<Option<RoundResult>> {
    recent_result(deps.storage)
}

pub fn query_round_result(deps: Deps, round_id: u64) -> StdResult<RoundResult> {
    ROUND_RESULTS.load(deps.storage, round_id)
}
