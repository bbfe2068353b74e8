use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Deps, Env, QuerierWrapper, StdResult, Uint128};

use crate::{
    ledger::{Pool, POOL},
    msg::UpkeepCheckResponse,
    state::{Config, RoundInfo, RoundState, CONFIG, ROUND},
};

/// Everything the upkeep predicate looks at, returned to callers as `perform_data`.
#[cw_serde]
pub struct UpkeepDiagnostic {
    pub upkeep_needed: bool,
    pub state: RoundState,
    pub balance: Uint128,
    pub entrant_count: u32,
    pub elapsed: u64,
    pub round_duration: u64,
    /// The contract can pay the proxy fee without touching the pool
    pub gateway_funded: bool,
}

/// The upkeep predicate. `TriggerUpkeep` succeeds exactly when this says so.
/// `gateway_balance` is what the contract holds in the proxy fee denom.
pub fn evaluate(
    env: &Env,
    config: &Config,
    round: &RoundInfo,
    pool: &Pool,
    gateway_balance: Uint128,
) -> UpkeepDiagnostic {
    let is_open = round.state == RoundState::Open;
    let elapsed = round.elapsed(env);
    let time_passed = round.round_start.is_some() && elapsed >= config.round_duration;
    let has_entrants = pool.entrant_count > 0;
    let has_balance = !pool.balance.is_zero();
    let gateway_funded = gateway_funded(config, pool, gateway_balance);

    UpkeepDiagnostic {
        upkeep_needed: is_open && time_passed && has_entrants && has_balance && gateway_funded,
        state: round.state,
        balance: pool.balance,
        entrant_count: pool.entrant_count,
        elapsed,
        round_duration: config.round_duration,
        gateway_funded,
    }
}

/// The proxy fee leaves the contract's balance with the request.
/// When it shares the pool denom, the pool must stay covered after paying it.
fn gateway_funded(config: &Config, pool: &Pool, gateway_balance: Uint128) -> bool {
    let fee = &config.nois_proxy_coin;
    if fee.amount.is_zero() {
        return true;
    }
    let reserved = if fee.denom == config.entrance_fee.denom {
        pool.balance
    } else {
        Uint128::zero()
    };
    match fee.amount.checked_add(reserved) {
        Ok(required) => gateway_balance >= required,
        Err(_) => false,
    }
}

/// Contract balance in the proxy fee denom, not queried for a free proxy.
pub fn gateway_balance(
    querier: &QuerierWrapper,
    contract: &Addr,
    config: &Config,
) -> StdResult<Uint128> {
    if config.nois_proxy_coin.amount.is_zero() {
        return Ok(Uint128::zero());
    }
    Ok(querier
        .query_balance(contract, &config.nois_proxy_coin.denom)?
        .amount)
}

pub fn check_upkeep(deps: Deps, env: &Env) -> StdResult<UpkeepCheckResponse> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;
    let held = gateway_balance(&deps.querier, &env.contract.address, &config)?;

    let diagnostic = evaluate(env, &config, &round, &pool, held);
    Ok(UpkeepCheckResponse {
        upkeep_needed: diagnostic.upkeep_needed,
        perform_data: to_json_binary(&diagnostic)?,
    })
}
