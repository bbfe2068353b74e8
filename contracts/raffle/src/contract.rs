#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Response, StdResult,
};
use cw2::set_contract_version;
use utils::state::is_valid_name;

use crate::{
    error::ContractError,
    execute::{execute_enter, execute_receive_nois, execute_trigger_upkeep},
    ledger::{Pool, POOL},
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    query::{
        query_config, query_elapsed, query_entrance_fee, query_entrant, query_entrant_count,
        query_entrants, query_pool_balance, query_recent_winner, query_round_duration,
        query_round_info, query_round_result, query_round_start, query_state,
    },
    state::{Config, RoundInfo, CONFIG, ROUND},
    upkeep::check_upkeep,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    // valid name
    if !is_valid_name(&msg.name) {
        return Err(ContractError::InvalidName {});
    }
    ensure!(
        !msg.entrance_fee.amount.is_zero() && !msg.entrance_fee.denom.is_empty(),
        ContractError::InvalidEntranceFee {}
    );
    ensure!(msg.round_duration > 0, ContractError::InvalidRoundDuration {});
    ensure!(
        msg.nois_proxy_coin.amount.is_zero() || !msg.nois_proxy_coin.denom.is_empty(),
        ContractError::InvalidProxyCoin {}
    );

    let config = Config {
        name: msg.name,
        entrance_fee: msg.entrance_fee,
        round_duration: msg.round_duration,
        nois_proxy_addr,
        nois_proxy_coin: msg.nois_proxy_coin,
        randomness_delay: msg.randomness_delay,
    };
    let round = RoundInfo::new(&env);

    CONFIG.save(deps.storage, &config)?;
    ROUND.save(deps.storage, &round)?;
    POOL.save(deps.storage, &Pool::default())?;
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", config.name)
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("round_duration", config.round_duration.to_string())
        .add_attribute("nois_proxy_addr", config.nois_proxy_addr))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute_enter(deps, env, info),
        ExecuteMsg::TriggerUpkeep { perform_data } => {
            execute_trigger_upkeep(deps, env, info, perform_data)
        }
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::State {} => to_json_binary(&query_state(deps)?)?,
        QueryMsg::EntranceFee {} => to_json_binary(&query_entrance_fee(deps)?)?,
        QueryMsg::RoundDuration {} => to_json_binary(&query_round_duration(deps)?)?,
        QueryMsg::RoundStart {} => to_json_binary(&query_round_start(deps)?)?,
        QueryMsg::Elapsed {} => to_json_binary(&query_elapsed(deps, env)?)?,
        QueryMsg::Entrant { index } => to_json_binary(&query_entrant(deps, index)?)?,
        QueryMsg::Entrants { start_after, limit } => {
            to_json_binary(&query_entrants(deps, start_after, limit)?)?
        }
        QueryMsg::EntrantCount {} => to_json_binary(&query_entrant_count(deps)?)?,
        QueryMsg::PoolBalance {} => to_json_binary(&query_pool_balance(deps)?)?,
        QueryMsg::CheckUpkeep {} => to_json_binary(&check_upkeep(deps, &env)?)?,
        QueryMsg::RoundInfo {} => to_json_binary(&query_round_info(deps, env)?)?,
        QueryMsg::RecentWinner {} => to_json_binary(&query_recent_winner(deps)?)?,
        QueryMsg::RoundResult { round_id } => {
            to_json_binary(&query_round_result(deps, round_id)?)?
        }
    };
    Ok(response)
}
