use cosmwasm_std::{
    Binary, DepsMut, Env, MessageInfo, OverflowError, OverflowOperation, Response,
};
use cw_utils::nonpayable;
use nois::NoisCallback;
use utils::payment::assert_payment;

use crate::{
    error::ContractError,
    ledger::{self, POOL},
    randomness::{request_randomness, select_winner_index, validate_callback},
    state::{RandomnessRequest, RoundResult, RoundState, CONFIG, ROUND, ROUND_RESULTS},
    upkeep::{evaluate, gateway_balance},
};

/// Adds the sender to the current round.
/// Anything above the entrance fee stays in the pool.
pub fn execute_enter(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;

    if round.state != RoundState::Open {
        return Err(ContractError::NotOpen { state: round.state });
    }

    let paid = assert_payment(&info, &config.entrance_fee).map_err(|_| {
        ContractError::InsufficientPayment {
            required: config.entrance_fee.clone(),
            received: info.funds.clone(),
        }
    })?;

    let index = ledger::deposit(
        deps.storage,
        info.sender.clone(),
        &paid,
        &config.entrance_fee,
    )?;

    Ok(Response::new()
        .add_attribute("action", "enter")
        .add_attribute("participant", info.sender)
        .add_attribute("amount", paid.to_string())
        .add_attribute("round_id", round.round_id.to_string())
        .add_attribute("entrant_index", index.to_string())
        .add_attribute("timestamp", env.block.time.to_string()))
}

/// Closes the round and asks the proxy for randomness.
/// The upkeep condition is evaluated again here, `perform_data` is informative only.
pub fn execute_trigger_upkeep(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    _perform_data: Binary,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;
    let pool = POOL.load(deps.storage)?;

    let held = gateway_balance(&deps.querier, &env.contract.address, &config)?;
    let diagnostic = evaluate(&env, &config, &round, &pool, held);
    if !diagnostic.upkeep_needed {
        return Err(ContractError::UpkeepNotNeeded {
            balance: diagnostic.balance,
            entrant_count: diagnostic.entrant_count,
            state: diagnostic.state,
        });
    }

    let request_id = round.last_request_id.checked_add(1).ok_or_else(|| {
        OverflowError::new(OverflowOperation::Add, round.last_request_id, 1)
    })?;
    let (job_id, request_msg) = request_randomness(&config, &env, request_id)?;

    round.state = RoundState::AwaitingRandomness;
    round.round_start = None;
    round.last_request_id = request_id;
    round.outstanding_request = Some(RandomnessRequest {
        request_id,
        job_id: job_id.clone(),
        entrant_count: pool.entrant_count,
        requested_at: env.block.time,
    });
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "trigger_upkeep")
        .add_attribute("round_id", round.round_id.to_string())
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("job_id", job_id)
        .add_attribute("entrant_count", pool.entrant_count.to_string()))
}

/// Randomness callback from the nois proxy.
/// Picks the winner, sends them the whole pool and opens the next round.
pub fn execute_receive_nois(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    let (request, values) = validate_callback(deps.api, &info, &config, &round, &callback)?;

    let winner_index = select_winner_index(&values, request.entrant_count)?;
    let winner = ledger::entrant(deps.storage, winner_index)?.participant;

    let (prize, transfer) = ledger::payout(
        deps.storage,
        &deps.querier,
        &env.contract.address,
        &winner,
        &config.entrance_fee.denom,
    )?;

    let result = RoundResult {
        round_id: round.round_id,
        winner: winner.clone(),
        winner_index,
        entrant_count: request.entrant_count,
        payout: prize.clone(),
        request_id: request.request_id,
        finished_at: env.block.time,
    };
    ROUND_RESULTS.save(deps.storage, round.round_id, &result)?;

    // The next round opens right away
    round.round_id = round
        .round_id
        .checked_add(1)
        .ok_or_else(|| OverflowError::new(OverflowOperation::Add, round.round_id, 1))?;
    round.state = RoundState::Open;
    round.round_start = Some(env.block.time);
    round.outstanding_request = None;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "winner_selected")
        .add_attribute("round_id", result.round_id.to_string())
        .add_attribute("request_id", request.request_id.to_string())
        .add_attribute("winner", winner)
        .add_attribute("winner_index", winner_index.to_string())
        .add_attribute("payout", prize.to_string()))
}
