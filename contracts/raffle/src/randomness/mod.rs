use cosmwasm_std::{
    to_json_binary, Api, CosmosMsg, Env, MessageInfo, StdResult, Uint256, WasmMsg,
};
use cw_utils::nonpayable;
use nois::{NoisCallback, ProxyExecuteMsg};
use randomness::{job_id, parse_job_id, RandomValues, RandomnessError};

use crate::{
    error::ContractError,
    state::{Config, RandomnessRequest, RoundInfo, RoundState},
};

/// Builds the request sent to the nois proxy for `request_id`.
/// The proxy fee is paid by the contract itself, never from the pool.
pub fn request_randomness(
    config: &Config,
    env: &Env,
    request_id: u64,
) -> StdResult<(String, CosmosMsg)> {
    let job_id = job_id(request_id);

    // The job id is needed to know what randomness we are referring to upon reception in the callback.
    let msg = match config.randomness_delay {
        Some(delay) => ProxyExecuteMsg::GetRandomnessAfter {
            after: env.block.time.plus_seconds(delay),
            job_id: job_id.clone(),
        },
        None => ProxyExecuteMsg::GetNextRandomness {
            job_id: job_id.clone(),
        },
    };

    let funds = if config.nois_proxy_coin.amount.is_zero() {
        vec![]
    } else {
        vec![config.nois_proxy_coin.clone()]
    };

    let request = WasmMsg::Execute {
        contract_addr: config.nois_proxy_addr.to_string(),
        msg: to_json_binary(&msg)?,
        funds,
    };
    Ok((job_id, request.into()))
}

/// Runs every guard on an incoming randomness callback, in order:
/// caller identity, round state, request identity, payload.
/// Returns the outstanding request it fulfills together with the decoded values.
pub fn validate_callback(
    api: &dyn Api,
    info: &MessageInfo,
    config: &Config,
    round: &RoundInfo,
    callback: &NoisCallback,
) -> Result<(RandomnessRequest, RandomValues), ContractError> {
    if info.sender != config.nois_proxy_addr {
        api.debug(&format!(
            "rejected randomness callback for job {} from {}",
            callback.job_id, info.sender
        ));
        return Err(ContractError::UnauthorizedCaller {
            sender: info.sender.clone(),
        });
    }
    nonpayable(info)?;

    if round.state != RoundState::AwaitingRandomness {
        return Err(ContractError::NotAwaitingRandomness { state: round.state });
    }

    let request = round
        .outstanding_request
        .as_ref()
        .filter(|request| parse_job_id(&callback.job_id) == Some(request.request_id))
        .ok_or_else(|| ContractError::UnknownRequest {
            job_id: callback.job_id.clone(),
        })?;

    let values = RandomValues::decode(&callback.randomness).map_err(|err| match err {
        RandomnessError::Empty => ContractError::EmptyRandomness,
        RandomnessError::Misaligned { .. } => ContractError::InvalidRandomness,
    })?;

    Ok((request.clone(), values))
}

/// `random_values[0] mod entrant_count`
pub fn select_winner_index(values: &RandomValues, entrant_count: u32) -> Result<u32, ContractError> {
    let value = values.first().ok_or(ContractError::EmptyRandomness)?;
    let index = value.checked_rem(Uint256::from(entrant_count))?;

    // index < entrant_count, so it lives in the 4 low bytes
    let bytes = index.to_be_bytes();
    let mut low = [0u8; 4];
    low.copy_from_slice(&bytes[28..]);
    Ok(u32::from_be_bytes(low))
}
