use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, HexBinary, MessageInfo,
    Order, Response, StdError, StdResult, Timestamp, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use nois::NoisCallback;

/// Fee every randomness request must carry
const FEE: Item<Coin> = Item::new("fee");
/// Pending jobs, with the earliest time they can be delivered
const JOBS: Map<(Addr, String), Timestamp> = Map::new("jobs");

#[cw_serde]
pub struct InstantiateMsg {
    pub fee: Coin,
}

/// Same wire format as `nois::ProxyExecuteMsg`, plus a test hook that plays the beacon.
#[cw_serde]
pub enum ExecuteMsg {
    GetNextRandomness {
        job_id: String,
    },
    GetRandomnessAfter {
        after: Timestamp,
        job_id: String,
    },
    /// Calls `requester` back with `randomness` for `job_id`.
    /// The job doesn't have to be pending, so tests can deliver forged or stale callbacks.
    Fulfill {
        requester: String,
        job_id: String,
        randomness: HexBinary,
    },
}

#[cw_serde]
pub enum QueryMsg {
    PendingJobs { requester: String },
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    FEE.save(deps.storage, &msg.fee)?;
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::PendingJobs { requester } => {
            let requester = deps.api.addr_validate(&requester)?;
            let jobs = JOBS
                .prefix(requester)
                .keys(deps.storage, None, None, Order::Ascending)
                .collect::<StdResult<Vec<String>>>()?;
            to_json_binary(&jobs)
        }
    }
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => {
            register_job(deps, &info, job_id, env.block.time)
        }
        ExecuteMsg::GetRandomnessAfter { after, job_id } => register_job(deps, &info, job_id, after),
        ExecuteMsg::Fulfill {
            requester,
            job_id,
            randomness,
        } => fulfill(deps, env, requester, job_id, randomness),
    }
}

fn register_job(
    deps: DepsMut,
    info: &MessageInfo,
    job_id: String,
    after: Timestamp,
) -> StdResult<Response> {
    let fee = FEE.load(deps.storage)?;
    let expected = if fee.amount.is_zero() {
        vec![]
    } else {
        vec![fee]
    };
    if info.funds != expected {
        return Err(StdError::generic_err("Nois not enough funds sent to proxy"));
    }

    JOBS.save(deps.storage, (info.sender.clone(), job_id.clone()), &after)?;
    Ok(Response::new()
        .add_attribute("action", "register_job")
        .add_attribute("job_id", job_id))
}

fn fulfill(
    deps: DepsMut,
    env: Env,
    requester: String,
    job_id: String,
    randomness: HexBinary,
) -> StdResult<Response> {
    let requester = deps.api.addr_validate(&requester)?;
    let key = (requester.clone(), job_id.clone());

    if let Some(after) = JOBS.may_load(deps.storage, key.clone())? {
        // Make sure we are after the requested time
        if env.block.time < after {
            return Err(StdError::generic_err(
                "Too soon to test-trigger randomness providing",
            ));
        }
        JOBS.remove(deps.storage, key);
    }

    Ok(Response::new().add_message(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: requester.to_string(),
        msg: to_json_binary(&raffle::msg::ExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id,
                published: env.block.time,
                randomness,
            },
        })?,
        funds: vec![],
    })))
}
