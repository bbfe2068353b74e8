use anyhow::Error as anyhow_error;
use cosmwasm_std::{coins, Addr, Binary, HexBinary};
use cw_multi_test::{App, AppResponse, Executor};
use raffle::msg::ExecuteMsg as RaffleExecuteMsg;
use utils::state::NATIVE_DENOM;

use crate::common_setup::{
    msg::RaffleContracts,
    nois_proxy,
    setup_raffle::{raffle_template_code_ids, OWNER_ADDR},
};

pub fn enter_template(
    app: &mut App,
    contracts: &RaffleContracts,
    participant: &Addr,
    amount: u128,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        participant.clone(),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::Enter {},
        &coins(amount, NATIVE_DENOM),
    )
}

/// Every participant enters once, paying `amount`.
pub fn enter_all(app: &mut App, contracts: &RaffleContracts, participants: &[&Addr], amount: u128) {
    for participant in participants {
        enter_template(app, contracts, participant, amount).unwrap();
    }
}

pub fn trigger_upkeep(
    app: &mut App,
    contracts: &RaffleContracts,
    keeper: &Addr,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        keeper.clone(),
        contracts.raffle.clone(),
        &RaffleExecuteMsg::TriggerUpkeep {
            perform_data: Binary::default(),
        },
        &[],
    )
}

/// Has the mock proxy call the raffle back, the way the nois proxy does.
pub fn fulfill(
    app: &mut App,
    contracts: &RaffleContracts,
    job_id: &str,
    randomness: HexBinary,
) -> Result<AppResponse, anyhow_error> {
    app.execute_contract(
        Addr::unchecked("beacon"),
        contracts.nois.clone(),
        &nois_proxy::ExecuteMsg::Fulfill {
            requester: contracts.raffle.to_string(),
            job_id: job_id.to_string(),
            randomness,
        },
        &[],
    )
}

pub fn instantiate_raffle_contract(
    app: &mut App,
    msg: &raffle::msg::InstantiateMsg,
) -> Result<Addr, anyhow_error> {
    let code_ids = raffle_template_code_ids(app);
    app.instantiate_contract(
        code_ids.raffle_code_id,
        Addr::unchecked(OWNER_ADDR),
        msg,
        &[],
        "raffle",
        None,
    )
}
