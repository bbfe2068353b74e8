use cosmwasm_std::{coin, Addr, Coin};
use cw_multi_test::{App, Executor};
use raffle::msg::InstantiateMsg;
use utils::state::NATIVE_DENOM;

use super::{
    contract_boxes::{contract_fake_nois, contract_raffle, custom_mock_app},
    helpers::setup_block_time,
    msg::{RaffleCodeIds, RaffleContracts},
    nois_proxy,
    setup_accounts_and_block::fund_gateway_fees,
};

pub const OWNER_ADDR: &str = "owner";
pub const RAFFLE_NAME: &str = "raffle param name";
pub const ENTRANCE_FEE: u128 = 100;
pub const ROUND_DURATION: u64 = 30;
pub const NOIS_AMOUNT: u128 = 50;
/// Enough proxy fees for a few rounds
pub const GATEWAY_PREFUND: u128 = 1_000;

pub struct RaffleParams {
    pub entrance_fee: Coin,
    pub round_duration: u64,
    pub nois_proxy_coin: Coin,
    pub randomness_delay: Option<u64>,
    /// Minted to the raffle in the proxy fee denom
    pub gateway_prefund: u128,
}

impl Default for RaffleParams {
    fn default() -> Self {
        Self {
            entrance_fee: coin(ENTRANCE_FEE, NATIVE_DENOM),
            round_duration: ROUND_DURATION,
            nois_proxy_coin: coin(NOIS_AMOUNT, NATIVE_DENOM),
            randomness_delay: None,
            gateway_prefund: GATEWAY_PREFUND,
        }
    }
}

pub fn raffle_template_code_ids(router: &mut App) -> RaffleCodeIds {
    RaffleCodeIds {
        raffle_code_id: router.store_code(contract_raffle()),
        nois_code_id: router.store_code(contract_fake_nois()),
    }
}

pub fn proper_raffle_instantiate() -> (App, RaffleContracts) {
    raffle_instantiate_with(RaffleParams::default())
}

pub fn raffle_instantiate_with(params: RaffleParams) -> (App, RaffleContracts) {
    let mut app = custom_mock_app();
    setup_block_time(&mut app, 1647032400000000000, Some(10000));

    let code_ids = raffle_template_code_ids(&mut app);

    let nois = app
        .instantiate_contract(
            code_ids.nois_code_id,
            Addr::unchecked(OWNER_ADDR),
            &nois_proxy::InstantiateMsg {
                fee: params.nois_proxy_coin.clone(),
            },
            &[],
            "nois",
            None,
        )
        .unwrap();

    let raffle = app
        .instantiate_contract(
            code_ids.raffle_code_id,
            Addr::unchecked(OWNER_ADDR),
            &InstantiateMsg {
                name: RAFFLE_NAME.to_string(),
                entrance_fee: params.entrance_fee,
                round_duration: params.round_duration,
                nois_proxy_addr: nois.to_string(),
                nois_proxy_coin: params.nois_proxy_coin.clone(),
                randomness_delay: params.randomness_delay,
            },
            &[],
            "raffle",
            None,
        )
        .unwrap();

    if params.gateway_prefund > 0 {
        fund_gateway_fees(
            &mut app,
            &raffle,
            params.gateway_prefund,
            &params.nois_proxy_coin.denom,
        );
    }

    (app, RaffleContracts { raffle, nois })
}
