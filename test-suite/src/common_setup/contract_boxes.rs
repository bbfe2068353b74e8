use cosmwasm_std::Empty;
use cw_multi_test::{App, Contract, ContractWrapper};

pub fn custom_mock_app() -> App {
    App::default()
}

pub fn contract_raffle() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        raffle::contract::execute,
        raffle::contract::instantiate,
        raffle::contract::query,
    );
    Box::new(contract)
}

pub fn contract_fake_nois() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        super::nois_proxy::execute,
        super::nois_proxy::instantiate,
        super::nois_proxy::query,
    );
    Box::new(contract)
}
