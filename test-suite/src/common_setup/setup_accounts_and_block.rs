use cosmwasm_std::{coin, coins, Addr};
use cw_multi_test::{App, BankSudo, SudoMsg};
use utils::state::NATIVE_DENOM;

pub const INITIAL_BALANCE: u128 = 100_000_000_000_000;

fn mint(router: &mut App, to: &Addr, amount: u128) {
    mint_denom(router, to, amount, NATIVE_DENOM);
}

fn mint_denom(router: &mut App, to: &Addr, amount: u128, denom: &str) {
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: to.to_string(),
                amount: vec![coin(amount, denom)],
            }
        }))
        .unwrap();
}

/// The keeper closes rounds, the owner deploys the contracts.
pub fn setup_accounts(router: &mut App) -> (Addr, Addr) {
    let owner = Addr::unchecked("owner");
    let keeper = Addr::unchecked("keeper");
    mint(router, &owner, INITIAL_BALANCE);
    mint(router, &keeper, INITIAL_BALANCE);
    (owner, keeper)
}

pub fn setup_raffle_participants(router: &mut App) -> (Addr, Addr, Addr, Addr, Addr, Addr) {
    let participants = [
        "addr-one",
        "addr-two",
        "addr-three",
        "addr-four",
        "addr-five",
        "addr-six",
    ]
    .map(Addr::unchecked);

    for participant in &participants {
        mint(router, participant, INITIAL_BALANCE);
        // check native balances
        let balances = router.wrap().query_all_balances(participant).unwrap();
        assert_eq!(balances, coins(INITIAL_BALANCE, NATIVE_DENOM));
    }

    let [one, two, three, four, five, six] = participants;
    (one, two, three, four, five, six)
}

/// Funds the raffle contract for the proxy fees, outside of any pool.
pub fn fund_gateway_fees(router: &mut App, raffle: &Addr, amount: u128, denom: &str) {
    mint_denom(router, raffle, amount, denom);
}
