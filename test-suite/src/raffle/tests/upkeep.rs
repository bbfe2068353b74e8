#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, coins, to_json_binary, Uint128};
    use cw_multi_test::Executor;
    use cw_utils::PaymentError;
    use raffle::{error::ContractError, msg::ExecuteMsg, state::RoundState};
    use utils::state::NATIVE_DENOM;

    use crate::{
        common_setup::{
            helpers::{assert_error, plus_block_seconds, random_words},
            setup_accounts_and_block::{
                fund_gateway_fees, setup_accounts, setup_raffle_participants,
            },
            setup_raffle::{
                proper_raffle_instantiate, raffle_instantiate_with, RaffleParams, ENTRANCE_FEE,
                GATEWAY_PREFUND, NOIS_AMOUNT, ROUND_DURATION,
            },
        },
        raffle::setup::{
            execute_msg::{enter_template, fulfill, trigger_upkeep},
            helpers::{
                check_upkeep, native_balance, outstanding_job, pending_jobs, raffle_state,
                round_info,
            },
        },
    };

    #[test]
    fn check_matches_trigger() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (_, keeper) = setup_accounts(&mut app);
        let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);

        // duration elapsed, nobody entered
        plus_block_seconds(&mut app, ROUND_DURATION);
        let (needed, diagnostic) = check_upkeep(&app, &contracts);
        assert!(!needed);
        assert_eq!(diagnostic.entrant_count, 0);
        assert_error(
            trigger_upkeep(&mut app, &contracts, &keeper),
            ContractError::UpkeepNotNeeded {
                balance: Uint128::zero(),
                entrant_count: 0,
                state: RoundState::Open,
            }
            .to_string(),
        );

        // an entrant alone is enough once the duration has elapsed
        enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
        let (needed, diagnostic) = check_upkeep(&app, &contracts);
        assert!(needed);
        assert_eq!(diagnostic.elapsed, ROUND_DURATION);
        assert_eq!(diagnostic.balance, Uint128::new(ENTRANCE_FEE));
        trigger_upkeep(&mut app, &contracts, &keeper).unwrap();

        // awaiting randomness
        let (needed, diagnostic) = check_upkeep(&app, &contracts);
        assert!(!needed);
        assert_eq!(diagnostic.state, RoundState::AwaitingRandomness);
        assert_eq!(diagnostic.elapsed, 0);
        assert_error(
            trigger_upkeep(&mut app, &contracts, &keeper),
            ContractError::UpkeepNotNeeded {
                balance: Uint128::new(ENTRANCE_FEE),
                entrant_count: 1,
                state: RoundState::AwaitingRandomness,
            }
            .to_string(),
        );

        // next round, the duration starts over
        fulfill(&mut app, &contracts, "raffle-round-1", random_words(&[3])).unwrap();
        enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
        plus_block_seconds(&mut app, ROUND_DURATION - 1);
        let (needed, _) = check_upkeep(&app, &contracts);
        assert!(!needed);
        assert!(trigger_upkeep(&mut app, &contracts, &keeper).is_err());

        plus_block_seconds(&mut app, 1);
        let (needed, _) = check_upkeep(&app, &contracts);
        assert!(needed);
        assert!(trigger_upkeep(&mut app, &contracts, &keeper).is_ok());
    }

    #[test]
    fn trigger_issues_a_single_request() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (_, keeper) = setup_accounts(&mut app);
        let (one, two, _, _, _, _) = setup_raffle_participants(&mut app);
        enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
        enter_template(&mut app, &contracts, &two, ENTRANCE_FEE).unwrap();
        plus_block_seconds(&mut app, ROUND_DURATION);

        let res = trigger_upkeep(&mut app, &contracts, &keeper).unwrap();
        let wasm = res
            .events
            .iter()
            .find(|ev| {
                ev.ty == "wasm"
                    && ev
                        .attributes
                        .iter()
                        .any(|attr| attr.key == "action" && attr.value == "trigger_upkeep")
            })
            .unwrap();
        assert!(wasm
            .attributes
            .iter()
            .any(|attr| attr.key == "job_id" && attr.value == "raffle-round-1"));

        assert_eq!(raffle_state(&app, &contracts), RoundState::AwaitingRandomness);
        let info = round_info(&app, &contracts);
        let request = info.outstanding_request.unwrap();
        assert_eq!(request.request_id, 1);
        assert_eq!(request.entrant_count, 2);
        assert_eq!(info.round_start, None);
        assert_eq!(pending_jobs(&app, &contracts), vec!["raffle-round-1"]);

        // the proxy fee is paid outside of the pool
        assert_eq!(
            native_balance(&app, &contracts.nois),
            Uint128::new(NOIS_AMOUNT)
        );
        assert_eq!(
            native_balance(&app, &contracts.raffle),
            Uint128::new(GATEWAY_PREFUND - NOIS_AMOUNT + 2 * ENTRANCE_FEE)
        );

        // nothing more is requested by a second trigger
        assert!(trigger_upkeep(&mut app, &contracts, &keeper).is_err());
        assert_eq!(pending_jobs(&app, &contracts), vec!["raffle-round-1"]);
        assert_eq!(outstanding_job(&app, &contracts), "raffle-round-1");
    }

    #[test]
    fn perform_data_is_not_trusted() {
        let (mut app, contracts) = proper_raffle_instantiate();
        let (_, keeper) = setup_accounts(&mut app);
        let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);
        enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();

        // claims the upkeep is needed before the duration elapsed
        let res = app.execute_contract(
            keeper.clone(),
            contracts.raffle.clone(),
            &ExecuteMsg::TriggerUpkeep {
                perform_data: to_json_binary(&true).unwrap(),
            },
            &[],
        );
        assert!(res.is_err());

        plus_block_seconds(&mut app, ROUND_DURATION);
        app.execute_contract(
            keeper,
            contracts.raffle.clone(),
            &ExecuteMsg::TriggerUpkeep {
                perform_data: to_json_binary("garbage").unwrap(),
            },
            &[],
        )
        .unwrap();
        assert_eq!(raffle_state(&app, &contracts), RoundState::AwaitingRandomness);
    }

    #[test]
    fn delayed_randomness() {
        let (mut app, contracts) = raffle_instantiate_with(RaffleParams {
            randomness_delay: Some(60),
            ..RaffleParams::default()
        });
        let (_, keeper) = setup_accounts(&mut app);
        let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);
        enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
        plus_block_seconds(&mut app, ROUND_DURATION);
        trigger_upkeep(&mut app, &contracts, &keeper).unwrap();

        // the proxy holds the job until the requested time
        assert!(fulfill(&mut app, &contracts, "raffle-round-1", random_words(&[1])).is_err());
        assert_eq!(raffle_state(&app, &contracts), RoundState::AwaitingRandomness);

        plus_block_seconds(&mut app, 60);
        fulfill(&mut app, &contracts, "raffle-round-1", random_words(&[1])).unwrap();
        assert_eq!(raffle_state(&app, &contracts), RoundState::Open);
    }

    #[test]
    fn check_matches_trigger_with_foreign_fee_denom() {
        let (mut app, contracts) = raffle_instantiate_with(RaffleParams {
            nois_proxy_coin: coin(NOIS_AMOUNT, "unois"),
            gateway_prefund: 0,
            ..RaffleParams::default()
        });
        let (_, keeper) = setup_accounts(&mut app);
        let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);
        enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
        plus_block_seconds(&mut app, ROUND_DURATION);

        let (needed, diagnostic) = check_upkeep(&app, &contracts);
        assert!(!needed);
        assert!(!diagnostic.gateway_funded);
        assert!(trigger_upkeep(&mut app, &contracts, &keeper).is_err());

        // one unit short of the fee
        fund_gateway_fees(&mut app, &contracts.raffle, NOIS_AMOUNT - 1, "unois");
        let (needed, _) = check_upkeep(&app, &contracts);
        assert!(!needed);
        assert!(trigger_upkeep(&mut app, &contracts, &keeper).is_err());

        fund_gateway_fees(&mut app, &contracts.raffle, 1, "unois");
        let (needed, diagnostic) = check_upkeep(&app, &contracts);
        assert!(needed);
        assert!(diagnostic.gateway_funded);
        trigger_upkeep(&mut app, &contracts, &keeper).unwrap();
        assert_eq!(raffle_state(&app, &contracts), RoundState::AwaitingRandomness);
        assert_eq!(
            pending_jobs(&app, &contracts),
            vec!["raffle-round-1".to_string()]
        );
        assert_eq!(
            app.wrap()
                .query_balance(&contracts.nois, "unois")
                .unwrap()
                .amount,
            Uint128::new(NOIS_AMOUNT)
        );
    }

    #[test]
    fn check_matches_trigger_when_fee_shares_the_pool_denom() {
        let (mut app, contracts) = raffle_instantiate_with(RaffleParams {
            gateway_prefund: 0,
            ..RaffleParams::default()
        });
        let (_, keeper) = setup_accounts(&mut app);
        let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);
        enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
        plus_block_seconds(&mut app, ROUND_DURATION);

        // the contract only holds the pool, paying the fee would eat into it
        assert_eq!(
            native_balance(&app, &contracts.raffle),
            Uint128::new(ENTRANCE_FEE)
        );
        let (needed, diagnostic) = check_upkeep(&app, &contracts);
        assert!(!needed);
        assert!(!diagnostic.gateway_funded);
        assert!(trigger_upkeep(&mut app, &contracts, &keeper).is_err());

        fund_gateway_fees(&mut app, &contracts.raffle, NOIS_AMOUNT, NATIVE_DENOM);
        let (needed, _) = check_upkeep(&app, &contracts);
        assert!(needed);
        trigger_upkeep(&mut app, &contracts, &keeper).unwrap();

        // the pool is intact for the payout
        assert_eq!(
            native_balance(&app, &contracts.raffle),
            Uint128::new(ENTRANCE_FEE)
        );
        fulfill(&mut app, &contracts, "raffle-round-1", random_words(&[5])).unwrap();
        assert_eq!(raffle_state(&app, &contracts), RoundState::Open);
        assert_eq!(native_balance(&app, &contracts.raffle), Uint128::zero());
    }

    mod bad {
        use super::*;

        #[test]
        fn trigger_with_funds() {
            let (mut app, contracts) = proper_raffle_instantiate();
            let (_, keeper) = setup_accounts(&mut app);
            let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);
            enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
            plus_block_seconds(&mut app, ROUND_DURATION);

            let res = app.execute_contract(
                keeper,
                contracts.raffle.clone(),
                &ExecuteMsg::TriggerUpkeep {
                    perform_data: Default::default(),
                },
                &coins(10, NATIVE_DENOM),
            );
            assert_error(
                res,
                ContractError::Payment(PaymentError::NonPayable {}).to_string(),
            );
            assert_eq!(raffle_state(&app, &contracts), RoundState::Open);
        }

        #[test]
        fn gateway_fee_not_covered() {
            let (mut app, contracts) = raffle_instantiate_with(RaffleParams {
                nois_proxy_coin: coin(NOIS_AMOUNT, "unois"),
                gateway_prefund: 0,
                ..RaffleParams::default()
            });
            let (_, keeper) = setup_accounts(&mut app);
            let (one, _, _, _, _, _) = setup_raffle_participants(&mut app);
            enter_template(&mut app, &contracts, &one, ENTRANCE_FEE).unwrap();
            plus_block_seconds(&mut app, ROUND_DURATION);

            let (needed, diagnostic) = check_upkeep(&app, &contracts);
            assert!(!needed);
            assert!(!diagnostic.gateway_funded);
            assert_error(
                trigger_upkeep(&mut app, &contracts, &keeper),
                ContractError::UpkeepNotNeeded {
                    balance: Uint128::new(ENTRANCE_FEE),
                    entrant_count: 1,
                    state: RoundState::Open,
                }
                .to_string(),
            );
            assert_eq!(raffle_state(&app, &contracts), RoundState::Open);
            assert!(pending_jobs(&app, &contracts).is_empty());
        }
    }
}
