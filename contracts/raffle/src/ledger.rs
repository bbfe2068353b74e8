use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Addr, BankMsg, Coin, OverflowError, OverflowOperation, Order, QuerierWrapper, StdResult,
    Storage, Uint128,
};
use cw_storage_plus::{Bound, Item, Map};

use crate::error::ContractError;

pub const POOL: Item<Pool> = Item::new("pool");
/// Entries of the current round, keyed by insertion index
pub const ENTRANTS: Map<u32, Entry> = Map::new("entrants");

#[cw_serde]
#[derive(Default)]
pub struct Pool {
    pub balance: Uint128,
    pub entrant_count: u32,
}

#[cw_serde]
pub struct Entry {
    pub participant: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct LedgerSnapshot {
    pub balance: Uint128,
    pub entrants: Vec<Addr>,
    pub count: u32,
}

/// Records a paid entry and returns its index in the entrant list.
pub fn deposit(
    storage: &mut dyn Storage,
    participant: Addr,
    paid: &Coin,
    entrance_fee: &Coin,
) -> Result<u32, ContractError> {
    if paid.denom != entrance_fee.denom || paid.amount < entrance_fee.amount {
        return Err(ContractError::InsufficientPayment {
            required: entrance_fee.clone(),
            received: vec![paid.clone()],
        });
    }

    let mut pool = POOL.load(storage)?;
    let index = pool.entrant_count;

    pool.balance = pool.balance.checked_add(paid.amount)?;
    pool.entrant_count = index
        .checked_add(1)
        .ok_or_else(|| OverflowError::new(OverflowOperation::Add, index, 1))?;

    ENTRANTS.save(
        storage,
        index,
        &Entry {
            participant,
            amount: paid.amount,
        },
    )?;
    POOL.save(storage, &pool)?;

    Ok(index)
}

pub fn entrant(storage: &dyn Storage, index: u32) -> StdResult<Entry> {
    ENTRANTS.load(storage, index)
}

pub fn entries(
    storage: &dyn Storage,
    start_after: Option<u32>,
    limit: usize,
) -> StdResult<Vec<(u32, Entry)>> {
    ENTRANTS
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .collect()
}

pub fn snapshot(storage: &dyn Storage) -> StdResult<LedgerSnapshot> {
    let pool = POOL.load(storage)?;
    let entrants = ENTRANTS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, entry)| entry.participant))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LedgerSnapshot {
        balance: pool.balance,
        entrants,
        count: pool.entrant_count,
    })
}

/// Empties the pool and the entrant list, and returns the message sending the whole pool to `recipient`.
/// Nothing is cleared when the transfer can't be covered.
pub fn payout(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    contract: &Addr,
    recipient: &Addr,
    denom: &str,
) -> Result<(Coin, BankMsg), ContractError> {
    let pool = POOL.load(storage)?;
    if pool.balance.is_zero() {
        return Err(ContractError::TransferFailed {
            reason: "the pool is empty".to_string(),
        });
    }

    let held = querier.query_balance(contract, denom)?;
    if held.amount < pool.balance {
        return Err(ContractError::TransferFailed {
            reason: format!(
                "the contract holds {}, the pool owes {}{}",
                held, pool.balance, denom
            ),
        });
    }

    for index in 0..pool.entrant_count {
        ENTRANTS.remove(storage, index);
    }
    POOL.save(storage, &Pool::default())?;

    let amount = Coin {
        denom: denom.to_string(),
        amount: pool.balance,
    };
    let transfer = BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![amount.clone()],
    };
    Ok((amount, transfer))
}
