use cosmwasm_std::{Coin, MessageInfo, StdError, StdResult};
use cw_utils::must_pay;

/// Checks the message carries a single coin of the `minimum` denom, worth at least `minimum`.
/// Returns the coin that was actually sent, overpayment included.
pub fn assert_payment(msg_info: &MessageInfo, minimum: &Coin) -> StdResult<Coin> {
    let sent = must_pay(msg_info, &minimum.denom).map_err(|err| {
        StdError::generic_err(format!(
            "Invalid payment sent. Expected {}, sent {:?}: {}",
            minimum, msg_info.funds, err
        ))
    })?;

    if sent < minimum.amount {
        return Err(StdError::generic_err(format!(
            "Invalid payment sent. Expected at least {}, sent {:?}",
            minimum, msg_info.funds
        )));
    }

    Ok(Coin {
        denom: minimum.denom.clone(),
        amount: sent,
    })
}
