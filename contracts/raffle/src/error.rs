use thiserror::Error;

use cosmwasm_std::{Addr, Coin, DivideByZeroError, OverflowError, StdError, Uint128};
use cw_utils::PaymentError;

use crate::state::RoundState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("The raffle name must be between 3 and 50 bytes")]
    InvalidName {},

    #[error("The entrance fee must be a positive amount of a named denom")]
    InvalidEntranceFee {},

    #[error("The round duration must be a positive number of seconds")]
    InvalidRoundDuration {},

    #[error("A non-zero proxy fee needs a denom")]
    InvalidProxyCoin {},

    #[error("The payment sent ({received:?}) doesn't cover the entrance fee ({required})")]
    InsufficientPayment {
        required: Coin,
        received: Vec<Coin>,
    },

    #[error("The raffle is not accepting entries. Current state : {state:?}")]
    NotOpen { state: RoundState },

    #[error("Upkeep not needed. Pool balance : {balance}, entrants : {entrant_count}, state : {state:?}")]
    UpkeepNotNeeded {
        balance: Uint128,
        entrant_count: u32,
        state: RoundState,
    },

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and pick the winner
    #[error("Unauthorized randomness fulfillment from {sender}")]
    UnauthorizedCaller { sender: Addr },

    #[error("This raffle is not waiting for randomness. Current state : {state:?}")]
    NotAwaitingRandomness { state: RoundState },

    #[error("The randomness job {job_id} doesn't match the outstanding request")]
    UnknownRequest { job_id: String },

    #[error("Received an empty randomness payload")]
    EmptyRandomness,

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("The pool could not be transferred to the winner: {reason}")]
    TransferFailed { reason: String },
}
