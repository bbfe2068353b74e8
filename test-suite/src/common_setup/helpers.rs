use anyhow::Error;
use cosmwasm_std::{HexBinary, Timestamp};
use cw_multi_test::{App, AppResponse};

pub fn setup_block_time(router: &mut App, nanos: u64, height: Option<u64>) {
    let mut block = router.block_info();
    block.time = Timestamp::from_nanos(nanos);
    if let Some(h) = height {
        block.height = h;
    }
    router.set_block(block);
}

pub fn plus_block_seconds(router: &mut App, seconds: u64) {
    let mut block = router.block_info();
    block.time = block.time.plus_seconds(seconds);
    block.height += 1;
    router.set_block(block);
}

/// Compares the innermost error with `expected`, whatever contract raised it.
pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().root_cause().to_string(), expected);
}

/// A randomness payload made of the given 32 bytes words.
pub fn random_words(values: &[u128]) -> HexBinary {
    let hex: String = values.iter().map(|v| format!("{:064x}", v)).collect();
    HexBinary::from_hex(&hex).unwrap()
}
