use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint256};
use thiserror::Error;

/// Every job id this contract hands to the randomness proxy starts with this prefix.
pub const JOB_ID_PREFIX: &str = "raffle-round-";

/// Size in bytes of a single random value inside a callback payload.
pub const RANDOM_WORD_SIZE: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum RandomnessError {
    #[error("The randomness payload is empty")]
    Empty,

    #[error("The randomness payload is {len} bytes, expected a multiple of 32")]
    Misaligned { len: usize },
}

/// The job id sent along with a randomness request.
/// The proxy echoes it back verbatim in its callback.
pub fn job_id(request_id: u64) -> String {
    format!("{JOB_ID_PREFIX}{request_id}")
}

/// Recovers the request id from a job id.
/// Returns `None` for anything that was not produced by [`job_id`].
pub fn parse_job_id(job_id: &str) -> Option<u64> {
    let id = job_id.strip_prefix(JOB_ID_PREFIX)?;
    // `u64::from_str` accepts a leading `+`, which `job_id` never produces
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// Randomness delivered by the gateway, viewed as a sequence of large unsigned integers.
#[cw_serde]
pub struct RandomValues(pub Vec<Uint256>);

impl RandomValues {
    /// Splits the raw payload in 32 bytes big-endian words.
    pub fn decode(randomness: &HexBinary) -> Result<Self, RandomnessError> {
        let bytes = randomness.as_slice();
        if bytes.is_empty() {
            return Err(RandomnessError::Empty);
        }
        if bytes.len() % RANDOM_WORD_SIZE != 0 {
            return Err(RandomnessError::Misaligned { len: bytes.len() });
        }
        let words = bytes
            .chunks_exact(RANDOM_WORD_SIZE)
            .map(|chunk| {
                let mut word = [0u8; RANDOM_WORD_SIZE];
                word.copy_from_slice(chunk);
                Uint256::from_be_bytes(word)
            })
            .collect();
        Ok(Self(words))
    }

    pub fn first(&self) -> Option<Uint256> {
        self.0.first().copied()
    }
}
