pub mod common_setup;
pub mod raffle;
