pub mod contract_boxes;
pub mod helpers;
pub mod msg;
pub mod nois_proxy;
pub mod setup_accounts_and_block;
pub mod setup_raffle;
