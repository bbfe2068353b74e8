use cosmwasm_std::Addr;

pub struct RaffleCodeIds {
    pub raffle_code_id: u64,
    pub nois_code_id: u64,
}

pub struct RaffleContracts {
    pub raffle: Addr,
    pub nois: Addr,
}
