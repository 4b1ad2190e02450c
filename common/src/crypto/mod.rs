mod address;

pub use address::{contract_address, Address, ADDRESS_SIZE};
