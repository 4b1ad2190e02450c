use indexmap::IndexMap;
use primitive_types::U256;
use swc_common::{account::Account, crypto::Address, error::BalanceError};

use crate::contract::Value;

pub type ContractStorage = IndexMap<String, Value>;

/// Full chain state: accounts, the deployed-contract table and per-contract
/// storage. Cloneable so the executor can snapshot it at transaction and
/// call-frame boundaries and restore it wholesale on revert.
#[derive(Clone, Default)]
pub struct ChainState {
    accounts: IndexMap<Address, Account>,
    // address -> artifact name the contract was deployed from
    contracts: IndexMap<Address, String>,
    storage: IndexMap<Address, ContractStorage>,
}

impl ChainState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self, address: &Address) -> U256 {
        self.accounts
            .get(address)
            .map(|account| account.balance)
            .unwrap_or_default()
    }

    pub fn nonce(&self, address: &Address) -> u64 {
        self.accounts
            .get(address)
            .map(|account| account.nonce)
            .unwrap_or_default()
    }

    pub fn bump_nonce(&mut self, address: &Address) -> u64 {
        let account = self.accounts.entry(*address).or_default();
        let nonce = account.nonce;
        account.nonce += 1;
        nonce
    }

    pub fn credit(&mut self, address: &Address, amount: U256) -> Result<(), BalanceError> {
        self.accounts.entry(*address).or_default().credit(amount)
    }

    pub fn debit(&mut self, address: &Address, amount: U256) -> Result<(), BalanceError> {
        self.accounts.entry(*address).or_default().debit(amount)
    }

    /// Debit up to `amount`, clamping at the available balance. Returns the
    /// amount actually taken. Fee collection on failed transactions goes
    /// through here so it can never itself fail.
    pub fn debit_saturating(&mut self, address: &Address, amount: U256) -> U256 {
        let account = self.accounts.entry(*address).or_default();
        let taken = amount.min(account.balance);
        account.balance -= taken;
        taken
    }

    pub fn register_contract(&mut self, address: Address, artifact: &str) {
        self.contracts.insert(address, artifact.to_string());
        self.storage.entry(address).or_default();
    }

    pub fn artifact_at(&self, address: &Address) -> Option<&str> {
        self.contracts.get(address).map(String::as_str)
    }

    pub fn is_contract(&self, address: &Address) -> bool {
        self.contracts.contains_key(address)
    }

    pub fn storage_get(&self, address: &Address, key: &str) -> Option<&Value> {
        self.storage.get(address)?.get(key)
    }

    pub fn storage_put(&mut self, address: Address, key: &str, value: Value) {
        self.storage
            .entry(address)
            .or_default()
            .insert(key.to_string(), value);
    }
}
