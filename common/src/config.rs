// Smallest currency unit is the wei; one ether is 10^18 wei.
pub const COIN_DECIMALS: u32 = 18;
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

// Chain-wide gas price used unless a test overrides it (20 gwei).
pub const DEFAULT_GAS_PRICE: u64 = 20_000_000_000;

// ===== GAS SCHEDULE =====

// Flat cost charged to every transaction before any contract code runs
pub const TX_BASE_GAS: u64 = 21_000;
// Entering a contract method or receive hook
pub const GAS_PER_DISPATCH: u64 = 700;
// Reading one storage slot
pub const GAS_PER_STORAGE_READ: u64 = 200;
// Writing one storage slot
pub const GAS_PER_STORAGE_WRITE: u64 = 5_000;
// Moving value out of a contract
pub const GAS_PER_VALUE_TRANSFER: u64 = 9_000;
// Instantiating a contract from an artifact
pub const GAS_PER_DEPLOY: u64 = 32_000;

// Nested calls deeper than this abort the transaction. Keeps a buggy
// re-entrant contract from recursing forever.
pub const MAX_CALL_DEPTH: usize = 64;
