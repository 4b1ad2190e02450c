use rand::Rng;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};
use std::{
    convert::TryInto,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

pub const ADDRESS_SIZE: usize = 20; // 20 bytes / 160 bits

#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address::new([0; ADDRESS_SIZE])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Generate a fresh account address. Test accounts have no keys, an
    /// address is all the identity they need.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; ADDRESS_SIZE];
        rng.fill(&mut bytes[..]);
        Address(bytes)
    }
}

/// Derive the address a contract lands at, from its deployer and the
/// deployer's nonce at deployment time. Keccak-based like the chains this
/// suite mimics, so addresses look plausible in logs.
pub fn contract_address(deployer: &Address, nonce: u64) -> Address {
    let mut hasher = Keccak256::new();
    hasher.update(deployer.as_bytes());
    hasher.update(nonce.to_be_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; ADDRESS_SIZE];
    bytes.copy_from_slice(&digest[12..32]);
    Address::new(bytes)
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; ADDRESS_SIZE] = bytes.try_into().map_err(|_| "Invalid address")?;
        Ok(Address::new(bytes))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(SerdeError::custom)
    }
}
