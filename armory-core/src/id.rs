use curve25519_dalek::edwards::CompressedEdwardsY;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::Deref;

// AssetId uniquely identifies an asset held in registry custody.
// It is a 32 byte identifier derived from the deposit triple
// (depositor, class, token) and guaranteed to lie off the ed25519
// curve, so it can never alias a real public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId([u8; 32]);

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format as a hex string with a prefix of the first 6 bytes
        let prefix = hex::encode(&self.0[0..6]);
        write!(f, "asset:{}", prefix)
    }
}

impl Ord for AssetId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for AssetId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for AssetId {
    fn default() -> Self {
        AssetId([0; 32])
    }
}

impl Deref for AssetId {
    type Target = [u8; 32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AssetId {
    pub fn new(uid: [u8; 32]) -> Self {
        AssetId(uid)
    }

    /// Create an AssetId from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        AssetId(bytes)
    }

    /// Get a reference to the internal bytes
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn create_asset_id(seeds: &[&[u8]], bump: u8) -> [u8; 32] {
        let mut hasher = Sha256::new();

        // Domain separator
        hasher.update(b"ARMORY_Asset");

        // Add all seeds
        for seed in seeds {
            hasher.update(seed);
        }

        // Add bump
        hasher.update([bump]);

        hasher.finalize().into()
    }

    /// Verify that a 32-byte array is not a valid point on the ed25519 curve
    ///
    /// Returns true if the bytes do not represent a valid curve point.
    /// Returns false if the bytes do represent a valid curve point.
    pub fn is_off_curve(bytes: &[u8; 32]) -> bool {
        let Ok(compressed_edwards_y) = CompressedEdwardsY::from_slice(bytes.as_ref()) else {
            return true; // Cannot even parse as a point format, so it's off-curve
        };
        compressed_edwards_y.decompress().is_none() // If we can't decompress it, it's off-curve
    }

    /// Try to find an off-curve AssetId for the given seeds
    pub fn try_find_id(seeds: &[&[u8]]) -> Option<(AssetId, u8)> {
        for bump in 0..255 {
            let id = AssetId::create_asset_id(seeds, bump);
            if AssetId::is_off_curve(&id) {
                return Some((AssetId(id), bump));
            }
        }
        None
    }

    /// Find an off-curve AssetId for the given seeds
    pub fn find_id(seeds: &[&[u8]]) -> (AssetId, u8) {
        AssetId::try_find_id(seeds).expect("Failed to find a valid AssetId")
    }

    /// Derive the identity of a deposited asset from its deposit triple.
    ///
    /// Pure and deterministic: equal triples always derive equal ids, and
    /// the seed order (depositor, class, token) is fixed so distinct
    /// depositors of the same external asset derive distinct ids.
    pub fn derive(depositor: &Principal, class: &ClassId, token: TokenId) -> AssetId {
        let token_bytes = token.value().to_le_bytes();
        let (id, _) = AssetId::find_id(&[depositor.bytes(), class.bytes(), &token_bytes]);
        id
    }
}

/// An identity capable of initiating operations and owning assets.
/// A 32 byte public-key-like value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal([u8; 32]);

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = hex::encode(&self.0[0..6]);
        write!(f, "principal:{}", prefix)
    }
}

impl Default for Principal {
    fn default() -> Self {
        Principal([0; 32])
    }
}

impl Deref for Principal {
    type Target = [u8; 32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Principal {
    pub fn new(key: [u8; 32]) -> Self {
        Principal(key)
    }

    /// Get a reference to the internal bytes
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Identifier of the external class/contract an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId([u8; 32]);

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = hex::encode(&self.0[0..6]);
        write!(f, "class:{}", prefix)
    }
}

impl Default for ClassId {
    fn default() -> Self {
        ClassId([0; 32])
    }
}

impl ClassId {
    pub fn new(id: [u8; 32]) -> Self {
        ClassId(id)
    }

    /// Get a reference to the internal bytes
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// The asset's identifier within its external class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TokenId {
    pub fn new(value: u64) -> Self {
        TokenId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}
