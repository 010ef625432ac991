//! In-memory sealed-data vault backing the encrypt/decrypt endpoints.
//!
//! The mock does not run a cipher. Sealing stores the plaintext under a
//! fresh random token together with the context it was sealed in; the token
//! is the "ciphertext" handed to the caller. Opening requires the exact same
//! context, which gives callers the same observable contract as the real
//! service: round-trips succeed, context mismatches fail, and two seals of
//! the same data yield different ciphertexts.
//!
//! All data is held in RAM behind a [`RwLock`] and is lost when the process
//! exits. Entries are never evicted: a sealed value stays openable for the
//! life of the process. To keep a long-running mock from growing without
//! bound, the vault holds at most [`DEFAULT_MAX_ENTRIES`] values (or the
//! limit given to [`Vault::with_max_entries`]) and refuses to seal more.

use std::collections::HashMap;
use std::sync::RwLock;

use rand::{rngs::OsRng, RngCore};

/// Length of a ciphertext token before hex encoding.
const TOKEN_BYTES: usize = 32;

/// Entry limit of [`Vault::new`].
pub const DEFAULT_MAX_ENTRIES: usize = 100_000;

/// The `(protocol, keyId, counterparty)` triple a value is sealed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealContext {
    pub protocol: String,
    pub key_id: String,
    pub counterparty: String,
}

/// Why a value could not be sealed or a token could not be opened.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VaultError {
    #[error("ciphertext is not valid hex of the expected length")]
    Malformed,

    #[error("ciphertext was not produced by this service")]
    Unknown,

    #[error("ciphertext does not match the supplied protocol, keyId or counterparty")]
    ContextMismatch,

    #[error("vault is full ({0} sealed values); restart the service to clear it")]
    Full(usize),

    #[error("vault lock poisoned")]
    Poisoned,
}

struct Sealed {
    context: SealContext,
    plaintext: String,
}

/// Thread-safe token → sealed value map.
pub struct Vault {
    entries: RwLock<HashMap<String, Sealed>>,
    max_entries: usize,
}

impl Vault {
    pub fn new() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }

    /// A vault that refuses to seal once it holds `max_entries` values.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries,
        }
    }

    /// Seal `plaintext` under `context` and return the ciphertext token.
    pub fn seal(&self, plaintext: &str, context: SealContext) -> Result<String, VaultError> {
        let mut raw = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut raw);
        let token = hex::encode(raw);

        let mut entries = self.entries.write().map_err(|_| VaultError::Poisoned)?;
        if entries.len() >= self.max_entries {
            return Err(VaultError::Full(entries.len()));
        }
        entries.insert(
            token.clone(),
            Sealed {
                context,
                plaintext: plaintext.to_string(),
            },
        );
        Ok(token)
    }

    /// Open `token` under `context`.
    pub fn open(&self, token: &str, context: &SealContext) -> Result<String, VaultError> {
        let well_formed = token.len() == TOKEN_BYTES * 2
            && token.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(VaultError::Malformed);
        }

        // Tokens are issued lowercase; normalise so uppercase copies still match.
        let key = token.to_ascii_lowercase();
        let entries = self.entries.read().map_err(|_| VaultError::Poisoned)?;
        let sealed = entries.get(&key).ok_or(VaultError::Unknown)?;
        if &sealed.context != context {
            return Err(VaultError::ContextMismatch);
        }
        Ok(sealed.plaintext.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Vault {
    fn default() -> Self {
        Self::new()
    }
}
