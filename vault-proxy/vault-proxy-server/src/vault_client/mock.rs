//! An in-memory vault used to exercise the handlers without a node

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;

use crate::vault_client::{
    errors::VaultClientError, TxReport, VaultInfo, VaultReader, VaultSnapshot, VaultWriter,
};

/// The block number every mock receipt reports
pub const MOCK_BLOCK_NUMBER: u64 = 4_242;
/// The gas every mock receipt reports
pub const MOCK_GAS_USED: u64 = 51_234;

/// A mock vault that records the calls made against it
pub struct MockVault {
    /// The snapshot returned by reads, `None` makes reads fail
    pub snapshot: Option<VaultSnapshot>,
    /// Whether transactions revert
    pub revert: bool,
    /// The balance returned for any wallet
    pub balance: U256,
    /// The amounts passed to `deposit`
    pub deposits: Mutex<Vec<U256>>,
    /// The shares passed to `withdraw`
    pub withdrawals: Mutex<Vec<U256>>,
    /// The number of reads served
    pub reads: AtomicUsize,
}

impl Default for MockVault {
    fn default() -> Self {
        Self {
            snapshot: Some(VaultSnapshot {
                total_shares: U256::from(7u64),
                total_supplied: U256::from(11u64),
            }),
            revert: false,
            balance: U256::from(123u64),
            deposits: Mutex::new(Vec::new()),
            withdrawals: Mutex::new(Vec::new()),
            reads: AtomicUsize::new(0),
        }
    }
}

impl MockVault {
    /// A mock whose reads fail as if the node were unreachable
    pub fn unreachable() -> Self {
        Self { snapshot: None, ..Default::default() }
    }

    /// A mock whose transactions revert
    pub fn reverting() -> Self {
        Self { revert: true, ..Default::default() }
    }

    /// The number of write calls received
    pub fn write_calls(&self) -> usize {
        self.deposits.lock().unwrap().len() + self.withdrawals.lock().unwrap().len()
    }

    /// The hash reported for the `n`th transaction
    pub fn tx_hash(n: usize) -> B256 {
        B256::with_last_byte(n as u8 + 1)
    }

    /// Build a receipt for the `n`th transaction
    fn report(&self, n: usize) -> Result<TxReport, VaultClientError> {
        let tx_hash = Self::tx_hash(n);
        if self.revert {
            return Err(VaultClientError::Reverted(format!("{tx_hash:#x}")));
        }
        Ok(TxReport { tx_hash, block_number: MOCK_BLOCK_NUMBER, gas_used: MOCK_GAS_USED })
    }

    /// The error returned when the mock is unreachable
    fn unreachable_err() -> VaultClientError {
        VaultClientError::rpc("connection refused")
    }
}

#[async_trait]
impl VaultReader for MockVault {
    async fn vault_snapshot(&self) -> Result<VaultSnapshot, VaultClientError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.snapshot.ok_or_else(Self::unreachable_err)
    }

    async fn vault_info(&self) -> Result<VaultInfo, VaultClientError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let snapshot = self.snapshot.ok_or_else(Self::unreachable_err)?;
        Ok(VaultInfo {
            owner: Address::with_last_byte(1),
            asset: Address::with_last_byte(2),
            euler: Address::with_last_byte(3),
            euler_swap: Address::ZERO,
            total_supplied: snapshot.total_supplied,
            vault_apy: U256::from(500u64),
        })
    }

    async fn balance_of(&self, _wallet: Address) -> Result<U256, VaultClientError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.snapshot.map(|_| self.balance).ok_or_else(Self::unreachable_err)
    }
}

#[async_trait]
impl VaultWriter for MockVault {
    async fn deposit(&self, amount: U256) -> Result<TxReport, VaultClientError> {
        let n = self.write_calls();
        self.deposits.lock().unwrap().push(amount);
        self.report(n)
    }

    async fn withdraw(&self, shares: U256) -> Result<TxReport, VaultClientError> {
        let n = self.write_calls();
        self.withdrawals.lock().unwrap().push(shares);
        self.report(n)
    }
}
