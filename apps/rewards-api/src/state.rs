//! # Receipt Store
//!
//! Process-lifetime in-memory storage for accepted receipts.
//!
//! ## Thread Safety
//! The map is wrapped in `Arc<Mutex<T>>` because:
//! 1. Axum handlers run concurrently and share one store
//! 2. Only one handler should modify the map at a time
//! 3. Cloning the store clones the handle, not the contents
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Store Operations                            │
//! │                                                                         │
//! │  HTTP Request              Handler                 Store Change         │
//! │  ────────────              ───────                 ────────────         │
//! │                                                                         │
//! │  POST /receipts/process ─► process_receipt() ────► insert(id, receipt) │
//! │                                                                         │
//! │  GET /{id}/points ───────► receipt_points() ─────► (read only)         │
//! │                                                                         │
//! │  Lifetime = process lifetime: nothing survives a restart, nothing      │
//! │  is evicted.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tally_core::Receipt;

/// Shared in-memory mapping from receipt identifier to stored receipt.
///
/// ## Why Not RwLock?
/// Store operations are a single map access each; a RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    receipts: Arc<Mutex<HashMap<String, Receipt>>>,
}

impl ReceiptStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        ReceiptStore {
            receipts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Stores a receipt verbatim under the given identifier.
    ///
    /// The caller (the process route) mints the identifier; the store does
    /// not inspect or normalize the receipt.
    pub fn insert(&self, id: String, receipt: Receipt) {
        let mut receipts = self.receipts.lock().expect("Receipt store mutex poisoned");
        receipts.insert(id, receipt);
    }

    /// Returns a copy of the receipt stored under `id`, if any.
    pub fn get(&self, id: &str) -> Option<Receipt> {
        let receipts = self.receipts.lock().expect("Receipt store mutex poisoned");
        receipts.get(id).cloned()
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        let receipts = self.receipts.lock().expect("Receipt store mutex poisoned");
        receipts.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
