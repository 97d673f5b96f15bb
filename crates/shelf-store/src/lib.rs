//! Document-store seam for the shelf item service.
//!
//! The [`ItemStore`] trait is the only boundary between the HTTP layer and
//! persistence. A backend provides single-document CRUD primitives; the
//! reference [`MemoryItemStore`] keeps everything behind a `RwLock` and is
//! used by tests and the default binary.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryItemStore;
pub use traits::ItemStore;
