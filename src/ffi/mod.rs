// ============================================================================
// FFI Module
// Owned handles and the C ABI built on them
// ============================================================================

pub mod abi;
mod handle;

pub use handle::{DecimalHandle, Handle, HandleValue, IntegerHandle};
