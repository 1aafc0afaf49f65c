pub mod account;
pub mod common;
pub mod decimal_serde;
pub mod market;
pub mod order;
pub mod rpc;

// Re-export commonly used types for convenience
pub use account::*;
pub use common::*;
pub use market::*;
pub use order::*;
pub use rpc::{ApiError, IdentityResponse, IdentityStatus, JsonRpcRequest, JsonRpcResponse};
