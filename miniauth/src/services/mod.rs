pub mod refresh;
pub mod token_codec;
pub mod token_service;

pub use refresh::{refresh, refresh_with, ExpiryPolicy, RefreshDecision};
pub use token_codec::{decode, decode_into, generate, is_valid};
pub use token_service::*;
