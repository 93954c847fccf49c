mod refresh;
mod require_token;

pub use refresh::*;
pub use require_token::*;
