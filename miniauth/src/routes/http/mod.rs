pub(crate) mod refresh;
pub(crate) mod require_token;
pub(crate) mod root;

pub use refresh::*;
pub use require_token::*;
pub use root::*;
