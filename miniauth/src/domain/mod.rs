pub mod bearer;
pub mod claims;
pub mod refresh_response;
pub mod signing_method;
pub mod token_error;

pub use bearer::*;
pub use claims::*;
pub use refresh_response::*;
pub use signing_method::*;
pub use token_error::*;
