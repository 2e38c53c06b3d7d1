pub use crate::models::*;
pub use crate::utils::errors::*;
pub use crate::utils::passwords::PasswordHash;
