pub use self::access_token::AccessTokenExtractor;
pub use self::optional_user::OptionalUser;

mod access_token;
mod optional_user;
mod user;
