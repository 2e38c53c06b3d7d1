pub use self::connections::*;

mod connections;
