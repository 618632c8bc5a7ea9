pub mod error;
pub mod timestamp;

pub use self::timestamp::Timestamp;
