pub mod discover;
pub mod dispatch;
pub mod report;
pub mod shared;
pub mod validate;
