pub mod duration;
pub mod error;
pub mod intent;
pub mod notice;
