pub mod cache;
pub mod motion;
