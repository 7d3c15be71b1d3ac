pub mod easing;
pub mod key;
pub mod resolver;
