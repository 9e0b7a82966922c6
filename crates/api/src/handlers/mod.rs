pub mod eep;
pub mod lock;
