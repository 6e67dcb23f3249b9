pub mod event_log;
pub mod kitchen_resources;

pub use event_log::FryLog;
pub use kitchen_resources::{KitchenConfig, KitchenRng};
