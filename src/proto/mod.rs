pub mod crispiness;
pub mod registry;

pub use crispiness::CrispinessLevelSet;
pub use registry::{PrototypeError, PrototypeRegistry};
