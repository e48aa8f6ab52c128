pub mod derivation;

pub use derivation::{ChangeSet, DerivationEngine};
