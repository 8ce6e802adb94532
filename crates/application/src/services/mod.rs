pub mod srv_weights;

pub use srv_weights::{SrvWeights, DEFAULT_WEIGHT};
