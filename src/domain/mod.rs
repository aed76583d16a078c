// Domain layer - Sidecar records and the per-file error taxonomy

pub mod errors;
pub mod model;
