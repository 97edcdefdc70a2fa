// Domain layer: request/response models and the eligibility ports.

pub mod model;
pub mod ports;
