// Adapters layer: concrete eligibility implementations.

pub mod eligibility;
