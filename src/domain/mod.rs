// Domain layer: the exposure contract and its output types. No dependencies beyond serde.

pub mod model;
pub mod ports;
