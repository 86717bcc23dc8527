// Domain layer: failure model and ports (interfaces). No dependencies beyond std/thiserror.

pub mod model;
pub mod ports;
