// Domain layer: listing/form models and the ports every controller talks through.

pub mod model;
pub mod ports;
