// Domain layer: the value container and the ports the programs talk through.

pub mod model;
pub mod ports;
