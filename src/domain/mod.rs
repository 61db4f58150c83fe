// Domain layer: content model and the ports the build machinery plugs into.

pub mod model;
pub mod ports;
