// Domain layer: job models and the port the fetch client implements.

pub mod model;
pub mod ports;
