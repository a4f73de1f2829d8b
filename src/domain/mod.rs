// Domain layer: record models for each pipeline stage and the ports the
// core wires together. No I/O here.

pub mod model;
pub mod ports;
