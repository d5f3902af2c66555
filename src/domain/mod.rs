// Domain layer: the value a run produces. No I/O here.

pub mod model;
