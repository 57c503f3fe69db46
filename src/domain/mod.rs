// Domain layer: core entities and their own invariants. No IO.

pub mod model;
