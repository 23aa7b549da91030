// Aggregation views — derived, read-only statistics over store snapshots.
//
// Everything in here is a pure function of the post slice it is given.
// Nothing is cached: views are recomputed on each render, which is cheap
// at dashboard scale.

pub mod activity;
pub mod alerts;
pub mod overview;
pub mod trends;
