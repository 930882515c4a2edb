//! Repository layer: one zero-sized struct per table, async methods taking
//! the pool.

mod flavor_repo;

pub use flavor_repo::FlavorRepo;
