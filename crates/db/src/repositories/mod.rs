//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement writes open
//! their own transaction; the `*_inner` helpers run on a caller's
//! connection so they can share one.

pub mod breed_repo;
pub mod sub_breed_repo;

pub use breed_repo::BreedRepo;
pub use sub_breed_repo::SubBreedRepo;
