pub mod breeds;
pub mod stats;
pub mod sub_breeds;
