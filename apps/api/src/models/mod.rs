pub mod analysis;
pub mod coding;
pub mod posting;
