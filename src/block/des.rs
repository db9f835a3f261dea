mod cipher;
mod permutation_tables;
mod s_boxes;

pub use cipher::Des;
