pub mod cache;
pub mod utils;

pub mod fill_mask;
pub mod ner;
