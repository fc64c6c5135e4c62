pub mod catalog;
pub mod display;
pub mod normalizer;
