pub mod color;
pub mod paint;
pub mod table;
