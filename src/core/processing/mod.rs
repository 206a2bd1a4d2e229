pub mod padding;
pub mod save;
