pub mod field;
pub mod simulate;
