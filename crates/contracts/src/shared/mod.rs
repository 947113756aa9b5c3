pub mod date;
pub mod metadata;
pub mod table;
