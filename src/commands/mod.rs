pub mod app;
pub mod classify;
pub mod path;
pub mod size;
pub mod table;
