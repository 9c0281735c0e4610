pub mod content;
pub mod newtypes;
pub mod resources;
pub mod team;
