pub mod about;
pub mod info_hub;
