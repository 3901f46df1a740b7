pub mod doctor;
pub mod menu;
