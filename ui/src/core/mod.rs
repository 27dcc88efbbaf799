pub mod dismiss;
pub mod dropdown;
pub mod menu;
