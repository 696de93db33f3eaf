pub mod layout;
pub mod navigation;
