pub mod dropdown;
pub mod modal;

pub use dropdown::Dropdown;
pub use modal::Modal;
