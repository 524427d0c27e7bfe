pub mod button;
pub mod checkbox;
pub mod input;
pub mod range;
pub mod tab;
pub mod validator;

pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use range::Range;
pub use tab::Tab;
pub use validator::Validator;
