pub(crate) mod counter_game;
pub(crate) mod dismiss;
pub(crate) mod faq;
pub(crate) mod nav_menu;
pub(crate) mod project_modal;
pub(crate) mod project_tabs;
pub(crate) mod site_footer;
pub(crate) mod skill_slider;
pub(crate) mod theme_toggle;

pub mod daisy;
