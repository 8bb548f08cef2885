//! Presentation - renders view models and status outcomes as HTML

pub mod character_page;
pub mod markup;

pub use character_page::{render_character_page, render_status, skill_navigation_href};
pub use markup::render_markup_html;
