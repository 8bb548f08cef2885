//! Page routes

pub mod character_detail;

pub use character_detail::{character_id_from_path, load_character_page};
