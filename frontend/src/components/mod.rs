pub mod analyze;
pub mod handlers;
pub mod layout;
pub mod pages;
pub mod preview_area;
pub mod results;
pub mod upload_section;
pub mod utils;
