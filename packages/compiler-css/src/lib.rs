mod style;
mod stylesheet;

pub use style::extract_style;
pub use stylesheet::{compile_stylesheet, hover_background, FALLBACK_HOVER_BACKGROUND};
