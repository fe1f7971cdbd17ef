mod compiler;
mod index;

pub use compiler::{compile_component, find_text_prop};
pub use index::compile_index;

#[cfg(test)]
mod tests;
