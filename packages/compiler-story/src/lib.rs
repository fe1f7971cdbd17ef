mod compiler;

pub use compiler::compile_story;

#[cfg(test)]
mod tests;
