mod file_set;
mod generate;

pub use file_set::{FileKind, GeneratedFileSet};
pub use generate::generate;

// Re-export the model so callers only need this crate
pub use storygen_common::{
    GenerateError, GenerationRequest, NodeKind, NodeStyleInfo, Paint, PropType,
    PropertyDescriptor, Rgb, SelectionError,
};
