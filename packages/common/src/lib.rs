pub mod context;
pub mod error;
pub mod lookup;
pub mod model;
pub mod result;
pub mod sanitize;

pub use context::*;
pub use error::*;
pub use lookup::*;
pub use model::*;
pub use result::*;
pub use sanitize::*;
