pub mod emitter;
pub mod error;
pub mod labels;
pub mod listing;
pub mod parser;
pub mod segment;
pub mod source;
pub mod translator;

pub use error::{Diag, Error};
pub use parser::{Command, Op};
pub use segment::Segment;
pub use source::Unit;
pub use translator::{translate_unit, Context, Translation};

/// Translate in-memory source as unit `name`.
pub fn translate_str(name: &str, text: &str) -> Result<Translation, Diag> {
    translate_unit(&Unit::from_source(name, text))
}
