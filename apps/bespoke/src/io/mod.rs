//! File input and output: reading resumes and job descriptions from disk,
//! and writing tailored output with timestamped names.

mod reader;
mod writer;

pub use reader::read_document;
pub use writer::OutputWriter;
