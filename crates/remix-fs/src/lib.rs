pub mod io;
pub mod streams;

pub use io::atomic_write_str;
pub use streams::{DocumentSink, DocumentSource, FsError};
