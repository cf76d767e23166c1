mod locator;
mod parser;

pub use locator::locate_build_file;
pub use parser::{parse_document, BuildDocument, BuildFileParser, RawTarget};
