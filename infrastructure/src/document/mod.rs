//! Document text extraction

mod pdf_reader;

pub use pdf_reader::{PdfDocumentReader, join_pages};
