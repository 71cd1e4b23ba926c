//! Report exporters

mod pdf;

pub use pdf::PdfReportExporter;
