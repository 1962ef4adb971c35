mod csv_import;
mod detect;
mod json;

pub use csv_import::{csv_rows, CsvImporter, CsvProfile};
pub use detect::detect_export_format;
pub use json::json_rows;
