pub mod csv_read;
pub mod excel_read;
pub mod excel_write;
