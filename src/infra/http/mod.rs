pub mod csv_source;
pub mod email_capture;
