pub mod capture_service;
pub mod debounce;
pub mod load_service;
pub mod table_engine;
