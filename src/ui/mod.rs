pub mod components;
pub mod state;
