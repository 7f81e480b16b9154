pub mod email_gate;
pub mod filter_panel;
pub mod offer_table;
