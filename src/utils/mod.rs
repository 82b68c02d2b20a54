pub mod format;
pub mod sniff;
