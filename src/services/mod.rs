pub mod controller;
pub mod history;
pub mod signing;
pub mod transfer;
