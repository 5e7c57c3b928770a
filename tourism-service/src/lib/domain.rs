pub mod account;
pub mod spot;
