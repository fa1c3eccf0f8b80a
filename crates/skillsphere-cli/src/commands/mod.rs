pub mod account;
pub mod browse;
pub mod profile;
