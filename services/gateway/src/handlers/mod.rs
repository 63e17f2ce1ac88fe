pub mod account;
pub mod market;
pub mod social;
