pub mod balance;
pub mod serve;
