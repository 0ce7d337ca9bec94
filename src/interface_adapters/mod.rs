pub mod clients;
pub mod gateway;
pub mod protocol;
pub mod state;
pub mod storage;
