pub mod search;
pub mod storage;
pub mod time;
