pub mod hiring;
pub mod renewal;
