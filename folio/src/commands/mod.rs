pub mod contact;
pub mod serve;
pub mod show;
