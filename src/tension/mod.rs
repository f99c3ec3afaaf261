pub mod source;
pub mod capture;
pub mod remote;
