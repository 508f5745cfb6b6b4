pub mod founder;
pub mod response;
pub mod session;
pub mod step;
