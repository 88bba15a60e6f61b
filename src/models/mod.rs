pub mod responses;
pub mod upstream;
