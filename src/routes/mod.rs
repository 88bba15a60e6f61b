pub mod bookcount;
pub mod health;
pub mod readership;
pub mod status;
