//! Where settings come from and go to.

pub mod home_file;
