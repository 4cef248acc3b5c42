pub mod days;
pub mod init;
pub mod misc;
