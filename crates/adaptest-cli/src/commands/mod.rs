pub mod analyze;
pub mod init;
pub mod replay;
pub mod score;
pub mod validate;
