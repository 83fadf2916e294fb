pub mod assess;
pub mod categories;
pub mod compare;
pub mod init;
pub mod path;
pub mod validate;
