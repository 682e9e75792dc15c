pub mod emails;
pub mod mail;
pub mod signature;
pub mod validation;
