pub mod draw;
pub mod login;
pub mod participants;
