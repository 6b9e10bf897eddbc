pub mod mine;
pub mod run;
