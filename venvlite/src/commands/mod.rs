pub mod clean;
pub mod run;
pub mod setup;
pub mod status;
