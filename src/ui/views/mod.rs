pub mod check;
pub mod diff;
pub mod generate;
pub mod inspect;
pub mod projects;
pub mod watch;
