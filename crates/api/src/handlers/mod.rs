pub mod clima;
pub mod health;
pub mod info;
