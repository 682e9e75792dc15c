pub mod booking;
pub mod contact;
pub mod health;
pub mod webhook;
