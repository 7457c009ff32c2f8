pub mod activity;
pub mod assignment;
pub mod building;
pub mod employee;
pub mod health;
pub mod hosting;
pub mod maintenance;
pub mod reservation;
pub mod room;
pub mod settings;
pub mod v1;
