pub mod activity;
pub mod assignment;
pub mod building;
pub mod employee;
pub mod hosting;
pub mod id;
pub mod maintenance;
pub mod reservation;
pub mod room;
pub mod settings;
