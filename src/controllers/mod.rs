//! Controllers: orquestación de cada operación de la API

pub mod parking_controller;
pub mod revenue_controller;
pub mod slot_controller;
