//! Parking Facility Management - backend
//!
//! Servicio HTTP de gestión de un parking de una sola instalación: slots,
//! entradas/salidas de vehículos y facturación, sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
