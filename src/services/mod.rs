//! Lógica de dominio: asignación de slots y cálculo de tarifas

pub mod billing_service;
pub mod slot_assignment_service;
