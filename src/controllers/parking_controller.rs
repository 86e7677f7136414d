//! Ciclo de vida de sesiones de aparcamiento
//!
//! Entrada: validar matrícula, reclamar slot, abrir sesión. Salida: calcular
//! duración e importe, cerrar sesión, liberar slot. Localización: slot actual
//! de una matrícula.

use chrono::Utc;
use sqlx::PgPool;

use crate::config::billing::BillingConfig;
use crate::dto::parking_dto::{
    EntryRequest, EntryResponse, ExitRequest, ExitResponse, LocateRequest, LocateResponse,
};
use crate::models::session::BillingType;
use crate::repositories::session_repository::SessionRepository;
use crate::repositories::slot_repository::SlotRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::billing_service;
use crate::services::slot_assignment_service::SlotAssignmentService;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{normalize_plate, validate_plate};

pub struct ParkingController {
    vehicles: VehicleRepository,
    slots: SlotRepository,
    sessions: SessionRepository,
    assignment: SlotAssignmentService,
    billing: BillingConfig,
}

impl ParkingController {
    pub fn new(pool: PgPool, billing: BillingConfig) -> Self {
        Self {
            vehicles: VehicleRepository::new(pool.clone()),
            slots: SlotRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool.clone()),
            assignment: SlotAssignmentService::new(pool),
            billing,
        }
    }

    /// Registrar la entrada de un vehículo: claim de slot + apertura de sesión
    pub async fn register_entry(&self, request: EntryRequest) -> AppResult<EntryResponse> {
        let plate = normalize_plate(request.plate.as_deref().unwrap_or(""));
        if validate_plate(&plate).is_err() {
            return Err(AppError::BadRequest("Invalid plate format".to_string()));
        }

        // Alta idempotente del vehículo en cada entrada
        self.vehicles.upsert_by_plate(&plate, &request.vehicle_type).await?;

        if self.sessions.find_active_by_plate(&plate).await?.is_some() {
            return Err(AppError::Conflict("Vehicle already parked".to_string()));
        }

        let requested_slot = request
            .slot_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let slot = match requested_slot {
            Some(code) => {
                self.assignment
                    .claim_manual(code, &plate, &request.vehicle_type)
                    .await?
            }
            None => {
                self.assignment
                    .claim_automatic(&plate, &request.vehicle_type)
                    .await?
            }
        };

        // Day pass se cobra en puerta; horario no cobra nada todavía
        let fee_collected = match request.billing_type {
            BillingType::DayPass => self.billing.day_pass_fee,
            BillingType::Hourly => 0,
        };

        let created = self
            .sessions
            .create(&plate, slot.id, &request.billing_type, fee_collected)
            .await;

        if let Err(e) = created {
            // El claim ya ocurrió: liberar el slot antes de propagar el fallo
            if let Err(release_err) = self.assignment.release(slot.id).await {
                log::warn!(
                    "no se pudo liberar el slot {} tras fallo de apertura de sesión: {}",
                    slot.slot_number,
                    release_err
                );
            }
            return Err(e);
        }

        Ok(EntryResponse {
            success: true,
            slot_number: slot.slot_number,
            level: slot.level,
            billing_type: request.billing_type,
            fee: fee_collected,
        })
    }

    /// Registrar la salida: cierre de sesión, cobro y liberación del slot
    pub async fn register_exit(&self, request: ExitRequest) -> AppResult<ExitResponse> {
        let plate = normalize_plate(request.plate.as_deref().unwrap_or(""));

        let session = match self.sessions.find_active_by_plate(&plate).await? {
            Some(session) => session,
            None => {
                // Fallback tolerante: slot ocupado sin sesión (datos creados
                // fuera del flujo normal de entrada). Se libera el slot sin
                // fabricar una sesión.
                let slot = self
                    .slots
                    .find_occupied_by_plate(&plate)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

                log::warn!("salida sin sesión registrada para {}, liberando {}", plate, slot.slot_number);
                let released = self.slots.release(slot.id).await?.unwrap_or(slot);

                return Ok(ExitResponse {
                    success: true,
                    slot_number: released.slot_number,
                    duration: 0,
                    fee: 0,
                    billing_type: None,
                    already_collected: false,
                });
            }
        };

        // Calcular la duración antes de mutar nada
        let exit_time = Utc::now();
        let duration_ms = (exit_time - session.entry_time).num_milliseconds();
        let duration = billing_service::duration_minutes(duration_ms);

        let (fee, already_collected, calculated_amount) = if session.is_day_pass() {
            // Day pass: el importe ya se cobró en la entrada
            (session.fixed_amount, true, 0)
        } else {
            let fee = billing_service::calculate_hourly_fee(duration_ms, &self.billing);
            (fee, false, fee)
        };

        self.sessions
            .complete(session.id, exit_time, calculated_amount)
            .await?;

        let slot_number = self
            .assignment
            .release(session.slot_id)
            .await?
            .map(|slot| slot.slot_number)
            .unwrap_or_else(|| session.slot_id.to_string());

        Ok(ExitResponse {
            success: true,
            slot_number,
            duration,
            fee,
            billing_type: BillingType::parse(&session.billing_type),
            already_collected,
        })
    }

    /// Localizar el slot actual de una matrícula
    pub async fn locate(&self, request: LocateRequest) -> AppResult<LocateResponse> {
        let raw_plate = request.plate.as_deref().map(str::trim).unwrap_or("");
        if raw_plate.is_empty() {
            return Err(AppError::BadRequest("plate is required".to_string()));
        }
        let plate = normalize_plate(raw_plate);

        let slot = match self.sessions.find_active_by_plate(&plate).await? {
            Some(session) => self.slots.find_by_id(session.slot_id).await?,
            // Mismo fallback tolerante que la salida: matrícula denormalizada
            None => self.slots.find_occupied_by_plate(&plate).await?,
        };

        Ok(match slot {
            Some(slot) => LocateResponse::located(&slot),
            None => LocateResponse::not_found(),
        })
    }
}
