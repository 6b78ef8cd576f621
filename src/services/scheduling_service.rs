// src/services/scheduling_service.rs
//
// O núcleo do agendamento: deriva a janela de horário a partir da
// duração do serviço, rejeita sobreposição por barbeiro e dirige as
// transições de status.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AppointmentRepository, CatalogRepository},
    models::scheduling::{Appointment, AppointmentStatus, TimeSlot, day_bounds},
};

#[derive(Clone)]
pub struct SchedulingService {
    appointment_repo: AppointmentRepository,
    catalog_repo: CatalogRepository,
    pool: PgPool,
}

impl SchedulingService {
    pub fn new(
        appointment_repo: AppointmentRepository,
        catalog_repo: CatalogRepository,
        pool: PgPool,
    ) -> Self {
        Self {
            appointment_repo,
            catalog_repo,
            pool,
        }
    }

    // Agenda da loja, com filtros opcionais de barbeiro e de dia
    // ([00:00:00, 23:59:59], ambos inclusos).
    pub async fn list_appointments(
        &self,
        tenant_id: Uuid,
        barber_id: Option<Uuid>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Appointment>, AppError> {
        let range = date.map(day_bounds);
        self.appointment_repo.list(tenant_id, barber_id, range).await
    }

    // Cria um agendamento com status inicial `agendado`.
    //
    // Tudo acontece dentro de uma transação que começa trancando a
    // linha do barbeiro: duas requisições simultâneas para o mesmo
    // barbeiro executam checagem + escrita em série, e a constraint
    // de exclusão do banco cobre qualquer caminho restante. Qualquer
    // falha solta a transação sem escrita parcial.
    pub async fn create_appointment(
        &self,
        tenant_id: Uuid,
        client_id: Uuid,
        barber_id: Uuid,
        service_id: Uuid,
        starts_at: NaiveDateTime,
    ) -> Result<Appointment, AppError> {
        let mut tx = self.pool.begin().await?;

        self.catalog_repo
            .lock_barber(&mut *tx, tenant_id, barber_id)
            .await?
            .ok_or(AppError::InvalidBarber)?;

        // O serviço precisa pertencer à loja e estar ativo; a duração
        // vigente NESTE momento congela o fim do agendamento.
        let service = self
            .catalog_repo
            .find_active_service(&mut *tx, tenant_id, service_id)
            .await?
            .ok_or(AppError::InvalidService)?;

        let slot = TimeSlot::from_start(starts_at, service.duration_min);

        if self
            .appointment_repo
            .has_conflict(&mut *tx, tenant_id, barber_id, &slot, None)
            .await?
        {
            return Err(AppError::ScheduleConflict);
        }

        let appointment = self
            .appointment_repo
            .create(&mut *tx, tenant_id, client_id, barber_id, service_id, &slot)
            .await?;

        tx.commit().await?;

        Ok(appointment)
    }

    // Edita status e, opcionalmente, remarca o horário.
    //
    // Qualquer status alcança qualquer outro — o fluxo de trabalho é
    // decidido pelo chamador, não aqui. Ao remarcar, o fim é
    // recalculado com a duração ATUAL do serviço original (que pode
    // já estar desativado: desativação não bloqueia remarcação).
    pub async fn update_appointment(
        &self,
        tenant_id: Uuid,
        id: Uuid,
        status: AppointmentStatus,
        new_start: Option<NaiveDateTime>,
    ) -> Result<Appointment, AppError> {
        let mut tx = self.pool.begin().await?;

        // Busca tenant-scoped: agendamento de outra loja responde o
        // mesmo 404 de um id inexistente.
        let current = self
            .appointment_repo
            .find_by_id(&mut *tx, tenant_id, id)
            .await?
            .ok_or(AppError::AppointmentNotFound)?;

        let slot = match new_start {
            Some(starts_at) => {
                self.catalog_repo
                    .lock_barber(&mut *tx, tenant_id, current.barber_id)
                    .await?
                    .ok_or(AppError::InvalidBarber)?;

                let service = self
                    .catalog_repo
                    .find_service(&mut *tx, tenant_id, current.service_id)
                    .await?
                    .ok_or(AppError::InvalidService)?;

                let slot = TimeSlot::from_start(starts_at, service.duration_min);

                // A própria janela não conta como conflito
                if self
                    .appointment_repo
                    .has_conflict(&mut *tx, tenant_id, current.barber_id, &slot, Some(id))
                    .await?
                {
                    return Err(AppError::ScheduleConflict);
                }

                Some(slot)
            }
            None => None,
        };

        let updated = self
            .appointment_repo
            .update(&mut *tx, tenant_id, id, status, slot.as_ref())
            .await?
            .ok_or(AppError::AppointmentNotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    // Exclusão definitiva, tenant-scoped.
    pub async fn delete_appointment(&self, tenant_id: Uuid, id: Uuid) -> Result<(), AppError> {
        let deleted = self
            .appointment_repo
            .delete(&self.pool, tenant_id, id)
            .await?;

        if deleted == 0 {
            return Err(AppError::AppointmentNotFound);
        }

        Ok(())
    }
}
