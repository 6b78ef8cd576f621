// src/db/appointment_repo.rs

use chrono::NaiveDateTime;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::scheduling::{Appointment, AppointmentStatus, TimeSlot},
};

const APPOINTMENT_COLUMNS: &str =
    "id, tenant_id, client_id, barber_id, service_id, starts_at, ends_at, status, created_at";

// Código SQLSTATE da constraint de exclusão (appointments_no_overlap).
// Uma escrita que escapou da checagem prévia é rejeitada pelo banco
// com o MESMO erro de conflito visto pelo caminho normal.
const EXCLUSION_VIOLATION: &str = "23P01";

fn map_overlap_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return AppError::ScheduleConflict;
        }
    }
    e.into()
}

#[derive(Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Agenda da loja, opcionalmente de um barbeiro e/ou de um único dia.
    pub async fn list(
        &self,
        tenant_id: Uuid,
        barber_id: Option<Uuid>,
        range: Option<(NaiveDateTime, NaiveDateTime)>,
    ) -> Result<Vec<Appointment>, AppError> {
        let (from, to) = match range {
            Some((from, to)) => (Some(from), Some(to)),
            None => (None, None),
        };

        let appointments = sqlx::query_as::<_, Appointment>(&format!(
            r#"
            SELECT {APPOINTMENT_COLUMNS}
            FROM appointments
            WHERE tenant_id = $1
              AND ($2::uuid IS NULL OR barber_id = $2)
              AND ($3::timestamp IS NULL OR starts_at >= $3)
              AND ($4::timestamp IS NULL OR starts_at <= $4)
            ORDER BY starts_at ASC
            "#
        ))
        .bind(tenant_id)
        .bind(barber_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(appointments)
    }

    // O Detector de Conflito: existe algum agendamento ATIVO do mesmo
    // barbeiro cuja janela `[starts_at, ends_at)` cruza a proposta?
    // Igualdade na borda não conta — agendamentos encostados são válidos.
    pub async fn has_conflict<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        barber_id: Uuid,
        slot: &TimeSlot,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM appointments
                WHERE tenant_id = $1
                  AND barber_id = $2
                  AND status IN ('agendado', 'confirmado')
                  AND starts_at < $4
                  AND ends_at > $3
                  AND ($5::uuid IS NULL OR id <> $5)
            )
            "#,
        )
        .bind(tenant_id)
        .bind(barber_id)
        .bind(slot.starts_at)
        .bind(slot.ends_at)
        .bind(exclude_id)
        .fetch_one(executor)
        .await?;

        Ok(exists)
    }

    pub async fn create<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        client_id: Uuid,
        barber_id: Uuid,
        service_id: Uuid,
        slot: &TimeSlot,
    ) -> Result<Appointment, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(&format!(
            r#"
            INSERT INTO appointments (tenant_id, client_id, barber_id, service_id, starts_at, ends_at, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'agendado')
            RETURNING {APPOINTMENT_COLUMNS}
            "#
        ))
        .bind(tenant_id)
        .bind(client_id)
        .bind(barber_id)
        .bind(service_id)
        .bind(slot.starts_at)
        .bind(slot.ends_at)
        .fetch_one(executor)
        .await
        .map_err(map_overlap_violation)?;

        Ok(appointment)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let appointment = sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1 AND tenant_id = $2"
        ))
        .bind(id)
        .bind(tenant_id)
        .fetch_optional(executor)
        .await?;

        Ok(appointment)
    }

    // Sem nova janela, início e fim ficam exatamente como estavam.
    pub async fn update<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
        status: AppointmentStatus,
        slot: Option<&TimeSlot>,
    ) -> Result<Option<Appointment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let (starts_at, ends_at) = match slot {
            Some(slot) => (Some(slot.starts_at), Some(slot.ends_at)),
            None => (None, None),
        };

        let appointment = sqlx::query_as::<_, Appointment>(&format!(
            r#"
            UPDATE appointments
            SET status = $3,
                starts_at = COALESCE($4, starts_at),
                ends_at = COALESCE($5, ends_at)
            WHERE id = $1 AND tenant_id = $2
            RETURNING {APPOINTMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(tenant_id)
        .bind(status)
        .bind(starts_at)
        .bind(ends_at)
        .fetch_optional(executor)
        .await
        .map_err(map_overlap_violation)?;

        Ok(appointment)
    }

    pub async fn delete<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1 AND tenant_id = $2")
            .bind(id)
            .bind(tenant_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
