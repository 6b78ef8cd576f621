// src/models/scheduling.rs

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- ENUMS ---

// Mapeia o CREATE TYPE appointment_status do banco.
// Apenas `agendado` e `confirmado` ocupam a agenda do barbeiro;
// `cancelado` e `concluido` liberam o horário.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Agendado,
    Confirmado,
    Cancelado,
    Concluido,
}

impl AppointmentStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AppointmentStatus::Agendado | AppointmentStatus::Confirmado)
    }
}

// --- ENTIDADES ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    pub active: bool,

    // Janela de expediente (TIME no Postgres)
    #[schema(value_type = String, example = "09:00:00")]
    pub work_start: NaiveTime,
    #[schema(value_type = String, example = "19:00:00")]
    pub work_end: NaiveTime,

    // Dias em que atende. No Postgres é TEXT[], no Rust é Vec<String>
    #[schema(example = json!(["segunda", "terca", "quarta"]))]
    pub weekdays: Vec<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub description: Option<String>,

    // Duração em minutos — é daqui que o fim do agendamento é derivado
    pub duration_min: i32,

    #[schema(value_type = f64, example = 45.0)]
    pub price: Decimal,

    pub category: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub client_id: Uuid,
    pub barber_id: Uuid,
    pub service_id: Uuid,

    // Timestamps locais, sem fuso
    #[schema(value_type = String, example = "2024-01-01T10:00:00")]
    pub starts_at: NaiveDateTime,
    #[schema(value_type = String, example = "2024-01-01T10:30:00")]
    pub ends_at: NaiveDateTime,

    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

// --- JANELA DE HORÁRIO ---

// Intervalo semiaberto `[starts_at, ends_at)`. Toda a detecção de
// conflito raciocina sobre este tipo: fim encostado em início não
// é sobreposição.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

impl TimeSlot {
    // O fim nunca é informado pelo cliente: sempre derivado da duração
    // do serviço no momento do agendamento.
    pub fn from_start(starts_at: NaiveDateTime, duration_min: i32) -> Self {
        Self {
            starts_at,
            ends_at: starts_at + Duration::minutes(duration_min as i64),
        }
    }

    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.starts_at < other.ends_at && other.starts_at < self.ends_at
    }
}

// Limites de um dia de agenda: [00:00:00, 23:59:59], ambos inclusos
// no filtro de listagem.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (
        date.and_time(NaiveTime::MIN),
        date.and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn fim_derivado_da_duracao() {
        let slot = TimeSlot::from_start(dt("2024-01-01T10:00:00"), 30);
        assert_eq!(slot.ends_at, dt("2024-01-01T10:30:00"));
    }

    #[test]
    fn sobreposicao_parcial_conflita() {
        let existente = TimeSlot::from_start(dt("2024-01-01T10:00:00"), 30);
        let proposto = TimeSlot::from_start(dt("2024-01-01T10:15:00"), 30);
        assert!(existente.overlaps(&proposto));
        assert!(proposto.overlaps(&existente));
    }

    #[test]
    fn encostado_nao_conflita() {
        // Fim exatamente no início do próximo: agenda cheia é válida
        let existente = TimeSlot::from_start(dt("2024-01-01T10:00:00"), 30);
        let seguinte = TimeSlot::from_start(dt("2024-01-01T10:30:00"), 30);
        assert!(!existente.overlaps(&seguinte));
        assert!(!seguinte.overlaps(&existente));
    }

    #[test]
    fn janela_contida_conflita() {
        let existente = TimeSlot::from_start(dt("2024-01-01T10:00:00"), 60);
        let dentro = TimeSlot::from_start(dt("2024-01-01T10:15:00"), 15);
        assert!(existente.overlaps(&dentro));
    }

    #[test]
    fn limites_do_dia_incluem_ultimo_segundo() {
        let (inicio, fim) = day_bounds(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(inicio, dt("2024-01-01T00:00:00"));
        assert_eq!(fim, dt("2024-01-01T23:59:59"));
    }

    #[test]
    fn conjunto_ativo_de_status() {
        assert!(AppointmentStatus::Agendado.is_active());
        assert!(AppointmentStatus::Confirmado.is_active());
        assert!(!AppointmentStatus::Cancelado.is_active());
        assert!(!AppointmentStatus::Concluido.is_active());
    }

    #[test]
    fn status_serializa_em_minusculas() {
        // Os valores do enum no banco e na API são idênticos
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Agendado).unwrap(),
            "\"agendado\""
        );
        let parsed: AppointmentStatus = serde_json::from_str("\"concluido\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Concluido);
    }
}
