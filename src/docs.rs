// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::get_me,

        // --- Appointments ---
        handlers::appointments::list_appointments,
        handlers::appointments::create_appointment,
        handlers::appointments::update_appointment,
        handlers::appointments::delete_appointment,

        // --- Admin ---
        handlers::tenancy::list_tenants,
        handlers::tenancy::provision_tenant,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::User,
            models::auth::RegisterPayload,
            models::auth::RegisterResponse,
            models::auth::LoginPayload,
            models::auth::AuthResponse,

            // --- Tenancy ---
            models::tenancy::Tenant,
            models::tenancy::TenantSummary,
            models::tenancy::ProvisionTenantPayload,

            // --- Scheduling ---
            models::scheduling::AppointmentStatus,
            models::scheduling::Client,
            models::scheduling::Barber,
            models::scheduling::Service,
            models::scheduling::Appointment,

            // --- Payloads ---
            handlers::appointments::CreateAppointmentPayload,
            handlers::appointments::UpdateAppointmentPayload,
            handlers::clients::ClientPayload,
            handlers::barbers::BarberPayload,
            handlers::services::ServicePayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário"),
        (name = "Appointments", description = "Agenda e Agendamentos"),
        (name = "Admin", description = "Provisionamento de Lojas (superadmin)")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
