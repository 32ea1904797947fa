//! Typed endpoint catalog for the lending backend, via the host's `/api`
//! forwarder.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<T, ApiFailure>`; the 401 class is intercepted in
//! `http`, everything else is the page's to present.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use api::error::ApiFailure;
use api::profile::UserProfile;
use api::types::{
    AdminUser, AdminUserPatch, AdminUserStats, AdminUserStatus, AuditLogEntry, ChartSlice, Lead,
    LeadStats, LeadStatus, LoginRequest, NewAdminUser, Page, ReportMetrics, ReviewTestimonial,
    SessionInfo, SiteSettings, Testimonial, TestimonialStats, TopProduct,
};

use super::http;

// =============================================================================
// SESSION
// =============================================================================

/// Establish a session: the host exchanges the credentials with the
/// backend and sets both cookies on success.
///
/// # Errors
///
/// `Unauthorized` here means rejected credentials, not an expired session.
pub async fn login(email: &str, password: &str) -> Result<UserProfile, ApiFailure> {
    let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let profile: UserProfile = http::post_json_uninterpreted("/api/session", &request).await?;
    http::reset_login_redirect();
    Ok(profile)
}

/// Tear down the session cookies. Failures are ignored; the guard treats
/// a missing cookie as logged out either way.
pub async fn logout() {
    let _ = http::delete("/api/session").await;
}

/// Cookie-derived session state from the host.
pub async fn fetch_session() -> Option<SessionInfo> {
    http::get_json("/api/session").await.ok()
}

/// Fresh profile from the backend (`GET /auth/me` behind the forwarder).
///
/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_profile() -> Result<UserProfile, ApiFailure> {
    http::get_json("/api/auth/me").await
}

// =============================================================================
// LEADS
// =============================================================================

pub(crate) fn lead_status_path(id: &str) -> String {
    format!("/api/leads/{id}/status")
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_leads() -> Result<Vec<Lead>, ApiFailure> {
    http::get_json("/api/leads").await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_lead_stats() -> Result<LeadStats, ApiFailure> {
    http::get_json("/api/leads/stats").await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn update_lead_status(id: &str, status: LeadStatus) -> Result<Lead, ApiFailure> {
    #[derive(Serialize)]
    struct Body {
        status: LeadStatus,
    }
    http::patch_json(&lead_status_path(id), &Body { status }).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn delete_lead(id: &str) -> Result<(), ApiFailure> {
    http::delete(&format!("/api/leads/{id}")).await
}

// =============================================================================
// TESTIMONIALS
// =============================================================================

pub(crate) fn testimonial_action_path(id: &str, action: &str) -> String {
    format!("/api/testimonials/{id}/{action}")
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_pending_testimonials() -> Result<Vec<Testimonial>, ApiFailure> {
    http::get_json("/api/testimonials/pending").await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_approved_testimonials() -> Result<Vec<Testimonial>, ApiFailure> {
    http::get_json("/api/testimonials/approved").await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_testimonial_stats() -> Result<TestimonialStats, ApiFailure> {
    http::get_json("/api/testimonials/stats").await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn approve_testimonial(id: &str, reviewed_by: &str) -> Result<Testimonial, ApiFailure> {
    let body = ReviewTestimonial { reviewed_by: reviewed_by.to_owned() };
    http::patch_json(&testimonial_action_path(id, "approve"), &body).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn reject_testimonial(id: &str, reviewed_by: &str) -> Result<Testimonial, ApiFailure> {
    let body = ReviewTestimonial { reviewed_by: reviewed_by.to_owned() };
    http::patch_json(&testimonial_action_path(id, "reject"), &body).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn toggle_testimonial_featured(id: &str) -> Result<Testimonial, ApiFailure> {
    http::patch_empty(&testimonial_action_path(id, "featured")).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn delete_testimonial(id: &str) -> Result<(), ApiFailure> {
    http::delete(&format!("/api/testimonials/{id}")).await
}

// =============================================================================
// ADMIN USERS
// =============================================================================

/// List filters for the admin-user table.
#[derive(Clone, Debug, Default)]
pub struct AdminUserQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub role: Option<String>,
    pub status: Option<String>,
}

impl AdminUserQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string()), ("limit", self.limit.max(1).to_string())];
        if !self.search.trim().is_empty() {
            pairs.push(("search", self.search.trim().to_owned()));
        }
        if let Some(role) = &self.role {
            pairs.push(("role", role.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        pairs
    }
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_admin_users(query: &AdminUserQuery) -> Result<Page<AdminUser>, ApiFailure> {
    http::get_json(&http::with_query("/api/admin-users", &query.to_pairs())).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_admin_user_stats() -> Result<AdminUserStats, ApiFailure> {
    http::get_json("/api/admin-users/stats").await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn create_admin_user(user: &NewAdminUser) -> Result<AdminUser, ApiFailure> {
    http::post_json("/api/admin-users", user).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn update_admin_user(id: &str, patch: &AdminUserPatch) -> Result<AdminUser, ApiFailure> {
    http::patch_json(&format!("/api/admin-users/{id}"), patch).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn update_admin_user_status(id: &str, status: AdminUserStatus) -> Result<AdminUser, ApiFailure> {
    #[derive(Serialize)]
    struct Body {
        status: AdminUserStatus,
    }
    http::patch_json(&format!("/api/admin-users/{id}/status"), &Body { status }).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn delete_admin_user(id: &str) -> Result<(), ApiFailure> {
    http::delete(&format!("/api/admin-users/{id}")).await
}

// =============================================================================
// SETTINGS
// =============================================================================

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_settings() -> Result<SiteSettings, ApiFailure> {
    http::get_json("/api/settings").await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn update_settings(settings: &SiteSettings) -> Result<SiteSettings, ApiFailure> {
    http::patch_json("/api/settings", settings).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn send_test_email(email: &str) -> Result<(), ApiFailure> {
    #[derive(Serialize)]
    struct Body {
        email: String,
    }
    let _: serde_json::Value =
        http::post_json("/api/settings/test-email", &Body { email: email.to_owned() }).await?;
    Ok(())
}

// =============================================================================
// AUDIT LOGS
// =============================================================================

/// Server-side filters for the audit-log table.
#[derive(Clone, Debug, Default)]
pub struct AuditLogQuery {
    pub page: u32,
    pub limit: u32,
    pub action: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl AuditLogQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string()), ("limit", self.limit.max(1).to_string())];
        if let Some(action) = &self.action {
            pairs.push(("action", action.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(start) = &self.start_date {
            pairs.push(("startDate", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("endDate", end.clone()));
        }
        pairs
    }
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_audit_logs(query: &AuditLogQuery) -> Result<Page<AuditLogEntry>, ApiFailure> {
    http::get_json(&http::with_query("/api/audit-logs", &query.to_pairs())).await
}

// =============================================================================
// REPORTS
// =============================================================================

/// Inclusive date window for report queries (ISO `YYYY-MM-DD`).
#[derive(Clone, Debug, Default)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.start.is_empty() {
            pairs.push(("startDate", self.start.clone()));
        }
        if !self.end.is_empty() {
            pairs.push(("endDate", self.end.clone()));
        }
        pairs
    }
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_report_metrics(range: &DateRange) -> Result<ReportMetrics, ApiFailure> {
    http::get_json(&http::with_query("/api/reports/metrics", &range.to_pairs())).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_lead_sources(range: &DateRange) -> Result<Vec<ChartSlice>, ApiFailure> {
    http::get_json(&http::with_query("/api/reports/lead-sources", &range.to_pairs())).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_loan_types(range: &DateRange) -> Result<Vec<ChartSlice>, ApiFailure> {
    http::get_json(&http::with_query("/api/reports/loan-types", &range.to_pairs())).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_monthly_trends(months: u32) -> Result<Vec<ChartSlice>, ApiFailure> {
    http::get_json(&http::with_query("/api/reports/monthly-trends", &[("months", months.to_string())])).await
}

/// # Errors
///
/// Returns the mapped `ApiFailure`.
pub async fn fetch_top_products(limit: u32) -> Result<Vec<TopProduct>, ApiFailure> {
    http::get_json(&http::with_query("/api/reports/top-products", &[("limit", limit.to_string())])).await
}
