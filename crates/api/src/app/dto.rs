//! Request/response DTOs and JSON mapping helpers.

use serde::{Deserialize, Serialize};

use gestmat_auth::User;
use gestmat_core::listing::Page;
use gestmat_directory::Direction;
use gestmat_inventory::Material;
use gestmat_notifications::Notification;
use gestmat_requests::MaterialRequest;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UsersListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub role: Option<String>,
}

/// Materials accept `search`/`category`/`status` for wire compatibility,
/// but the backend this mock mirrors never applies them.
#[derive(Debug, Deserialize)]
pub struct MaterialsListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Requests accept `status`/`requester_id` for wire compatibility, but the
/// backend this mock mirrors never applies them.
#[derive(Debug, Deserialize)]
pub struct RequestsListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub requester_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NotificationsListQuery {
    pub read: Option<bool>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Dashboard counters. All values are fixed; nothing is computed from the
/// fixture data (including the low-stock figure).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsResponse {
    pub requests_total: u64,
    pub requests_pending: u64,
    pub materials_total: u64,
    pub materials_low_stock: u64,
    pub pending_validations: u64,
    pub notifications_unread: u64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn page_to_json<T>(
    page: Page<T>,
    to_json: impl Fn(T) -> serde_json::Value,
) -> serde_json::Value {
    serde_json::json!({
        "data": page.data.into_iter().map(to_json).collect::<Vec<_>>(),
        "meta": page.meta,
    })
}

pub fn user_to_json(user: User) -> serde_json::Value {
    serde_json::json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
        "direction_id": user.direction_id,
        "active": user.active,
        "created_at": user.created_at,
        "updated_at": user.updated_at,
    })
}

pub fn direction_to_json(direction: Direction) -> serde_json::Value {
    serde_json::json!({
        "id": direction.id,
        "name": direction.name,
        "code": direction.code,
        "level": direction.level,
        "parent_id": direction.parent_id,
    })
}

pub fn material_to_json(material: Material) -> serde_json::Value {
    serde_json::json!({
        "id": material.id,
        "name": material.name,
        "code": material.code,
        "category": material.category,
        "unit": material.unit,
        "stock_quantity": material.stock_quantity,
        "min_threshold": material.min_threshold,
        "max_threshold": material.max_threshold,
        "unit_price": material.unit_price,
        "status": material.status,
        "supplier": material.supplier,
    })
}

pub fn request_to_json(request: MaterialRequest) -> serde_json::Value {
    serde_json::json!({
        "id": request.id,
        "request_number": request.request_number,
        "requester_id": request.requester_id,
        "status": request.status,
        "priority": request.priority,
        "justification": request.justification,
        "created_at": request.created_at,
    })
}

pub fn notification_to_json(notification: Notification) -> serde_json::Value {
    serde_json::json!({
        "id": notification.id,
        "user_id": notification.user_id,
        "type": notification.kind,
        "title": notification.title,
        "message": notification.message,
        "data": notification.data,
        "read": notification.read,
        "created_at": notification.created_at,
    })
}
