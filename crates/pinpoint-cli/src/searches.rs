//! The hardcoded search plan.
//!
//! Edited in place when new debugging targets are needed. Paths are
//! relative to the working directory; keywords are literal substrings.

use pinpoint_core::{SearchPlan, SearchRequest};

/// Builds the fixed mapping of source files to the keywords to locate.
pub fn default_plan() -> SearchPlan {
    SearchPlan::new()
        .with_request(SearchRequest::new(
            "frontend/src/pages/admin/AdminMenuManagement.js",
            &["admin-search-bar", "file-field__trigger"],
        ))
        .with_request(SearchRequest::new(
            "backend/src/main/java/com/restaurant/entity/MenuItem.java",
            &["columnDefinition = \"TEXT\""],
        ))
        .with_request(SearchRequest::new(
            "frontend/src/pages/admin/AdminOrders.js",
            &["const fetchOrders", "Refresh Data"],
        ))
        .with_request(SearchRequest::new(
            "frontend/src/pages/admin/AdminReservations.js",
            &["const fetchReservations", "Refresh Data"],
        ))
        .with_request(SearchRequest::new(
            "frontend/src/pages/Payments.js",
            &["className=\"payments-page\"", "summary-row total"],
        ))
        .with_request(SearchRequest::new(
            "frontend/src/pages/Home.css",
            &[".hero-buttons .btn"],
        ))
        .with_request(SearchRequest::new(
            "frontend/src/pages/Menu.css",
            &[".search-bar"],
        ))
        .with_request(SearchRequest::new(
            "frontend/src/pages/Reservations.css",
            &[".page-header"],
        ))
}
