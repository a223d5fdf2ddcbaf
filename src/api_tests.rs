use serde_json::json;

use super::*;
use crate::model::{LeaveRequest, User};

#[test]
fn success_envelope_parses() {
    let payload = json!({
        "success": true,
        "message": "Checked in successfully",
        "data": {
            "id": 42,
            "employee_code": "EMP-042",
            "name": "Ayesha Rahman",
            "email": "ayesha.rahman@company.com",
            "phone": "+8801712345678",
            "role": "hr",
            "branch_id": 3,
            "is_active": true
        }
    });

    let response: ApiResponse<User> = serde_json::from_value(payload).unwrap();
    assert!(response.success);
    assert_eq!(response.data.unwrap().id, 42);
}

#[test]
fn error_payload_parses_with_and_without_details() {
    let bare: ApiError = serde_json::from_value(json!({
        "error": "Already checked in today"
    }))
    .unwrap();
    assert_eq!(bare.error, "Already checked in today");
    assert!(bare.status.is_none());
    assert!(bare.details.is_empty());

    let detailed: ApiError = serde_json::from_value(json!({
        "error": "Validation failed",
        "status": 422,
        "details": { "end_date": "must not precede start_date" }
    }))
    .unwrap();
    assert_eq!(detailed.status, Some(422));
    assert_eq!(detailed.details["end_date"], "must not precede start_date");
}

#[test]
fn paginated_envelope_parses() {
    let payload = json!({
        "data": [{
            "id": 11,
            "user_id": 42,
            "start_date": "2026-08-10",
            "end_date": "2026-08-12",
            "leave_type": "sick",
            "reason": null,
            "status": "approved",
            "created_at": "2026-08-05T14:00:00Z"
        }],
        "page": 1,
        "per_page": 10,
        "total": 1
    });

    let page: Paginated<LeaveRequest> = serde_json::from_value(payload).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data.len(), 1);
}
