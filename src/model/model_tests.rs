use std::str::FromStr;

use serde_json::json;

use super::*;

#[test]
fn user_parses_backend_payload() {
    let payload = json!({
        "id": 42,
        "employee_code": "EMP-042",
        "name": "Ayesha Rahman",
        "email": "ayesha.rahman@company.com",
        "phone": null,
        "role": "employee",
        "branch_id": 3,
        "is_active": true
    });

    let user: User = serde_json::from_value(payload).unwrap();
    assert_eq!(user.role, Role::Employee);
    assert_eq!(user.employee_code, "EMP-042");
    assert!(user.phone.is_none());
}

#[test]
fn attendance_record_parses_with_nested_location() {
    let payload = json!({
        "id": 7,
        "user_id": 42,
        "date": "2026-08-03",
        "check_in": "2026-08-03T09:02:11Z",
        "check_out": null,
        "check_in_location": { "latitude": 23.7806, "longitude": 90.4070 },
        "check_out_location": null,
        "status": "late"
    });

    let record: AttendanceRecord = serde_json::from_value(payload).unwrap();
    assert_eq!(record.status, AttendanceStatus::Late);
    assert!(record.check_out.is_none());
    let location = record.check_in_location.unwrap();
    assert!((location.latitude - 23.7806).abs() < f64::EPSILON);
}

#[test]
fn branch_parses_with_geofence() {
    let payload = json!({
        "id": 3,
        "name": "Gulshan HQ",
        "address": "House 5, Road 32, Gulshan 1, Dhaka",
        "geofence": {
            "center": { "latitude": 23.7806, "longitude": 90.4070 },
            "radius_m": 150.0
        }
    });

    let branch: Branch = serde_json::from_value(payload).unwrap();
    assert_eq!(branch.geofence.radius_m, 150.0);
}

#[test]
fn leave_enums_map_to_wire_strings() {
    assert_eq!(LeaveType::Sick.to_string(), "sick");
    assert_eq!(LeaveType::from_str("annual").unwrap(), LeaveType::Annual);
    assert_eq!(LeaveStatus::Pending.to_string(), "pending");
    assert!(LeaveType::from_str("maternity").is_err());

    let request: LeaveRequest = serde_json::from_value(json!({
        "id": 11,
        "user_id": 42,
        "start_date": "2026-08-10",
        "end_date": "2026-08-12",
        "leave_type": "sick",
        "reason": "flu",
        "status": "pending",
        "created_at": "2026-08-05T14:00:00Z"
    }))
    .unwrap();
    assert_eq!(request.leave_type, LeaveType::Sick);
    assert_eq!(request.status, LeaveStatus::Pending);
}

#[test]
fn activity_kind_uses_snake_case() {
    let activity: Activity = serde_json::from_value(json!({
        "id": 1,
        "user_id": 42,
        "kind": "leave_approved",
        "description": "Sick leave approved by HR",
        "timestamp": "2026-08-06T10:30:00Z"
    }))
    .unwrap();
    assert_eq!(activity.kind, ActivityKind::LeaveApproved);
    assert_eq!(activity.kind.to_string(), "leave_approved");
}
