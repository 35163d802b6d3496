use super::*;

// =============================================================
// Backend JSON shapes
// =============================================================

#[test]
fn user_decodes_backend_fields() {
    let user: User = serde_json::from_str(r#"{"_id":"1","email":"a@b.com","isAdmin":false}"#)
        .expect("user json");
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "a@b.com");
    assert!(!user.is_admin);
}

#[test]
fn user_serializes_back_to_backend_fields() {
    // The session store persists the user with the same field names the
    // backend uses, so a stored record decodes with the same struct.
    let user = User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        is_admin: true,
    };
    let json = serde_json::to_value(&user).expect("user value");
    assert_eq!(json["_id"], "1");
    assert_eq!(json["isAdmin"], true);
}

#[test]
fn repair_status_uses_kebab_case_wire_values() {
    for status in RepairStatus::ALL {
        let encoded = serde_json::to_value(status).expect("status value");
        assert_eq!(encoded, status.as_wire());
    }
    let decoded: RepairStatus = serde_json::from_str(r#""in-progress""#).expect("status json");
    assert_eq!(decoded, RepairStatus::InProgress);
}

#[test]
fn repair_request_decodes_camel_case() {
    let repair: RepairRequest = serde_json::from_str(
        r#"{
            "_id": "r-1",
            "userId": "u-1",
            "serviceId": "s-1",
            "status": "pending",
            "description": "cracked screen",
            "estimatedCost": 120.5,
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#,
    )
    .expect("repair json");
    assert_eq!(repair.id, "r-1");
    assert_eq!(repair.user_id, "u-1");
    assert_eq!(repair.status, RepairStatus::Pending);
    assert!((repair.estimated_cost - 120.5).abs() < f64::EPSILON);
}

#[test]
fn populated_repair_decodes_joined_records() {
    let repair: PopulatedRepairRequest = serde_json::from_str(
        r#"{
            "_id": "r-1",
            "userId": {"_id": "u-1", "email": "a@b.com"},
            "serviceId": {"_id": "s-1", "name": "Screen swap", "description": "Front glass", "price": 99.0},
            "status": "in-progress",
            "description": "cracked screen",
            "estimatedCost": 120.5,
            "createdAt": "2024-03-01T10:00:00.000Z"
        }"#,
    )
    .expect("populated repair json");
    assert_eq!(repair.user_id.email, "a@b.com");
    assert_eq!(repair.service_id.name, "Screen swap");
    assert_eq!(repair.status, RepairStatus::InProgress);
}

#[test]
fn service_update_omits_absent_fields() {
    let update = ServiceUpdate {
        price: Some(49.0),
        ..ServiceUpdate::default()
    };
    let json = serde_json::to_value(&update).expect("update value");
    let object = json.as_object().expect("object");
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("price"));
}

#[test]
fn status_update_body_shape() {
    let body = serde_json::to_value(StatusUpdate {
        status: RepairStatus::Completed,
    })
    .expect("status body");
    assert_eq!(body, serde_json::json!({"status": "completed"}));
}

#[test]
fn date_part_strips_the_time_component() {
    assert_eq!(date_part("2024-03-01T10:00:00.000Z"), "2024-03-01");
    assert_eq!(date_part("2024-03-01"), "2024-03-01");
}
