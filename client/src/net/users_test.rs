use super::*;
use crate::net::fake::FakeTransport;
use crate::net::http::Method;
use records::UserRole;

#[test]
fn me_decodes_admin_role() {
    let transport = FakeTransport::new();
    transport.respond_json(
        200,
        serde_json::json!({ "id": 7, "email": "admin@marito.example", "first_name": "Thandi", "role": "admin" }),
    );

    let user = futures::executor::block_on(me(&transport, "tok")).unwrap();
    assert_eq!(user.id, "7");
    assert_eq!(user.role, UserRole::Admin);
    assert!(user.is_admin());

    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Get);
    assert!(req.url.ends_with("/api/v1/users/me"));
    assert_eq!(req.bearer.as_deref(), Some("tok"));
}

#[test]
fn update_profile_sends_only_changed_fields() {
    let transport = FakeTransport::new();
    transport.respond_json(200, serde_json::json!({ "id": "7", "email": "t@marito.example", "last_name": "Nkosi" }));

    let update = ProfileUpdate { last_name: Some("Nkosi".to_owned()), ..ProfileUpdate::default() };
    let user = futures::executor::block_on(update_profile(&transport, "tok", &update)).unwrap();
    assert_eq!(user.last_name.as_deref(), Some("Nkosi"));

    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.body, Some(serde_json::json!({ "last_name": "Nkosi" })));
}

#[test]
fn forbidden_maps_to_unauthorized() {
    let transport = FakeTransport::new();
    transport.respond(403, r#"{"detail":"Forbidden"}"#);
    let err = futures::executor::block_on(me(&transport, "tok")).unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { status: 403 });
}
