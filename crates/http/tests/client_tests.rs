//! Integration tests for the FISCAMOTO HTTP client

use fiscamoto_core::{EntityId, LicenseForm};
use fiscamoto_http::types::{ListQuery, SigninRequest};
use fiscamoto_http::{ClientBuilder, ClientError, SessionEvent};
use futures::channel::mpsc;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn license_form() -> LicenseForm {
    LicenseForm {
        license_number: "Q40123456".into(),
        category: "A-IIa".into(),
        issue_date: "2023-03-01".into(),
        expiry_date: "2028-03-01".into(),
        restrictions: "Lentes".into(),
    }
}

#[tokio::test]
async fn test_builder_requires_base_url() {
    let result = ClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_builder_rejects_empty_token() {
    let result = ClientBuilder::new()
        .base_url("http://localhost:3000")
        .build_authenticated("");
    assert!(matches!(result, Err(ClientError::NotAuthenticated)));
}

#[tokio::test]
async fn test_missing_token_emits_one_expired_event() {
    let (tx, mut rx) = mpsc::unbounded();
    let result = ClientBuilder::new()
        .base_url("http://localhost:3000")
        .session_events(tx)
        .build_authenticated("");

    assert!(matches!(result, Err(ClientError::NotAuthenticated)));
    assert_eq!(rx.try_next().unwrap(), Some(SessionEvent::Expired));
    assert_eq!(rx.try_next().unwrap(), None);
}

#[tokio::test]
async fn test_builder_trims_trailing_slash() {
    let client = ClientBuilder::new()
        .base_url("http://localhost:3000/")
        .build_public()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[tokio::test]
async fn test_signin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login exitoso",
            "token": "jwt-token",
            "user": {"id": 1, "username": "admin"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let response = client
        .signin(&SigninRequest {
            username: "admin".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "jwt-token");
    assert_eq!(response.user.id.as_str(), "1");
    assert_eq!(response.user.username, "admin");
}

#[tokio::test]
async fn test_signin_failure_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Credenciales inválidas"})),
        )
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let err = client
        .signin(&SigninRequest {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Error"), "Credenciales inválidas");
}

#[tokio::test]
async fn test_signin_rejection_without_body_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signin"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let err = client
        .signin(&SigninRequest {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::AuthenticationFailed(ref m) if m.is_empty()));
    assert_eq!(
        err.signin_message("Usuario o contraseña incorrectos."),
        "Usuario o contraseña incorrectos."
    );
}

#[tokio::test]
async fn test_undecodable_success_body_is_not_a_connection_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let err = client.current_user().await.unwrap_err();

    assert!(matches!(err, ClientError::Request(ref e) if e.is_decode()));
    assert_eq!(
        err.user_message("No se pudo cargar el perfil"),
        "No se pudo cargar el perfil"
    );
}

#[tokio::test]
async fn test_unreachable_server_reports_connection_error() {
    let client = ClientBuilder::new()
        .base_url("http://127.0.0.1:9")
        .build_authenticated("tok")
        .unwrap();

    let err = client.verify().await.unwrap_err();

    assert!(matches!(err, ClientError::Request(_)));
    assert_eq!(
        err.user_message("No se pudo verificar"),
        "No se pudo conectar con el servidor."
    );
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"valid": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok-123")
        .unwrap();

    assert!(client.verify().await.is_ok());
}

#[tokio::test]
async fn test_unauthorized_emits_one_expired_event() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expirado"})))
        .mount(&mock_server)
        .await;

    let (tx, mut rx) = mpsc::unbounded();
    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .session_events(tx)
        .build_authenticated("stale")
        .unwrap();

    let err = client.verify().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(ref m) if m == "Token expirado"));

    drop(client);
    assert_eq!(rx.try_next().unwrap(), Some(SessionEvent::Expired));
    assert_eq!(rx.try_next().unwrap(), None);
}

#[tokio::test]
async fn test_business_errors_do_not_emit_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/conductores/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let (tx, mut rx) = mpsc::unbounded();
    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .session_events(tx)
        .build_authenticated("tok")
        .unwrap();

    let err = client.delete_driver(&EntityId::from("9")).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    drop(client);
    assert_eq!(rx.try_next().unwrap(), None);
}

#[tokio::test]
async fn test_current_user_accepts_wrapped_profile() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 5, "name": "Marta", "email": "marta@x.pe", "role": "admin"}
        })))
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let profile = client.current_user().await.unwrap();
    assert_eq!(profile.name.as_deref(), Some("Marta"));
    assert_eq!(profile.role.as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_list_drivers_sends_pagination_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conductores"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "20"))
        .and(query_param("search", "quispe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 31,
                "firstName": "Ana",
                "lastName": "Quispe",
                "documentNumber": "44556677"
            }],
            "pagination": {
                "currentPage": 2,
                "limit": 20,
                "totalItems": 21,
                "totalPages": 2,
                "hasNext": false,
                "hasPrev": true
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let page = client
        .list_drivers(&ListQuery::new(2, 20).search(" quispe "))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].full_name(), "Ana Quispe");
    assert!(page.pagination.has_prev);
    assert!(!page.pagination.has_next);
}

#[tokio::test]
async fn test_create_license_merges_conductor_id_in_one_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/licenses"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({
            "conductorId": "77",
            "licenseNumber": "Q40123456",
            "category": "A-IIa",
            "issueDate": "2023-03-01",
            "expiryDate": "2028-03-01",
            "restrictions": "Lentes"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Licencia registrada",
            "data": {"id": 500}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let request = license_form().into_request(EntityId::from("77")).unwrap();
    let response = client.create_license(&request).await.unwrap();

    assert_eq!(response.message.as_deref(), Some("Licencia registrada"));
}

#[tokio::test]
async fn test_duplicate_license_reports_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/licenses"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"message": "El número de licencia ya existe"})),
        )
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let request = license_form().into_request(EntityId::from("77")).unwrap();
    let err = client.create_license(&request).await.unwrap_err();

    assert!(matches!(err, ClientError::Conflict(_)));
    assert_eq!(
        err.user_message("No se pudo registrar la licencia"),
        "El número de licencia ya existe"
    );
}

#[tokio::test]
async fn test_driver_licenses_accepts_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/conductores/77/licenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "conductorId": 77,
            "licenseNumber": "Q1",
            "category": "A-I",
            "issueDate": "2020-01-01",
            "expiryDate": "2025-01-01"
        }])))
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    let licenses = client
        .driver_licenses(&EntityId::from("77"))
        .await
        .unwrap();
    assert_eq!(licenses.len(), 1);
    assert_eq!(licenses[0].conductor_id.as_str(), "77");
}

#[tokio::test]
async fn test_delete_license_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/licenses/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("tok")
        .unwrap();

    assert!(client.delete_license(&EntityId::from("3")).await.is_ok());
}
