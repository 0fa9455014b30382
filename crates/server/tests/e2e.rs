use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::{self, auth};
use service::auth::service::{AuthConfig, AuthService};
use service::file::catalog_store::CatalogStore;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
    #[allow(dead_code)]
    data_dir: PathBuf,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Isolated temp document + backup dir per test run
    let data_dir = std::env::temp_dir().join(format!("showcase-e2e-{}", Uuid::new_v4()));
    let store = CatalogStore::open(data_dir.join("db.json")).await?;
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&store),
        AuthConfig { jwt_secret: "test-secret".into(), token_hours: 1 },
    ));
    let state = auth::ServerState {
        store,
        auth: auth_service,
        backup_dir: data_dir.join("backups"),
    };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, data_dir })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("reqwest client")
}

async fn login(c: &reqwest::Client, base_url: &str) -> anyhow::Result<()> {
    let res = c
        .post(format!("{}/api/auth", base_url))
        .json(&json!({"password": "admin123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().get("set-cookie").is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_domain_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    login(&c, &app.base_url).await?;

    // Create: id generated, status defaulted, createdAt == updatedAt
    let res = c
        .post(format!("{}/api/domains", app.base_url))
        .json(&json!({"name": "example", "extension": ".com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_str().expect("id assigned").to_string();
    assert!(!id.is_empty());
    assert_eq!(created["status"], "available");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    // Update by body id: patched field changes, the rest stays
    let res = c
        .put(format!("{}/api/domains", app.base_url))
        .json(&json!({"id": id, "status": "sold"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["status"], "sold");
    assert_eq!(updated["name"], "example");
    assert!(updated["updatedAt"].as_i64() >= created["createdAt"].as_i64());

    // Delete, then the listing excludes it
    let res = c
        .delete(format!("{}/api/domains?id={}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["removed"], true);

    let res = c.get(format!("{}/api/domains", app.base_url)).send().await?;
    let listed = res.json::<Vec<serde_json::Value>>().await?;
    assert!(listed.iter().all(|d| d["id"] != json!(id)));

    // Deleting again stays 200 but flags the no-op
    let res = c
        .delete(format!("{}/api/domains?id={}", app.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["removed"], false);

    Ok(())
}

#[tokio::test]
async fn e2e_mutations_require_session() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/domains", app.base_url))
        .json(&json!({"name": "nope", "extension": ".com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    // reads stay public
    let res = c.get(format!("{}/api/domains", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // backup export is not public
    let res = c.get(format!("{}/api/backup", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn e2e_wrong_password_unauthorized() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let res = c
        .post(format!("{}/api/auth", app.base_url))
        .json(&json!({"password": "wrong"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    // credential record is untouched: the right password still works
    login(&c, &app.base_url).await?;
    Ok(())
}

#[tokio::test]
async fn e2e_backup_restore_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    login(&c, &app.base_url).await?;

    // Snapshot the pristine document
    let res = c.get(format!("{}/api/backup", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let backup = res.json::<serde_json::Value>().await?;
    assert_eq!(backup["version"], "1.0.0");

    // Mutate: add a friendly link
    let res = c
        .post(format!("{}/api/friendly-links", app.base_url))
        .json(&json!({"name": "检索站", "url": "https://example.com/search"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let link_id = res.json::<serde_json::Value>().await?["id"]
        .as_str()
        .expect("id")
        .to_string();

    // Import stores a snapshot file and history lists it
    let res = c
        .post(format!("{}/api/backup", app.base_url))
        .json(&backup)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let imported = res.json::<serde_json::Value>().await?;
    assert_eq!(imported["success"], true);
    assert!(imported["filename"].as_str().unwrap_or("").ends_with(".json"));

    let res = c
        .get(format!("{}/api/backup/history", app.base_url))
        .send()
        .await?;
    let history = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["items"]["friendlyLinks"], 5);

    // Restore rolls the live document back
    let res = c
        .post(format!("{}/api/restore", app.base_url))
        .json(&backup)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c
        .get(format!("{}/api/friendly-links", app.base_url))
        .send()
        .await?;
    let links = res.json::<Vec<serde_json::Value>>().await?;
    assert!(links.iter().all(|l| l["id"] != json!(link_id)));

    // A payload without a version tag is rejected
    let mut foreign = backup.clone();
    foreign["version"] = json!("");
    let res = c
        .post(format!("{}/api/restore", app.base_url))
        .json(&foreign)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_reset_restores_defaults() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    login(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/works", app.base_url))
        .json(&json!({
            "title": "海报设计",
            "description": "为本地乐队设计的演出海报",
            "imageUrl": "https://example.com/poster.png"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.post(format!("{}/api/reset", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/api/domains", app.base_url)).send().await?;
    let domains = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(domains.len(), 5);

    let res = c.get(format!("{}/api/works", app.base_url)).send().await?;
    let works = res.json::<Vec<serde_json::Value>>().await?;
    assert!(works.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_icon_conflicts_and_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    login(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/registrar-icons", app.base_url))
        .json(&json!({"name": "aliyun", "svg": "<svg/>"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c
        .put(format!("{}/api/registrar-icons", app.base_url))
        .json(&json!({"name": "not-there", "svg": "<svg/>"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c
        .delete(format!("{}/api/registrar-icons?name=not-there", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
