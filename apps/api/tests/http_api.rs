//! Black-box HTTP tests: the production router served on an ephemeral
//! port against an in-memory database, exercised with a real client.

use chrono::Utc;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

use stockpile_api::config::ApiConfig;
use stockpile_api::{build_router, AppState};
use stockpile_db::repository::user::hash_password;
use stockpile_db::{Database, DbConfig, UserRecord};

struct TestServer {
    base_url: String,
    db: Database,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Builds the production router over a fresh in-memory database
    /// with one seeded login (admin / admin123).
    async fn spawn() -> Self {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let now = Utc::now();
        db.users()
            .insert(&UserRecord {
                id: Uuid::new_v4().to_string(),
                username: "admin".to_string(),
                password_hash: hash_password("admin123").unwrap(),
                is_active: true,
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap();

        let config = ApiConfig {
            http_port: 0,
            database_path: ":memory:".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_access_lifetime_secs: 600,
            jwt_refresh_lifetime_secs: 3600,
        };

        let app = build_router(AppState::new(db.clone(), &config));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base_url,
            db,
            handle,
        }
    }

    async fn login(&self, client: &reqwest::Client) -> String {
        let res = client
            .post(format!("{}/api/login/", self.base_url))
            .json(&json!({"username": "admin", "password": "admin123"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = res.json().await.unwrap();
        assert!(body["refresh"].as_str().is_some());
        body["access"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn auth_required_for_api_routes() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/inventory/items/", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/login/", srv.base_url))
        .json(&json!({"username": "admin", "password": "wrong"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/api/login/", srv.base_url))
        .json(&json!({"username": "nobody", "password": "admin123"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn item_crud_lifecycle() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = srv.login(&client).await;

    // Create
    let res = client
        .post(format!("{}/api/inventory/items/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Basmati Rice 5kg",
            "sku": "RICE-5",
            "category": "food",
            "quantity": 2,
            "unit": "bag",
            "min_stock_level": 5,
            "price": 12.99
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["price"], 12.99);
    assert_eq!(created["category"], "food");

    // Duplicate SKU is rejected
    let res = client
        .post(format!("{}/api/inventory/items/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({"name": "Other", "sku": "RICE-5", "price": 1.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Low-stock filter finds it (2 <= 5)
    let res = client
        .get(format!(
            "{}/api/inventory/items/?status=low",
            srv.base_url
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let items: serde_json::Value = res.json().await.unwrap();
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["sku"], "RICE-5");

    // Update restocks it
    let res = client
        .put(format!("{}/api/inventory/items/{}/", srv.base_url, id))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Basmati Rice 5kg",
            "sku": "RICE-5",
            "category": "food",
            "quantity": 40,
            "unit": "bag",
            "min_stock_level": 5,
            "price": 12.99
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["quantity"], 40);

    let res = client
        .get(format!(
            "{}/api/inventory/items/?status=low",
            srv.base_url
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let items: serde_json::Value = res.json().await.unwrap();
    assert!(items.as_array().unwrap().is_empty());

    // Delete, then 404
    let res = client
        .delete(format!("{}/api/inventory/items/{}/", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/api/inventory/items/{}/", srv.base_url, id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recording_a_sale_decrements_stock() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = srv.login(&client).await;

    let res = client
        .post(format!("{}/api/inventory/items/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Cola 330ml",
            "sku": "COLA-330",
            "category": "beverage",
            "quantity": 10,
            "unit": "can",
            "min_stock_level": 2,
            "price": 1.50
        }))
        .send()
        .await
        .unwrap();
    let item: serde_json::Value = res.json().await.unwrap();
    let item_id = item["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/api/sales/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "inventory_item": item_id,
            "quantity": 3,
            "total_price": 4.50
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let sale: serde_json::Value = res.json().await.unwrap();
    assert_eq!(sale["quantity"], 3);
    assert_eq!(sale["total_price"], 4.5);
    assert_eq!(sale["category"], "beverage");
    assert_eq!(sale["item_details"]["quantity"], 7);

    // The listing shows it with nested item details.
    let res = client
        .get(format!("{}/api/sales/", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let sales: serde_json::Value = res.json().await.unwrap();
    assert_eq!(sales.as_array().unwrap().len(), 1);
    assert_eq!(sales[0]["item_details"]["sku"], "COLA-330");

    // Unknown item: nothing is written.
    let res = client
        .post(format!("{}/api/sales/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "inventory_item": "no-such-id",
            "quantity": 1,
            "total_price": 1.50
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Non-positive quantity is a validation failure.
    let res = client
        .post(format!("{}/api/sales/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "inventory_item": item_id,
            "quantity": 0,
            "total_price": 0.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_stats_shape() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = srv.login(&client).await;

    client
        .post(format!("{}/api/inventory/items/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Item A1",
            "sku": "A1",
            "quantity": 2,
            "unit": "unit",
            "min_stock_level": 5,
            "price": 10.0
        }))
        .send()
        .await
        .unwrap();

    let res = client
        .get(format!("{}/api/reports/dashboard-stats/", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let stats: serde_json::Value = res.json().await.unwrap();
    assert_eq!(stats["totalItems"], 1);
    assert_eq!(stats["lowStockItems"], 1);
    assert_eq!(stats["totalSuppliers"], 0);
    assert_eq!(stats["totalInventoryValue"], 20.0);
    assert_eq!(stats["lowStockItemsList"][0]["sku"], "A1");
    assert_eq!(stats["lowStockItemsList"][0]["minStockLevel"], 5);
}

#[tokio::test]
async fn sales_report_and_invalid_period() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = srv.login(&client).await;

    // Seed one item and one sale through the API.
    let res = client
        .post(format!("{}/api/inventory/items/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Cola 330ml",
            "sku": "COLA-330",
            "category": "beverage",
            "quantity": 10,
            "unit": "can",
            "price": 1.50
        }))
        .send()
        .await
        .unwrap();
    let item: serde_json::Value = res.json().await.unwrap();

    client
        .post(format!("{}/api/sales/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "inventory_item": item["id"],
            "quantity": 2,
            "total_price": 3.0
        }))
        .send()
        .await
        .unwrap();

    for period in ["daily", "weekly", "monthly"] {
        let res = client
            .get(format!(
                "{}/api/reports/sales-report/?period={}",
                srv.base_url, period
            ))
            .bearer_auth(&token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let report: serde_json::Value = res.json().await.unwrap();
        assert_eq!(report["period"], period);
        assert_eq!(report["summary"]["total_sales"], 3.0);
        assert_eq!(report["summary"]["total_items"], 2);
        assert_eq!(report["summary"]["order_count"], 1);
        assert_eq!(report["chartData"].as_array().unwrap().len(), 1);
        assert_eq!(report["chartData"][0]["value"], 3.0);
    }

    // Fixed error body for anything unrecognized.
    let res = client
        .get(format!(
            "{}/api/reports/sales-report/?period=yearly",
            srv.base_url
        ))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid period"}));
}

#[tokio::test]
async fn daily_summary_splits_categories() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = srv.login(&client).await;

    for (sku, category, price) in [
        ("RICE-5", "food", 10.0),
        ("COLA-330", "beverage", 1.5),
    ] {
        let res = client
            .post(format!("{}/api/inventory/items/", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({
                "name": format!("Item {sku}"),
                "sku": sku,
                "category": category,
                "quantity": 50,
                "unit": "unit",
                "price": price
            }))
            .send()
            .await
            .unwrap();
        let item: serde_json::Value = res.json().await.unwrap();

        client
            .post(format!("{}/api/sales/", srv.base_url))
            .bearer_auth(&token)
            .json(&json!({
                "inventory_item": item["id"],
                "quantity": 2,
                "total_price": price * 2.0
            }))
            .send()
            .await
            .unwrap();
    }

    let res = client
        .get(format!("{}/api/sales/daily_summary/", srv.base_url))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let summary: serde_json::Value = res.json().await.unwrap();
    assert_eq!(summary["food"], 2);
    assert_eq!(summary["beverage"], 2);
    assert_eq!(summary["total_revenue"], 23.0);
}

#[tokio::test]
async fn supplier_delete_detaches_items() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let token = srv.login(&client).await;

    let res = client
        .post(format!("{}/api/suppliers/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Acme Wholesale",
            "email": "orders@acme.example",
            "rating": 4.5
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let supplier: serde_json::Value = res.json().await.unwrap();
    assert_eq!(supplier["status"], "Active");
    let supplier_id = supplier["id"].as_str().unwrap().to_string();

    let res = client
        .post(format!("{}/api/inventory/items/", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Cola 330ml",
            "sku": "COLA-330",
            "supplier": supplier_id,
            "quantity": 10,
            "unit": "can",
            "price": 1.50
        }))
        .send()
        .await
        .unwrap();
    let item: serde_json::Value = res.json().await.unwrap();
    let item_id = item["id"].as_str().unwrap().to_string();
    assert_eq!(item["supplier"], supplier_id.as_str());

    let res = client
        .delete(format!("{}/api/suppliers/{}/", srv.base_url, supplier_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // The item survives with its supplier reference nulled.
    let res = client
        .get(format!("{}/api/inventory/items/{}/", srv.base_url, item_id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let item: serde_json::Value = res.json().await.unwrap();
    assert!(item["supplier"].is_null());

    // The database handle shares the server's pool; cross-check there.
    assert_eq!(srv.db.suppliers().count().await.unwrap(), 0);
}
