#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use fishlog_api::app::{build_router, AppState};
use fishlog_api::config::AppConfig;
use fishlog_api::database::{DatabaseManager, Stores};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use reqwest::{RequestBuilder, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

/// The real router over fresh in-memory stores, served on a free local port.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::development();
        config.server.port = port;
        config.api.enable_request_logging = false;

        let state = AppState::new(config, Stores::in_memory())?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, build_router(state)).await;
        });

        let server = Self {
            port,
            base_url,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, token: &str, path: &str) -> RequestBuilder {
        self.client.get(self.url(path)).bearer_auth(token)
    }

    pub fn post(&self, token: &str, path: &str, body: Value) -> RequestBuilder {
        self.client.post(self.url(path)).bearer_auth(token).json(&body)
    }

    pub fn put(&self, token: &str, path: &str, body: Value) -> RequestBuilder {
        self.client.put(self.url(path)).bearer_auth(token).json(&body)
    }

    pub fn delete(&self, token: &str, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path)).bearer_auth(token)
    }

    pub async fn create_account(&self, email: &str) -> Result<Uuid> {
        let res = self
            .client
            .post(self.url("/api/accounts"))
            .json(&json!({ "email": email, "firstName": "Test", "lastName": "Angler" }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "account create returned {}", res.status());
        let body: Value = res.json().await?;
        id_of(&body)
    }

    pub async fn token_for(&self, account_id: Uuid) -> Result<String> {
        let res = self
            .client
            .post(self.url("/api/auth/token"))
            .json(&json!({ "accountId": account_id }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "token request returned {}", res.status());
        let body: Value = res.json().await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .context("token missing from response")
    }

    /// A new account and a bearer token for it.
    pub async fn sign_up(&self, email: &str) -> Result<(Uuid, String)> {
        let account_id = self.create_account(email).await?;
        let token = self.token_for(account_id).await?;
        Ok((account_id, token))
    }

    pub async fn create_report(&self, token: &str, body: Value) -> Result<Uuid> {
        let res = self.post(token, "/api/fishingreports", body).send().await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "report create returned {}", res.status());
        id_of(&res.json().await?)
    }
}

pub fn id_of(body: &Value) -> Result<Uuid> {
    let id = body["id"].as_str().context("id missing from response")?;
    Ok(id.parse()?)
}

/// A migrated Postgres schema private to one test, dropped by `cleanup`.
pub struct TestDatabase {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDatabase {
    /// `None` when `DATABASE_URL` is unset, so Postgres tests pass as no-ops.
    pub async fn connect() -> Result<Option<Self>> {
        let _ = dotenvy::dotenv();
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                eprintln!("DATABASE_URL not set, skipping Postgres test");
                return Ok(None);
            }
        };

        let admin = PgPoolOptions::new().max_connections(1).connect(&url).await?;
        let schema = format!("fishlog_test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await?;

        let options = url
            .parse::<PgConnectOptions>()?
            .options([("search_path", schema.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;
        DatabaseManager::migrate(&pool).await?;

        Ok(Some(Self { pool, admin, schema }))
    }

    pub fn stores(&self) -> Stores {
        Stores::postgres(self.pool.clone())
    }

    pub async fn cleanup(self) -> Result<()> {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await?;
        Ok(())
    }
}
