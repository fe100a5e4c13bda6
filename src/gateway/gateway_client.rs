use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::gateway_errors::GatewayError;
use super::gateway_model::{Filter, GatewayConfig};

/// HTTP client for the external record store.
///
/// Speaks the PostgREST-style contract the backend exposes: table-scoped
/// select/insert/update/delete/upsert, with row-level owner scoping enforced
/// server-side. The client only threads owner ids through filters; it never
/// widens a query beyond what the caller asked for.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| GatewayError::Config(format!("invalid api key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.api_key)
                .map_err(|e| GatewayError::Config(format!("invalid api key: {}", e)))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(GatewayError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Fetches the rows of `table` matching `filter`
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filter: &Filter,
    ) -> Result<Vec<T>, GatewayError> {
        let response = self
            .client
            .get(self.table_url(table))
            .query(filter.as_query())
            .send()
            .await?;

        let response = check_status(table, response).await?;
        decode_rows(table, response).await
    }

    /// Inserts `rows` into `table`, returning the stored representation
    pub async fn insert<T, R>(&self, table: &str, rows: &[T]) -> Result<Vec<R>, GatewayError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await?;

        let response = check_status(table, response).await?;
        decode_rows(table, response).await
    }

    /// Applies `patch` to every row of `table` matching `filter`
    pub async fn update<P, R>(
        &self,
        table: &str,
        filter: &Filter,
        patch: &P,
    ) -> Result<Vec<R>, GatewayError>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!("Gateway update on '{}'", table);
        let response = self
            .client
            .patch(self.table_url(table))
            .query(filter.as_query())
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;

        let response = check_status(table, response).await?;
        decode_rows(table, response).await
    }

    /// Deletes the rows of `table` matching `filter`.
    ///
    /// Matching nothing is not an error: the gateway reports success with an
    /// empty result, and callers rely on delete being a no-op for absent rows.
    pub async fn delete(&self, table: &str, filter: &Filter) -> Result<(), GatewayError> {
        debug!("Gateway delete on '{}'", table);
        let response = self
            .client
            .delete(self.table_url(table))
            .query(filter.as_query())
            .send()
            .await?;

        check_status(table, response).await?;
        Ok(())
    }

    /// Inserts `rows`, merging into existing rows on the `on_conflict` key.
    ///
    /// The conflict target makes the call idempotent per key tuple: repeating
    /// an upsert can never create a duplicate row.
    pub async fn upsert<T, R>(
        &self,
        table: &str,
        rows: &[T],
        on_conflict: &[&str],
    ) -> Result<Vec<R>, GatewayError>
    where
        T: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!("Gateway upsert on '{}'", table);
        let response = self
            .client
            .post(self.table_url(table))
            .query(&[("on_conflict", on_conflict.join(","))])
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(rows)
            .send()
            .await?;

        let response = check_status(table, response).await?;
        decode_rows(table, response).await
    }
}

async fn check_status(table: &str, response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response.text().await.unwrap_or_default();
    let detail = detail.chars().take(200).collect::<String>();
    Err(GatewayError::Status {
        table: table.to_string(),
        status,
        detail,
    })
}

async fn decode_rows<R: DeserializeOwned>(
    table: &str,
    response: Response,
) -> Result<Vec<R>, GatewayError> {
    response
        .json::<Vec<R>>()
        .await
        .map_err(|e| GatewayError::Decode {
            table: table.to_string(),
            detail: e.to_string(),
        })
}
