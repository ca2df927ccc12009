//! [`TableStore`] over a PostgREST-style HTTP API.

use super::{StoreError, TableStore};
use crate::config::StoreConfig;
use crate::model::{MenuItem, Order, OrderCreate, OrderId, OrderLine};
use async_trait::async_trait;
use reqwest::{Client, Method, Request, RequestBuilder, Response, StatusCode};
use tracing::{debug, instrument};

const MENU_TABLE: &str = "menu_items";
const ORDERS_TABLE: &str = "orders";
const ORDER_ITEMS_TABLE: &str = "order_items";

#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Request against `table` carrying the key headers.
    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let mut request = self.client.request(method, self.table_url(table));
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }
        request
    }

    fn menu_request(&self) -> Result<Request, StoreError> {
        Ok(self
            .request(Method::GET, MENU_TABLE)
            .query(&[
                ("select", "*"),
                ("is_available", "eq.true"),
                ("order", "category.asc"),
            ])
            .build()?)
    }

    fn insert_order_request(&self, order: &OrderCreate) -> Result<Request, StoreError> {
        Ok(self
            .request(Method::POST, ORDERS_TABLE)
            .header("Prefer", "return=representation")
            .json(order)
            .build()?)
    }

    fn insert_lines_request(&self, lines: &[OrderLine]) -> Result<Request, StoreError> {
        Ok(self
            .request(Method::POST, ORDER_ITEMS_TABLE)
            .header("Prefer", "return=minimal")
            .json(lines)
            .build()?)
    }

    fn delete_order_request(&self, id: &OrderId) -> Result<Request, StoreError> {
        let filter = format!("eq.{id}");
        Ok(self
            .request(Method::DELETE, ORDERS_TABLE)
            .query(&[("id", filter.as_str())])
            .build()?)
    }

    async fn send(&self, request: Request) -> Result<Response, StoreError> {
        debug!(method = %request.method(), url = %request.url(), "Sending request");
        let response = self.client.execute(request).await?;
        Self::check_status(response).await
    }

    /// Maps non-success statuses onto [`StoreError`].
    async fn check_status(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(StoreError::Unauthorized),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound(text)),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                Err(StoreError::Rejected(text))
            }
            _ => Err(StoreError::Internal(format!("{status}: {text}"))),
        }
    }
}

#[async_trait]
impl TableStore for RestStore {
    #[instrument(skip(self))]
    async fn fetch_available_menu(&self) -> Result<Vec<MenuItem>, StoreError> {
        let response = self.send(self.menu_request()?).await?;
        let items: Vec<MenuItem> = response.json().await?;
        debug!(count = items.len(), "Menu fetched");
        Ok(items)
    }

    #[instrument(skip(self, order))]
    async fn insert_order(&self, order: OrderCreate) -> Result<Order, StoreError> {
        let response = self.send(self.insert_order_request(&order)?).await?;
        let body = response.text().await?;
        parse_inserted_order(&body)
    }

    #[instrument(skip(self, lines), fields(count = lines.len()))]
    async fn insert_order_lines(&self, lines: Vec<OrderLine>) -> Result<(), StoreError> {
        if lines.is_empty() {
            return Ok(());
        }
        self.send(self.insert_lines_request(&lines)?).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_order(&self, id: &OrderId) -> Result<(), StoreError> {
        self.send(self.delete_order_request(id)?).await?;
        Ok(())
    }
}

/// `return=representation` answers with an array holding the inserted row.
fn parse_inserted_order(body: &str) -> Result<Order, StoreError> {
    let rows: Vec<Order> = serde_json::from_str(body)?;
    rows.into_iter()
        .next()
        .ok_or(StoreError::MissingRow(ORDERS_TABLE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ORDER_PLACED, PAYMENT_CONFIRMED};

    fn store() -> RestStore {
        let config = StoreConfig::new("https://kitchen.example.co/").with_api_key("anon-key");
        RestStore::new(&config).unwrap()
    }

    #[test]
    fn test_menu_request_filters_available_rows() {
        let request = store().menu_request().unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://kitchen.example.co/rest/v1/menu_items?select=*&is_available=eq.true&order=category.asc"
        );
        assert_eq!(request.headers()["apikey"], "anon-key");
        assert_eq!(request.headers()["authorization"], "Bearer anon-key");
    }

    #[test]
    fn test_insert_order_request_asks_for_the_row() {
        let order = OrderCreate {
            customer_name: "Asha".into(),
            customer_phone: "9800000000".into(),
            customer_address: "12 Lake Road".into(),
            total_amount: 260.0,
            payment_status: PAYMENT_CONFIRMED.into(),
            order_status: ORDER_PLACED.into(),
            utr_number: Some("123456789012".into()),
        };
        let request = store().insert_order_request(&order).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://kitchen.example.co/rest/v1/orders"
        );
        assert_eq!(request.headers()["prefer"], "return=representation");
        assert_eq!(request.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_delete_request_filters_by_id() {
        let request = store()
            .delete_order_request(&OrderId::from("7f3a"))
            .unwrap();

        assert_eq!(request.method(), &Method::DELETE);
        assert_eq!(
            request.url().as_str(),
            "https://kitchen.example.co/rest/v1/orders?id=eq.7f3a"
        );
    }

    #[test]
    fn test_without_key_no_auth_headers() {
        let store = RestStore::new(&StoreConfig::new("https://kitchen.example.co")).unwrap();
        let request = store.menu_request().unwrap();
        assert!(request.headers().get("apikey").is_none());
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_parse_inserted_order() {
        let body = r#"[{
            "id": "7f3a",
            "customer_name": "Asha",
            "customer_phone": "9800000000",
            "customer_address": "12 Lake Road",
            "total_amount": 260,
            "payment_status": "confirmed",
            "order_status": "placed",
            "utr_number": "123456789012",
            "created_at": "2026-02-01T10:00:00+00:00"
        }]"#;

        let order = parse_inserted_order(body).unwrap();
        assert_eq!(order.id, OrderId::from("7f3a"));
        assert_eq!(order.total_amount, 260.0);
        assert!(order.created_at.is_some());
        assert!(order.lines.is_empty());
    }

    #[test]
    fn test_empty_insert_response_is_missing_row() {
        assert!(matches!(
            parse_inserted_order("[]"),
            Err(StoreError::MissingRow("orders"))
        ));
    }
}
