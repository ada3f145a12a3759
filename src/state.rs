//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only carries the inventory store; every request is a stateless
//! read or write against it.

use std::sync::Arc;

use crate::services::inventory::InventoryStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::services::inventory::{
        InventoryError, NewProduct, OrderRow, PaymentRow, Product, ProductUpdate, StockRow, UserRow,
    };

    /// In-memory store seeded by tests. `fail` makes every call return a
    /// database error.
    #[derive(Default)]
    pub struct MemoryInventory {
        pub products: Mutex<Vec<Product>>,
        pub stock: Vec<StockRow>,
        pub orders: Vec<OrderRow>,
        pub payments: Vec<PaymentRow>,
        pub users: Vec<UserRow>,
        pub fail: bool,
    }

    impl MemoryInventory {
        fn check(&self) -> Result<(), InventoryError> {
            if self.fail {
                return Err(InventoryError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl InventoryStore for MemoryInventory {
        async fn list_products(&self) -> Result<Vec<Product>, InventoryError> {
            self.check()?;
            Ok(self.products.lock().expect("products mutex should lock").clone())
        }

        async fn create_product(&self, product: &NewProduct) -> Result<i32, InventoryError> {
            self.check()?;
            let mut products = self.products.lock().expect("products mutex should lock");
            let id = products.iter().map(|p| p.product_id).max().unwrap_or(0) + 1;
            products.push(Product {
                product_id: id,
                product_name: product.product_name.clone(),
                company_name: product.company_name.clone(),
                device_type: product.device_type.clone(),
                base_price: product.base_price.clone(),
            });
            Ok(id)
        }

        async fn get_product(&self, product_id: i32) -> Result<Product, InventoryError> {
            self.check()?;
            let products = self.products.lock().expect("products mutex should lock");
            products
                .iter()
                .find(|p| p.product_id == product_id)
                .cloned()
                .ok_or(InventoryError::NotFound(product_id))
        }

        async fn update_product(&self, product_id: i32, update: &ProductUpdate) -> Result<Product, InventoryError> {
            self.check()?;
            let mut products = self.products.lock().expect("products mutex should lock");
            let product = products
                .iter_mut()
                .find(|p| p.product_id == product_id)
                .ok_or(InventoryError::NotFound(product_id))?;
            if let Some(name) = &update.product_name {
                product.product_name.clone_from(name);
            }
            if let Some(company) = &update.company_name {
                product.company_name.clone_from(company);
            }
            if let Some(kind) = &update.device_type {
                product.device_type.clone_from(kind);
            }
            if let Some(price) = &update.base_price {
                price.trim().clone_into(&mut product.base_price);
            }
            Ok(product.clone())
        }

        async fn delete_product(&self, product_id: i32) -> Result<(), InventoryError> {
            self.check()?;
            let mut products = self.products.lock().expect("products mutex should lock");
            let before = products.len();
            products.retain(|p| p.product_id != product_id);
            if products.len() == before {
                return Err(InventoryError::NotFound(product_id));
            }
            Ok(())
        }

        async fn list_stock(&self) -> Result<Vec<StockRow>, InventoryError> {
            self.check()?;
            Ok(self.stock.clone())
        }

        async fn list_orders(&self) -> Result<Vec<OrderRow>, InventoryError> {
            self.check()?;
            Ok(self.orders.clone())
        }

        async fn list_payments(&self) -> Result<Vec<PaymentRow>, InventoryError> {
            self.check()?;
            Ok(self.payments.clone())
        }

        async fn list_users(&self, email: Option<&str>) -> Result<Vec<UserRow>, InventoryError> {
            self.check()?;
            Ok(self
                .users
                .iter()
                .filter(|u| email.is_none_or(|e| u.email == e))
                .cloned()
                .collect())
        }
    }

    #[must_use]
    pub fn test_app_state(store: MemoryInventory) -> AppState {
        AppState::new(Arc::new(store))
    }

    #[must_use]
    pub fn stock_row(id: i32, name: &str, quantity: i32, price: &str, location: &str) -> StockRow {
        StockRow {
            stock_id: id,
            product_name: name.to_owned(),
            quantity,
            price_per_unit: price.to_owned(),
            order_date: None,
            shipped_date: None,
            received_date: None,
            warranty_start_date: None,
            warranty_end_date: None,
            place_location: location.to_owned(),
        }
    }

    #[must_use]
    pub fn product(id: i32, name: &str, price: &str) -> Product {
        Product {
            product_id: id,
            product_name: name.to_owned(),
            company_name: "Acme".to_owned(),
            device_type: "Sensor".to_owned(),
            base_price: price.to_owned(),
        }
    }

    #[must_use]
    pub fn order_row(id: i32, product: &str, ordered_by: &str, date: &str, status: &str) -> OrderRow {
        OrderRow {
            order_id: id,
            ordered_by: ordered_by.to_owned(),
            product_name: product.to_owned(),
            order_date: date.to_owned(),
            delivery_status: status.to_owned(),
        }
    }

    #[must_use]
    pub fn payment_row(id: i32, order_id: i32, amount: &str, status: &str, date: &str) -> PaymentRow {
        PaymentRow {
            payment_id: id,
            order_id,
            amount: amount.to_owned(),
            status: status.to_owned(),
            date: date.to_owned(),
        }
    }

    #[must_use]
    pub fn user_row(id: i32, name: &str, email: &str, role: &str) -> UserRow {
        UserRow { user_id: id, name: name.to_owned(), email: email.to_owned(), role: role.to_owned() }
    }
}
