//! Add-product form state.
//!
//! One string per input, forwarded verbatim. Only HTTP 201 counts as
//! success; any other status or a transport failure yields a generic message
//! and leaves the inputs as typed.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::net::types::NewProduct;

pub const PRODUCT_ADDED_MESSAGE: &str = "Product added successfully!";
pub const PRODUCT_FAILED_MESSAGE: &str = "Failed to add product.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error.";

const CREATED: u16 = 201;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub product_name: String,
    pub company_name: String,
    pub device_type: String,
    pub base_price: String,
    pub success: String,
    pub error: String,
}

impl ProductForm {
    /// Clear the previous outcome and build the POST body from the inputs.
    pub fn begin_submit(&mut self) -> NewProduct {
        self.success.clear();
        self.error.clear();
        NewProduct {
            product_name: self.product_name.clone(),
            company_name: self.company_name.clone(),
            device_type: self.device_type.clone(),
            base_price: self.base_price.clone(),
        }
    }

    /// Apply the POST outcome: `Ok(status)` for any response, `Err` when the
    /// request never completed.
    pub fn apply_response(&mut self, outcome: Result<u16, String>) {
        match outcome {
            Ok(CREATED) => {
                self.product_name.clear();
                self.company_name.clear();
                self.device_type.clear();
                self.base_price.clear();
                PRODUCT_ADDED_MESSAGE.clone_into(&mut self.success);
            }
            Ok(_) => PRODUCT_FAILED_MESSAGE.clone_into(&mut self.error),
            Err(_) => SERVER_ERROR_MESSAGE.clone_into(&mut self.error),
        }
    }
}
