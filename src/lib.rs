//! # request-params
//!
//! URL query-string construction and body transform helpers for HTTP clients.
//!
//! ## Quick Start
//!
//! ### Building a request URL
//!
//! ```
//! use request_params::{build_url, Params};
//!
//! fn run() {
//!     let mut params = Params::new();
//!     params.insert("a", 1);
//!     params.insert("foo", vec!["bar", "baz"]);
//!     let url = build_url("/base/get", &params).unwrap();
//!     assert_eq!(url, "/base/get?a=1&foo[]=bar&foo[]=baz");
//! }
//! ```
//!
//! Keys are emitted in insertion order. Dates are serialized as UTC ISO-8601,
//! JSON objects as their JSON form, and the characters `@ : $ , [ ]` are left
//! unescaped in the result, with spaces emitted as `+`.
//!
//! ### Transforming bodies
//!
//! ```
//! use request_params::transform::{transform_request, transform_response};
//! use serde_json::json;
//!
//! fn run() {
//!     let wire = transform_request(json!({"bar": "baz"})).unwrap();
//!     assert_eq!(wire, json!(r#"{"bar":"baz"}"#));
//!     assert_eq!(transform_response(wire), json!({"bar": "baz"}));
//! }
//! ```

pub mod param;
pub mod transform;
pub mod url;

pub use param::{ParamValue, Params};
pub use url::build_url;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A parameter or body object could not be serialized to JSON.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// A date parameter could not be formatted.
    #[error(transparent)]
    DateFormat(#[from] time::error::Format),
}
