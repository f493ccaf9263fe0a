#![warn(missing_docs)]
//! Greeting handlers for AWS Lambda behind API Gateway or an ALB.
//!
//! Two handlers live here:
//!
//! * [`hello_ip`] greets the caller by source IP, or the world when the
//!   event carries no address.
//! * [`hello_delegated`] ignores the request and serves whatever a
//!   [`GreetingSource`] returns.
//!
//! Both always answer `200`, in the response shape the event source
//! expects. The binaries `hello-ip` and `hello-delegated` register them with
//! the runtime.
//!
//! ```rust,no_run
//! use greeting::{hello_ip, lambda, logging, service_fn, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     logging::init();
//!     lambda::run(service_fn(hello_ip)).await
//! }
//! ```

pub use lambda_runtime::{self as lambda, service_fn, Context, Error, LambdaEvent};

pub mod handler;
pub mod logging;
pub mod request;
pub mod response;
pub mod source;

pub use crate::{
    handler::{greet_caller, greet_from, hello_delegated, hello_ip},
    request::{LambdaRequest, RequestOrigin},
    response::{Greeting, LambdaResponse},
    source::{FixedGreeting, GreetingSource},
};
