//! The two greeting handlers and their Lambda runtime adapters.
use lambda_runtime::{Error, LambdaEvent};
use tracing::debug;

use crate::{
    request::LambdaRequest,
    response::{Greeting, LambdaResponse},
    source::GreetingSource,
};

/// Body served when the caller's address is unknown
pub const ANONYMOUS_GREETING: &str = "Hello, world!\n";

/// Greet the caller by source IP, or the world when there is none.
pub fn greet_caller(request: &LambdaRequest) -> Greeting {
    match request.source_ip() {
        Some(ip) => Greeting::new(format!("Hello, {}!\n", ip)),
        None => Greeting::new(ANONYMOUS_GREETING),
    }
}

/// Greet with whatever `source` returns. The request plays no part.
pub fn greet_from<S>(source: &S) -> Greeting
where
    S: GreetingSource + ?Sized,
{
    Greeting::new(source.greeting())
}

/// Runtime entry point for the IP-echo variant
pub async fn hello_ip(event: LambdaEvent<LambdaRequest>) -> Result<LambdaResponse, Error> {
    let (request, context) = event.into_parts();
    let origin = request.request_origin();
    debug!(
        request_id = %context.request_id,
        ?origin,
        source_ip = request.source_ip().unwrap_or_default(),
        "greeting caller"
    );

    Ok(LambdaResponse::from_greeting(origin, greet_caller(&request)))
}

/// Runtime entry point for the delegated variant
///
/// `source` is borrowed so the bootstrap can build it once and share it
/// across invocations:
///
/// ```rust,no_run
/// use greeting::{hello_delegated, lambda, service_fn, Error, FixedGreeting};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Error> {
///     let source = FixedGreeting::default();
///     let source = &source;
///     lambda::run(service_fn(move |event| hello_delegated(source, event))).await
/// }
/// ```
pub async fn hello_delegated<S>(source: &S, event: LambdaEvent<LambdaRequest>) -> Result<LambdaResponse, Error>
where
    S: GreetingSource + ?Sized,
{
    let (request, context) = event.into_parts();
    let origin = request.request_origin();
    debug!(request_id = %context.request_id, ?origin, "greeting from source");

    Ok(LambdaResponse::from_greeting(origin, greet_from(source)))
}
