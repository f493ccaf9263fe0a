use greeting::{hello_delegated, lambda, logging, service_fn, Error, FixedGreeting};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    // built once, shared by every invocation for the life of the process
    let source = FixedGreeting::default();
    let source = &source;

    lambda::run(service_fn(move |event| hello_delegated(source, event))).await
}
