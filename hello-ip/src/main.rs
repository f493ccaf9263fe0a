use greeting::{hello_ip, lambda, logging, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    lambda::run(service_fn(hello_ip)).await
}
