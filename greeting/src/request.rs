//! ALB and API Gateway request adaptations
//!
//! The handlers only look at one thing in an inbound event: the address of
//! the caller. Each event source carries it in a different place, which is
//! what [`LambdaRequest::source_ip`] hides.
use aws_lambda_events::event::alb::AlbTargetGroupRequest;
use aws_lambda_events::event::apigw::{ApiGatewayProxyRequest, ApiGatewayV2httpRequest};
use http::header::HeaderName;
use serde::Deserialize;
use serde_json::{error::Error as JsonError, Value};
use std::io::Read;

/// Lambda http event from ALB, API Gateway REST and HTTP API proxy
/// integrations
///
/// The order of the variants is notable. Serde will try to deserialize in
/// this order, and only a REST proxy event carries `httpMethod` both at the
/// top level and inside its request context. Anything that matches none of
/// the integrations lands in `Other` and is answered as a REST proxy event.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum LambdaRequest {
    /// API Gateway REST API proxy event
    ApiGatewayV1(ApiGatewayProxyRequest),
    /// API Gateway HTTP API (payload format 2.0) event
    ApiGatewayV2(ApiGatewayV2httpRequest),
    /// Application Load Balancer target group event
    Alb(AlbTargetGroupRequest),
    /// Any other JSON payload, such as a direct invoke or a sparse test event
    Other(Value),
}

impl LambdaRequest {
    /// Return the `RequestOrigin` of the request, so that the response can be
    /// shaped the way that origin expects.
    pub fn request_origin(&self) -> RequestOrigin {
        match self {
            LambdaRequest::ApiGatewayV1 { .. } => RequestOrigin::ApiGatewayV1,
            LambdaRequest::ApiGatewayV2 { .. } => RequestOrigin::ApiGatewayV2,
            LambdaRequest::Alb { .. } => RequestOrigin::Alb,
            LambdaRequest::Other { .. } => RequestOrigin::ApiGatewayV1,
        }
    }

    /// Source IP of the caller, if the event carries a non-empty one.
    ///
    /// ALB events have no identity block, so the left-most
    /// `x-forwarded-for` entry (the original client) is used instead. Other
    /// payloads are read leniently at the REST proxy location
    /// `requestContext.identity.sourceIp`.
    pub fn source_ip(&self) -> Option<&str> {
        let ip = match self {
            LambdaRequest::ApiGatewayV1(ag) => ag.request_context.identity.source_ip.as_deref(),
            LambdaRequest::ApiGatewayV2(ag) => ag.request_context.http.source_ip.as_deref(),
            LambdaRequest::Alb(alb) => alb
                .headers
                .get(x_forwarded_for())
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(str::trim),
            LambdaRequest::Other(value) => value.pointer("/requestContext/identity/sourceIp").and_then(Value::as_str),
        };
        ip.filter(|ip| !ip.is_empty())
    }
}

impl From<ApiGatewayProxyRequest> for LambdaRequest {
    fn from(value: ApiGatewayProxyRequest) -> Self {
        LambdaRequest::ApiGatewayV1(value)
    }
}

impl From<ApiGatewayV2httpRequest> for LambdaRequest {
    fn from(value: ApiGatewayV2httpRequest) -> Self {
        LambdaRequest::ApiGatewayV2(value)
    }
}

impl From<AlbTargetGroupRequest> for LambdaRequest {
    fn from(value: AlbTargetGroupRequest) -> Self {
        LambdaRequest::Alb(value)
    }
}

/// Represents the origin from which the lambda was requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    /// API Gateway proxy request origin
    ApiGatewayV1,
    /// API Gateway v2 request origin
    ApiGatewayV2,
    /// ALB request origin
    Alb,
}

/// Deserializes a `LambdaRequest` from a `Read` impl providing JSON events.
///
/// # Example
///
/// ```rust,no_run
/// use greeting::request::from_reader;
/// use std::fs::File;
/// use std::error::Error;
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let request = from_reader(
///         File::open("path/to/event.json")?
///     )?;
///     Ok(println!("{:?}", request.source_ip()))
/// }
/// ```
pub fn from_reader<R>(rdr: R) -> Result<LambdaRequest, JsonError>
where
    R: Read,
{
    serde_json::from_reader(rdr)
}

/// Deserializes a `LambdaRequest` from a string of JSON text.
///
/// # Example
///
/// ```rust,no_run
/// use greeting::request::from_str;
/// use std::error::Error;
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let request = from_str(
///         r#"{ ...raw json here... }"#
///     )?;
///     Ok(println!("{:?}", request.request_origin()))
/// }
/// ```
pub fn from_str(s: &str) -> Result<LambdaRequest, JsonError> {
    serde_json::from_str(s)
}

fn x_forwarded_for() -> HeaderName {
    HeaderName::from_static("x-forwarded-for")
}

#[cfg(test)]
mod tests {
    use super::{from_reader, from_str, LambdaRequest, RequestOrigin};
    use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;

    const APIGW_PROXY: &str = include_str!("../tests/data/apigw_proxy_request.json");
    const APIGW_V2: &str = include_str!("../tests/data/apigw_v2_request.json");
    const ALB: &str = include_str!("../tests/data/alb_request.json");

    #[test]
    fn deserializes_apigw_proxy_event() {
        let req = from_str(APIGW_PROXY).expect("failed to parse REST event");
        assert_eq!(req.request_origin(), RequestOrigin::ApiGatewayV1);
        assert_eq!(req.source_ip(), Some("203.0.113.7"));
    }

    #[test]
    fn deserializes_apigw_v2_event() {
        let req = from_str(APIGW_V2).expect("failed to parse HTTP API event");
        assert_eq!(req.request_origin(), RequestOrigin::ApiGatewayV2);
        assert_eq!(req.source_ip(), Some("198.51.100.23"));
    }

    #[test]
    fn deserializes_alb_event() {
        let req = from_reader(ALB.as_bytes()).expect("failed to parse ALB event");
        assert_eq!(req.request_origin(), RequestOrigin::Alb);
        // left-most forwarded entry is the client, the rest are proxies
        assert_eq!(req.source_ip(), Some("192.0.2.44"));
    }

    #[test]
    fn missing_identity_has_no_source_ip() {
        let req = LambdaRequest::from(ApiGatewayProxyRequest::default());
        assert_eq!(req.source_ip(), None);
    }

    #[test]
    fn empty_source_ip_counts_as_missing() {
        let mut proxy = ApiGatewayProxyRequest::default();
        proxy.request_context.identity.source_ip = Some(String::new());
        assert_eq!(LambdaRequest::from(proxy).source_ip(), None);
    }

    #[test]
    fn sparse_events_fall_back_to_other() {
        for raw in [
            "{}",
            r#"{"requestContext":{}}"#,
            r#"{"httpMethod":"GET","path":"/","requestContext":{"identity":{}}}"#,
            r#""just a string""#,
        ] {
            let req = from_str(raw).expect("sparse event rejected");
            assert!(matches!(req, LambdaRequest::Other(_)), "{} was not caught", raw);
            assert_eq!(req.request_origin(), RequestOrigin::ApiGatewayV1);
            assert_eq!(req.source_ip(), None);
        }
    }

    #[test]
    fn sparse_event_still_yields_identity_source_ip() {
        let req = from_str(r#"{"requestContext":{"identity":{"sourceIp":"203.0.113.7"}}}"#)
            .expect("sparse event rejected");
        assert_eq!(req.source_ip(), Some("203.0.113.7"));

        let empty = from_str(r#"{"requestContext":{"identity":{"sourceIp":""}}}"#).expect("sparse event rejected");
        assert_eq!(empty.source_ip(), None);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(from_str("{ not json").is_err());
    }
}
