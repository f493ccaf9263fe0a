//! Response types

use aws_lambda_events::encodings::Body;
use aws_lambda_events::event::alb::AlbTargetGroupResponse;
use aws_lambda_events::event::apigw::{ApiGatewayProxyResponse, ApiGatewayV2httpResponse};
use http::{
    header::{HeaderValue, CONTENT_TYPE},
    HeaderMap, StatusCode,
};
use serde::Serialize;

use crate::request::RequestOrigin;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// A greeting ready to be handed back to the caller.
///
/// Greetings are always successful, so the status is not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    body: String,
}

impl Greeting {
    /// Wrap a body in a successful greeting
    pub fn new(body: impl Into<String>) -> Self {
        Greeting { body: body.into() }
    }

    /// The greeting text
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Status code every greeting is answered with
    pub fn status(&self) -> StatusCode {
        StatusCode::OK
    }
}

/// Representation of Lambda response
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LambdaResponse {
    /// API Gateway HTTP API response
    ApiGatewayV2(ApiGatewayV2httpResponse),
    /// API Gateway REST API proxy response
    ApiGatewayV1(ApiGatewayProxyResponse),
    /// ALB target group response
    Alb(AlbTargetGroupResponse),
}

impl LambdaResponse {
    /// Shape a greeting the way the event source that sent the request
    /// expects its answer.
    pub fn from_greeting(request_origin: RequestOrigin, greeting: Greeting) -> Self {
        let status = greeting.status();
        let status_code = i64::from(status.as_u16());
        let body = Some(Body::from(greeting.body));

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));

        match request_origin {
            RequestOrigin::ApiGatewayV2 => LambdaResponse::ApiGatewayV2(ApiGatewayV2httpResponse {
                status_code,
                body,
                headers: headers.clone(),
                multi_value_headers: headers,
                ..Default::default()
            }),
            RequestOrigin::ApiGatewayV1 => LambdaResponse::ApiGatewayV1(ApiGatewayProxyResponse {
                status_code,
                body,
                headers: headers.clone(),
                multi_value_headers: headers,
                ..Default::default()
            }),
            RequestOrigin::Alb => LambdaResponse::Alb(AlbTargetGroupResponse {
                status_code,
                body,
                headers: headers.clone(),
                multi_value_headers: headers,
                status_description: Some(format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or_default()
                )),
                ..Default::default()
            }),
        }
    }

    /// Status code of the response, whatever its shape
    pub fn status_code(&self) -> i64 {
        match self {
            LambdaResponse::ApiGatewayV2(res) => res.status_code,
            LambdaResponse::ApiGatewayV1(res) => res.status_code,
            LambdaResponse::Alb(res) => res.status_code,
        }
    }

    /// Text body of the response, if it has one
    pub fn body_text(&self) -> Option<&str> {
        let body = match self {
            LambdaResponse::ApiGatewayV2(res) => res.body.as_ref(),
            LambdaResponse::ApiGatewayV1(res) => res.body.as_ref(),
            LambdaResponse::Alb(res) => res.body.as_ref(),
        };
        match body {
            Some(Body::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}
