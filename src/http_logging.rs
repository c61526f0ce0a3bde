use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

/// A Tower layer that logs HTTP requests and responses.
#[derive(Clone, Copy, Debug)]
pub struct HttpLoggingLayer;

impl<S> Layer<S> for HttpLoggingLayer {
    type Service = HttpLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLoggingService { inner }
    }
}

/// A Tower service that logs HTTP requests and responses.
#[derive(Clone, Debug)]
pub struct HttpLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        info!(http.method = %method, http.path = %path, "HTTP request started");

        // Take the service that was driven to readiness, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            match &result {
                Ok(response) => {
                    info!(
                        http.method = %method,
                        http.path = %path,
                        http.status = response.status().as_u16(),
                        duration_ms = %duration_ms,
                        "HTTP request completed"
                    );
                }
                Err(_) => {
                    warn!(
                        http.method = %method,
                        http.path = %path,
                        duration_ms = %duration_ms,
                        "HTTP request failed"
                    );
                }
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use tower::{service_fn, ServiceExt};

    #[tokio::test]
    async fn test_layer_passes_response_through() {
        let inner = service_fn(|_req: Request<()>| async {
            Ok::<_, Infallible>(
                Response::builder()
                    .status(201)
                    .body("created")
                    .unwrap(),
            )
        });
        let service = HttpLoggingLayer.layer(inner);

        let response = service
            .oneshot(Request::builder().uri("/api/issues/demo").body(()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 201);
        assert_eq!(*response.body(), "created");
    }
}
