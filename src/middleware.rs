use std::task::{Context, Poll};

use tower::{Layer, Service};

/// Layer handed to the host's serving pipeline. Stored media lives behind
/// absolute remote URLs, so the serving step forwards every request to the
/// inner service untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughLayer;

impl<S> Layer<S> for PassthroughLayer {
    type Service = Passthrough<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Passthrough { inner }
    }
}

/// Forwards to the inner service, exactly once per request.
#[derive(Debug, Clone)]
pub struct Passthrough<S> {
    inner: S,
}

impl<S, R> Service<R> for Passthrough<S>
where
    S: Service<R>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: R) -> Self::Future {
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use std::future::{self, Ready};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    struct CountingService {
        calls: Arc<AtomicUsize>,
    }

    impl Service<&'static str> for CountingService {
        type Response = &'static str;
        type Error = ();
        type Future = Ready<Result<&'static str, ()>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), ()>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: &'static str) -> Self::Future {
            self.calls.fetch_add(1, Ordering::SeqCst);
            future::ready(Ok(req))
        }
    }

    #[test]
    fn test_passthrough_invokes_inner_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut svc = PassthroughLayer.layer(CountingService {
            calls: calls.clone(),
        });

        let res = futures::executor::block_on(svc.call("request")).unwrap();

        assert_eq!(res, "request");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_passthrough_forwards_every_request() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut svc = PassthroughLayer.layer(CountingService {
            calls: calls.clone(),
        });

        for _ in 0..3 {
            futures::executor::block_on(svc.call("request")).unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
