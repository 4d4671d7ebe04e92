//! Commute mode recommendation server.
//!
//! Given free-text origin and destination, estimates distance, time,
//! emissions and energy saved for eight travel modes and suggests one.

pub mod config;
pub mod domain;
pub mod engine;
pub mod estimate;
pub mod geocode;
pub mod routing;
pub mod transit;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support {
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral local port and return its base URL.
    pub async fn serve(router: axum::Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }
}
