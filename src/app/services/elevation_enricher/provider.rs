//! Elevation lookup seam

use async_trait::async_trait;

/// Terrain elevation lookup service
///
/// Implementations wrap whatever transport the host application uses to
/// reach its elevation service; the enricher only sees this trait.
/// `None` covers every failure mode: transport errors, out-of-coverage
/// coordinates, and malformed responses. The enricher treats all of them
/// as "leave the waypoint unchanged".
#[async_trait]
pub trait ElevationProvider: Send + Sync {
    /// Elevation in meters at the given WGS84 position
    async fn fetch_elevation(&self, lat: f64, lng: f64) -> Option<f64>;
}
