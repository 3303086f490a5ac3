use crate::dto::HealthRes;

/// Simple health service for the link APIs
///
/// Reports the service as healthy once the link catalog is available. Touching the catalog
/// here also forces its one-time initialisation before the first real request.
pub struct HealthService;

impl HealthService {
    /// Checks that the link catalog is loaded
    ///
    /// # Returns
    /// A `HealthRes` indicating whether the catalog is loaded.
    pub fn check_health() -> HealthRes {
        let sets = vpr_links::catalog().sets().len();
        HealthRes {
            ok: sets > 0,
            message: format!("VPR Links is alive ({sets} link sets)"),
        }
    }
}
