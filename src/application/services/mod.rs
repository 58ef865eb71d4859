/// Module containing the cities/streets/regions service
pub mod geo_service;
/// Module containing the loyalty and combo service
pub mod loyalty_service;
/// Module containing the courier mobile application service
pub mod mobile_service;
/// Module containing the order service
pub mod order_service;
/// Module containing the organization service
pub mod organization_service;
/// Module containing the reports, events and notices service
pub mod report_service;
/// Module containing the RMS/delivery settings service
pub mod settings_service;

pub use crate::application::interfaces::geo::*;
pub use crate::application::interfaces::loyalty::*;
pub use crate::application::interfaces::mobile::*;
pub use crate::application::interfaces::order::*;
pub use crate::application::interfaces::organization::*;
pub use crate::application::interfaces::report::*;
pub use crate::application::interfaces::settings::*;

use crate::error::AppError;

/// Validates a declared-required parameter before any network call
pub(crate) fn require(endpoint: &str, parameter: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::missing(endpoint, parameter));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::require;
    use crate::error::AppError;

    #[test]
    fn require_rejects_empty_and_blank() {
        assert!(require("api/0/streets/streets", "city", "moscow").is_ok());

        for bad in ["", "   "] {
            match require("api/0/streets/streets", "city", bad) {
                Err(AppError::MissingParameter {
                    endpoint,
                    parameter,
                }) => {
                    assert_eq!(endpoint, "api/0/streets/streets");
                    assert_eq!(parameter, "city");
                }
                other => panic!("Unexpected result: {other:?}"),
            }
        }
    }
}
