mod relay_service;


pub use relay_service::{RelayService, RelayServiceDependencies, SendOutcome};
