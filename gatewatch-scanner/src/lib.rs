pub mod error;
pub mod prober;
pub mod result;

pub use error::ScanError;
pub use prober::{Page, SiteProber, endpoint};
pub use result::{AuthPath, Platform, SiteReport, StatusReport};
