/// Calculation input.
pub mod sip_request;
/// Calculation output.
pub mod sip_result;

pub use sip_request::SipRequest;
pub use sip_result::SipResult;
