//! Registry Domain Concerns

pub mod appliances;
pub mod consumptions;
pub mod validation;
