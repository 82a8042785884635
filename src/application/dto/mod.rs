//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{
    CreateBudgetRequest, CreateDropdownOptionRequest, CreateStructureAssemblyRequest,
    LineItemRequest,
};
pub use response::MessageResponse;
