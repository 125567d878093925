use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
}
