#[derive(Debug, Clone, PartialEq)]
pub struct CreateManufacturerInput {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateManufacturerInput {
    pub manufacturer_id: i32,
    pub name: String,
    pub country: String,
}
