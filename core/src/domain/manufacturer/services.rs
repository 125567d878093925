use tracing::{info, instrument};

use crate::domain::{
    beer::ports::BeerRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    manufacturer::{
        entities::Manufacturer,
        ports::{ManufacturerRepository, ManufacturerService},
        value_objects::{CreateManufacturerInput, UpdateManufacturerInput},
    },
};

pub(crate) fn manufacturer_not_found(manufacturer_id: i32) -> CoreError {
    CoreError::NotFound(format!(
        "Manufacturer with id {manufacturer_id} not found"
    ))
}

impl<B, M, HC> Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    async fn find_manufacturer(&self, manufacturer_id: i32) -> Result<Manufacturer, CoreError> {
        self.manufacturer_repository
            .get_by_id(manufacturer_id)
            .await?
            .ok_or_else(|| manufacturer_not_found(manufacturer_id))
    }
}

impl<B, M, HC> ManufacturerService for Service<B, M, HC>
where
    B: BeerRepository,
    M: ManufacturerRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_manufacturers(&self) -> Result<Vec<Manufacturer>, CoreError> {
        self.manufacturer_repository.fetch_manufacturers().await
    }

    #[instrument(skip(self))]
    async fn get_manufacturer(&self, manufacturer_id: i32) -> Result<Manufacturer, CoreError> {
        self.find_manufacturer(manufacturer_id).await
    }

    #[instrument(skip(self))]
    async fn create_manufacturer(
        &self,
        input: CreateManufacturerInput,
    ) -> Result<Manufacturer, CoreError> {
        let manufacturer = self.manufacturer_repository.create(input).await?;

        info!(manufacturer_id = manufacturer.id, "manufacturer created");
        Ok(manufacturer)
    }

    #[instrument(skip(self))]
    async fn update_manufacturer(
        &self,
        input: UpdateManufacturerInput,
    ) -> Result<Manufacturer, CoreError> {
        let mut manufacturer = self.find_manufacturer(input.manufacturer_id).await?;
        manufacturer.update(input.name, input.country);

        self.manufacturer_repository.update(manufacturer).await
    }

    #[instrument(skip(self))]
    async fn delete_manufacturer(&self, manufacturer_id: i32) -> Result<(), CoreError> {
        self.find_manufacturer(manufacturer_id).await?;
        self.manufacturer_repository.delete(manufacturer_id).await?;

        info!(manufacturer_id, "manufacturer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        beer::ports::MockBeerRepository, health::ports::MockHealthCheckRepository,
        manufacturer::ports::MockManufacturerRepository,
    };

    fn manufacturer(id: i32) -> Manufacturer {
        Manufacturer {
            id,
            name: "Manufacturer 1".to_string(),
            country: "Spain".to_string(),
            beers: vec![],
        }
    }

    fn service(
        manufacturers: MockManufacturerRepository,
    ) -> Service<MockBeerRepository, MockManufacturerRepository, MockHealthCheckRepository> {
        Service::new(
            MockBeerRepository::new(),
            manufacturers,
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn get_manufacturers_returns_repository_rows() {
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers
            .expect_fetch_manufacturers()
            .times(1)
            .returning(|| Box::pin(async { Ok(vec![manufacturer(1), manufacturer(2)]) }));

        let result = service(manufacturers).get_manufacturers().await.unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn get_manufacturer_reports_missing_rows() {
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service(manufacturers).get_manufacturer(1).await.unwrap_err();

        assert_eq!(
            err,
            CoreError::NotFound("Manufacturer with id 1 not found".to_string())
        );
    }

    #[tokio::test]
    async fn update_manufacturer_overwrites_name_and_country() {
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(manufacturer(id))) }));
        manufacturers
            .expect_update()
            .withf(|m| m.id == 1 && m.name == "Updated" && m.country == "Germany")
            .times(1)
            .returning(|m| Box::pin(async move { Ok(m) }));

        let updated = service(manufacturers)
            .update_manufacturer(UpdateManufacturerInput {
                manufacturer_id: 1,
                name: "Updated".to_string(),
                country: "Germany".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.country, "Germany");
    }

    #[tokio::test]
    async fn delete_manufacturer_checks_existence_first() {
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let err = service(manufacturers)
            .delete_manufacturer(1)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_manufacturer_removes_existing_row() {
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers
            .expect_get_by_id()
            .returning(|id| Box::pin(async move { Ok(Some(manufacturer(id))) }));
        manufacturers
            .expect_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        service(manufacturers).delete_manufacturer(1).await.unwrap();
    }
}
