pub mod entities;
pub mod services;
pub mod value_objects;

#[derive(Clone, Debug)]
pub struct BrewdexConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_is_built_from_parts() {
        let config = DatabaseConfig {
            host: "db".to_string(),
            port: 5433,
            username: "brew".to_string(),
            password: "secret".to_string(),
            name: "catalog".to_string(),
        };

        assert_eq!(config.url(), "postgres://brew:secret@db:5433/catalog");
    }
}
