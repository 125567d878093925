use brewdex_core::domain::common::{BrewdexConfig, DatabaseConfig};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "brewdex-api", version, about = "Beer catalog HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(
        id = "database_user",
        long = "database-user",
        env = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub user: String,

    #[arg(
        id = "database_password",
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(
        id = "database_name",
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "brewdex"
    )]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(
        id = "server_root_path",
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for BrewdexConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
        }
    }
}
