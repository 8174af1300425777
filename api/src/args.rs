use campdir_core::domain::common::{
    AuthConfig, CampdirConfig, DatabaseConfig, GeocoderConfig, ObjectStorageConfig,
};
use clap::Parser;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "campdir-api", about = "Campdir bootcamp directory API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub geocoder: GeocoderArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,

    #[arg(long, env = "COOKIE_SECURE", default_value_t = false)]
    pub cookie_secure: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "campdir")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: String,

    /// Token lifetime; defaults to 30 days.
    #[arg(long, env = "JWT_EXPIRES_IN_SECS", default_value_t = 2_592_000)]
    pub jwt_expires_in_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(long, env = "STORAGE_ENDPOINT", default_value = "http://localhost:9000")]
    pub storage_endpoint: Url,

    #[arg(long, env = "STORAGE_REGION", default_value = "us-east-1")]
    pub storage_region: String,

    #[arg(long, env = "STORAGE_ACCESS_KEY", default_value = "campdir")]
    pub storage_access_key: String,

    #[arg(long, env = "STORAGE_SECRET_KEY", default_value = "campdir")]
    pub storage_secret_key: String,

    #[arg(long, env = "STORAGE_BUCKET", default_value = "campdir-uploads")]
    pub storage_bucket: String,

    #[arg(long, env = "STORAGE_USE_SSL", default_value_t = false)]
    pub storage_use_ssl: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GeocoderArgs {
    #[arg(
        long,
        env = "GEOCODER_URL",
        default_value = "https://nominatim.openstreetmap.org"
    )]
    pub geocoder_url: Url,

    #[arg(long, env = "GEOCODER_USER_AGENT", default_value = "campdir-api/0.1")]
    pub geocoder_user_agent: String,
}

impl From<Args> for CampdirConfig {
    fn from(args: Args) -> Self {
        CampdirConfig {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_expires_in_secs: args.auth.jwt_expires_in_secs,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.storage_endpoint.to_string(),
                region: args.storage.storage_region,
                access_key: args.storage.storage_access_key,
                secret_key: args.storage.storage_secret_key,
                bucket: args.storage.storage_bucket,
                use_ssl: args.storage.storage_use_ssl,
            },
            geocoder: GeocoderConfig {
                base_url: args.geocoder.geocoder_url.to_string(),
                user_agent: args.geocoder.geocoder_user_agent,
            },
        }
    }
}
