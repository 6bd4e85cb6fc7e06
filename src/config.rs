use std::env;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DB_HOST: &str = "localhost:5432";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub database_url: Option<String>,
    pub migrations_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = lookup("PORT")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let db_host = lookup("DB_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
        let db_user = lookup("DB_USER").unwrap_or_default();
        let db_password = lookup("DB_PASSWORD").unwrap_or_default();
        let db_name = lookup("DB_NAME")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                if db_user.is_empty() {
                    "postgres".to_string()
                } else {
                    db_user.clone()
                }
            });

        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let migrations_dir = lookup("MIGRATIONS_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "migrations".to_string());

        Self {
            server_port,
            db_host,
            db_user,
            db_password,
            db_name,
            database_url,
            migrations_dir,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.clone();
        }

        let credentials = match (self.db_user.as_str(), self.db_password.as_str()) {
            ("", _) => String::new(),
            (user, "") => format!("{}@", urlencoding::encode(user)),
            (user, password) => format!(
                "{}:{}@",
                urlencoding::encode(user),
                urlencoding::encode(password)
            ),
        };
        format!(
            "postgres://{}{}/{}",
            credentials,
            self.db_host,
            urlencoding::encode(&self.db_name)
        )
    }
}
