use std::env;

/// Runtime configuration, sourced from the environment.
///
/// `DATABASE_URL` must be present; the server address falls back to
/// `127.0.0.1:8080` when `SERVER_HOST`/`SERVER_PORT` are unset. The token
/// signing secret (`JWT_SECRET`) is read by the auth layer at use time and
/// deliberately not cached here.
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub server_host: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
