use anyhow::{bail, Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::scheduling::BusinessHours;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub booking: BookingConfig,
    pub smtp: Option<SmtpConfig>,
    pub business: BusinessConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

/// Daily booking window and slot spacing. The window is half-open:
/// appointments may start at or after `open_hour` and must end no later
/// than `close_hour`.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    pub open_hour: u8,
    pub close_hour: u8,
    pub slot_minutes: u16,
}

impl BookingConfig {
    pub fn business_hours(&self) -> BusinessHours {
        BusinessHours {
            open: u16::from(self.open_hour) * 60,
            close: u16::from(self.close_hour) * 60,
        }
    }
}

/// SMTP settings for outgoing notifications. Only present when
/// SMTP_PASSWORD is set; without it the mailer runs disabled and form
/// submissions still succeed.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub email: String,
    pub password: String,
    pub notification_email: String,
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Server configuration
        let host = env::var("SERVER_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("Failed to parse SERVER_HOST")?;

        let port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("Failed to parse SERVER_PORT")?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000,http://127.0.0.1:5000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        // Database configuration
        let db_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://database/salon.db".to_string());
        let db_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(val) => Some(
                val.parse()
                    .context("Failed to parse DATABASE_MAX_CONNECTIONS")?,
            ),
            Err(_) => Some(10),
        };
        let db_min_connections = match env::var("DATABASE_MIN_CONNECTIONS") {
            Ok(val) => Some(
                val.parse()
                    .context("Failed to parse DATABASE_MIN_CONNECTIONS")?,
            ),
            Err(_) => Some(1),
        };

        // Booking window configuration
        let open_hour = env::var("BOOKING_START_HOUR")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<u8>()
            .context("Failed to parse BOOKING_START_HOUR")?;
        let close_hour = env::var("BOOKING_END_HOUR")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u8>()
            .context("Failed to parse BOOKING_END_HOUR")?;
        let slot_minutes = env::var("TIME_SLOT_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u16>()
            .context("Failed to parse TIME_SLOT_MINUTES")?;

        if open_hour >= close_hour || close_hour > 24 {
            bail!(
                "Invalid booking window: BOOKING_START_HOUR={} BOOKING_END_HOUR={}",
                open_hour,
                close_hour
            );
        }
        if slot_minutes == 0 {
            bail!("TIME_SLOT_MINUTES must be positive");
        }

        // Business identity
        let business_email = env::var("BUSINESS_EMAIL")
            .unwrap_or_else(|_| "jaymie.injoy.services@gmail.com".to_string());
        let business = BusinessConfig {
            name: env::var("BUSINESS_NAME").unwrap_or_else(|_| "InJoy Beauty".to_string()),
            email: business_email.clone(),
            phone: env::var("BUSINESS_PHONE").unwrap_or_else(|_| "613-868-6944".to_string()),
            location: env::var("BUSINESS_LOCATION")
                .unwrap_or_else(|_| "Bourget, Ontario".to_string()),
        };

        // SMTP configuration (optional): notifications are skipped entirely
        // unless a password is provided.
        let smtp_config = match env::var("SMTP_PASSWORD") {
            Ok(password) if !password.is_empty() => {
                let port = env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse::<u16>()
                    .context("Failed to parse SMTP_PORT")?;
                Some(SmtpConfig {
                    server: env::var("SMTP_SERVER")
                        .unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                    port,
                    email: env::var("SMTP_EMAIL").unwrap_or_else(|_| business_email.clone()),
                    password,
                    notification_email: env::var("NOTIFICATION_EMAIL")
                        .unwrap_or_else(|_| business_email.clone()),
                })
            }
            _ => None,
        };

        // App configuration
        let environment_str =
            env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let environment = environment_str
            .parse::<Environment>()
            .unwrap_or(Environment::Development);

        let frontend_dir = env::var("FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string());

        Ok(Config {
            server: ServerConfig {
                host,
                port,
                cors_origins,
            },
            database: DatabaseConfig {
                url: db_url,
                max_connections: db_max_connections,
                min_connections: db_min_connections,
            },
            booking: BookingConfig {
                open_hour,
                close_hour,
                slot_minutes,
            },
            smtp: smtp_config,
            business,
            app: AppConfig {
                environment,
                frontend_dir,
            },
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }

    #[allow(unused)]
    pub fn is_production(&self) -> bool {
        self.app.environment == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "staging" => Ok(Environment::Staging),
            "development" => Ok(Environment::Development),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_hours_converts_hours_to_minutes() {
        let booking = BookingConfig {
            open_hour: 15,
            close_hour: 20,
            slot_minutes: 30,
        };
        let hours = booking.business_hours();
        assert_eq!(hours.open, 900);
        assert_eq!(hours.close, 1200);
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(
            "Production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("qa".parse::<Environment>().is_err());
    }
}
