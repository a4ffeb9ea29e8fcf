use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub log_level: String,
    pub notification_config: NotificationConfig,
    pub redirect_config: RedirectConfig,
    pub simulation_config: SimulationConfig,
    pub pages: PageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
            notification_config: NotificationConfig::default(),
            redirect_config: RedirectConfig::default(),
            simulation_config: SimulationConfig::default(),
            pages: PageConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub display_ms: u32,
    pub exit_ms: u32,
    pub capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: 5000,
            exit_ms: 300,
            capacity: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedirectConfig {
    pub submit_delay_ms: u32,
    pub login_delay_ms: u32,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            login_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub poll_interval_ms: u32,
    pub pulse_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 10000,
            pulse_probability: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub listing: String,
    pub admin: String,
    pub home: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            listing: "view-tickets.html".to_string(),
            admin: "admin/index.html".to_string(),
            home: "index.html".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            notification_config: NotificationConfig {
                display_ms: option_env!("NOTIFICATION_DISPLAY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.notification_config.display_ms),
                exit_ms: option_env!("NOTIFICATION_EXIT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.notification_config.exit_ms),
                capacity: option_env!("NOTIFICATION_CAPACITY")
                    .and_then(|v| v.parse().ok())
                    .filter(|c: &usize| *c > 0)
                    .unwrap_or(defaults.notification_config.capacity),
            },
            redirect_config: RedirectConfig {
                submit_delay_ms: option_env!("SUBMIT_REDIRECT_DELAY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.redirect_config.submit_delay_ms),
                login_delay_ms: option_env!("LOGIN_REDIRECT_DELAY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.redirect_config.login_delay_ms),
            },
            simulation_config: SimulationConfig {
                poll_interval_ms: option_env!("STATUS_POLL_INTERVAL_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.simulation_config.poll_interval_ms),
                pulse_probability: option_env!("STATUS_PULSE_PROBABILITY")
                    .and_then(|v| v.parse().ok())
                    .filter(|p: &f64| (0.0..=1.0).contains(p))
                    .unwrap_or(defaults.simulation_config.pulse_probability),
            },
            pages: PageConfig {
                listing: option_env!("LISTING_PAGE")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.listing),
                admin: option_env!("ADMIN_PAGE")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.admin),
                home: option_env!("HOME_PAGE")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.home),
            },
        }
    }

    /// Nivel de log configurado (info si no se reconoce)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_timings() {
        let config = AppConfig::default();
        assert_eq!(config.notification_config.display_ms, 5000);
        assert_eq!(config.notification_config.exit_ms, 300);
        assert_eq!(config.redirect_config.submit_delay_ms, 2000);
        assert_eq!(config.redirect_config.login_delay_ms, 1000);
        assert_eq!(config.simulation_config.poll_interval_ms, 10000);
        assert_eq!(config.pages.listing, "view-tickets.html");
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "verbose".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
