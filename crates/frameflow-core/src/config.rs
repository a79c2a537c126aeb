//! Configuración del core desde variables de entorno (`.env` soportado).
//!
//! - `FRAMEFLOW_CACHE_ENABLED`: habilita el cache por fingerprint (default `true`).
//! - `FRAMEFLOW_DEFAULT_FORMAT`: format hint usado por los engines cuando el
//!   nodo no declara uno (default vacío: inferir por extensión).

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración global, evaluada una sola vez.
pub static CONFIG: Lazy<FlowConfig> = Lazy::new(FlowConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub cache_enabled: bool,
    pub default_format: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            default_format: String::new(),
        }
    }
}

impl FlowConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let defaults = Self::default();
        let cache_enabled = flag_or_default(
            "FRAMEFLOW_CACHE_ENABLED",
            env::var("FRAMEFLOW_CACHE_ENABLED").ok().as_deref(),
            defaults.cache_enabled,
        );
        let default_format = env::var("FRAMEFLOW_DEFAULT_FORMAT")
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or(defaults.default_format);
        Self {
            cache_enabled,
            default_format,
        }
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// Valor ausente usa el default en silencio; uno no reconocido avisa.
fn flag_or_default(var: &str, raw: Option<&str>, default: bool) -> bool {
    match raw {
        None => default,
        Some(raw) => parse_flag(raw).unwrap_or_else(|| {
            warn!("{var}='{raw}' no reconocido, usando {default}");
            default
        }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn unrecognised_flag_falls_back_to_default() {
        let var = "FRAMEFLOW_CACHE_ENABLED";
        assert!(flag_or_default(var, Some("flase"), true));
        assert!(!flag_or_default(var, Some("flase"), false));
        assert!(!flag_or_default(var, Some("no"), true));
        assert!(flag_or_default(var, None, true));
    }

    #[test]
    fn default_enables_cache() {
        let cfg = FlowConfig::default();
        assert!(cfg.cache_enabled);
        assert!(cfg.default_format.is_empty());
        assert!(!cfg.with_cache(false).cache_enabled);
    }
}
