//! Server configuration from environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::routing::DEFAULT_OSRM_URL;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIONS_PATH: &str = "data/stations.json";
const DEFAULT_CITIES_PATH: &str = "data/cities.json";
const DEFAULT_ROUTE_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

/// An environment variable held a value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {name}: {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub stations_path: PathBuf,
    pub cities_path: PathBuf,

    /// Enables GraphHopper ahead of OSRM when set
    pub graphhopper_api_key: Option<String>,
    pub osrm_base_url: String,
    pub route_cache_ttl: Duration,

    /// Overrides the catalog's mean price for short-trip estimates
    pub average_fuel_price: Option<f64>,

    /// Route with straight lines instead of calling any routing service
    pub offline_routing: bool,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_or(&var, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let route_cache_ttl_secs: u64 = match var("ROUTE_CACHE_TTL_SECS") {
            Some(v) => parse("ROUTE_CACHE_TTL_SECS", &v)?,
            None => DEFAULT_ROUTE_CACHE_TTL_SECS,
        };

        let average_fuel_price = match var("AVERAGE_FUEL_PRICE") {
            Some(v) => {
                let price: f64 = parse("AVERAGE_FUEL_PRICE", &v)?;
                if !price.is_finite() || price <= 0.0 {
                    return Err(ConfigError {
                        name: "AVERAGE_FUEL_PRICE",
                        value: v,
                    });
                }
                Some(price)
            }
            None => None,
        };

        let offline_routing = match var("OFFLINE_ROUTING").as_deref() {
            None | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError {
                    name: "OFFLINE_ROUTING",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self {
            bind_addr,
            stations_path: var("STATIONS_PATH")
                .unwrap_or_else(|| DEFAULT_STATIONS_PATH.to_string())
                .into(),
            cities_path: var("CITIES_PATH")
                .unwrap_or_else(|| DEFAULT_CITIES_PATH.to_string())
                .into(),
            graphhopper_api_key: var("GRAPHHOPPER_API_KEY"),
            osrm_base_url: var("OSRM_BASE_URL").unwrap_or_else(|| DEFAULT_OSRM_URL.to_string()),
            route_cache_ttl: Duration::from_secs(route_cache_ttl_secs),
            average_fuel_price,
            offline_routing,
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError {
        name,
        value: value.to_string(),
    })
}

fn parse_or<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError> {
    let value = var(name).unwrap_or_else(|| default.to_string());
    parse(name, &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.stations_path, PathBuf::from("data/stations.json"));
        assert_eq!(config.cities_path, PathBuf::from("data/cities.json"));
        assert_eq!(config.graphhopper_api_key, None);
        assert_eq!(config.osrm_base_url, DEFAULT_OSRM_URL);
        assert_eq!(config.route_cache_ttl, Duration::from_secs(86400));
        assert_eq!(config.average_fuel_price, None);
        assert!(!config.offline_routing);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("GRAPHHOPPER_API_KEY", "gh-key"),
            ("ROUTE_CACHE_TTL_SECS", "60"),
            ("AVERAGE_FUEL_PRICE", "3.45"),
            ("OFFLINE_ROUTING", "1"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.graphhopper_api_key.as_deref(), Some("gh-key"));
        assert_eq!(config.route_cache_ttl, Duration::from_secs(60));
        assert_eq!(config.average_fuel_price, Some(3.45));
        assert!(config.offline_routing);
    }

    #[test]
    fn blank_values_use_defaults() {
        let config = config(&[("GRAPHHOPPER_API_KEY", "  "), ("BIND_ADDR", "")]).unwrap();

        assert_eq!(config.graphhopper_api_key, None);
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            config(&[("BIND_ADDR", "not-an-addr")]),
            Err(ConfigError {
                name: "BIND_ADDR",
                value: "not-an-addr".into()
            })
        );
        assert!(config(&[("AVERAGE_FUEL_PRICE", "-2")]).is_err());
        assert!(config(&[("ROUTE_CACHE_TTL_SECS", "soon")]).is_err());
        assert!(config(&[("OFFLINE_ROUTING", "maybe")]).is_err());
    }
}
