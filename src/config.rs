use std::fs;
use log::LevelFilter;
use serde::Deserialize;

use crate::errors::ConfigError;
use crate::tariff::{ChargerRates, TouWindows};

/// Number of activity groups the coefficient arrays cover (the glossary's
/// 8 named groups plus index 0 for home/dawn/dusk, which is never scored).
pub const NUM_GROUPS: usize = 9;

#[derive(Deserialize, Debug)]
pub struct Geometry {
    pub speed_m_per_min: f64,
    pub battery_capacity_kwh: f64,
    pub consumption_kwh_per_km: f64,
}

#[derive(Deserialize, Debug)]
pub struct UtilityCoefficients {
    pub asc: [f64; NUM_GROUPS],
    pub early: [f64; NUM_GROUPS],
    pub late: [f64; NUM_GROUPS],
    pub long: [f64; NUM_GROUPS],
    pub short: [f64; NUM_GROUPS],
    pub travel_time_penalty: f64,
    pub gamma_work: f64,
    pub gamma_home: f64,
    pub gamma_non_work: f64,
    pub theta_soc: f64,
    pub soc_threshold: f64,
    pub beta_delta_soc: f64,
    pub beta_cost: f64,
}

#[derive(Deserialize, Debug)]
pub struct Solver {
    pub horizon: u32,
    pub interval_minutes: u32,
    pub dssr_iteration_cap: u32,
}

#[derive(Deserialize, Debug)]
pub struct Logging {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

/// General parameters for one solve: the §6 `set_general_parameters`
/// payload plus the TOU windows and charger rates/prices the tariff
/// kernel consumes, and the DSSR safety cap.
#[derive(Deserialize, Debug)]
pub struct GeneralParameters {
    pub solver: Solver,
    pub geometry: Geometry,
    pub utility: UtilityCoefficients,
    pub tou: TouWindows,
    pub charger: ChargerRates,
    pub logging: Logging,
}

/// Loads general parameters (and TOU/charger/coefficient tables) from a
/// TOML file.
pub fn load_general_parameters(config_path: &str) -> Result<GeneralParameters, ConfigError> {
    let toml_text = fs::read_to_string(config_path)?;
    let params: GeneralParameters = toml::from_str(&toml_text)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_toml() -> String {
        r#"
[solver]
horizon = 288
interval_minutes = 5
dssr_iteration_cap = 50

[geometry]
speed_m_per_min = 500.0
battery_capacity_kwh = 60.0
consumption_kwh_per_km = 0.18

[utility]
asc = [0,0,0,0,0,0,0,0,0]
early = [0,-0.01,-0.01,-0.01,-0.01,-0.01,-0.01,-0.01,-0.01]
late = [0,-0.02,-0.02,-0.02,-0.02,-0.02,-0.02,-0.02,-0.02]
long = [0,-0.01,-0.01,-0.01,-0.01,-0.01,-0.01,-0.01,-0.01]
short = [0,-0.02,-0.02,-0.02,-0.02,-0.02,-0.02,-0.02,-0.02]
travel_time_penalty = 0.05
gamma_work = -0.1
gamma_home = -0.05
gamma_non_work = -0.15
theta_soc = -1.0
soc_threshold = 0.2
beta_delta_soc = 2.0
beta_cost = -1.0

[tou]
peak = [17, 20]
midpeak_a = [7, 9]
midpeak_b = [20, 22]
peak_factor = 3.0
midpeak_factor = 2.0
offpeak_factor = 1.0

[charger]
slow_power_kw = 7.2
fast_power_kw = 22.0
rapid_power_kw = 50.0
home_slow_price = 0.10
ac_price = 0.20
public_dc_price = 0.40

[logging]
log_path = "ev-scheduler.log"
log_level = "INFO"
log_to_stdout = true
"#.to_string()
    }

    #[test]
    fn loads_a_well_formed_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", sample_toml()).unwrap();
        let params = load_general_parameters(file.path().to_str().unwrap()).unwrap();
        assert_eq!(params.solver.horizon, 288);
        assert_eq!(params.solver.interval_minutes, 5);
        assert_eq!(params.geometry.battery_capacity_kwh, 60.0);
        assert_eq!(params.tou.peak, (17, 20));
    }

    #[test]
    fn rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not = [valid").unwrap();
        assert!(load_general_parameters(file.path().to_str().unwrap()).is_err());
    }
}
