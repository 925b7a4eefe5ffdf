use ev_scheduler::activity::{Activity, ChargeMode};
use ev_scheduler::config::{Geometry, GeneralParameters, Logging, Solver, UtilityCoefficients, NUM_GROUPS};
use ev_scheduler::groupmem::GroupMemory;
use ev_scheduler::tariff::{ChargerRates, TouWindows};
use log::LevelFilter;

/// Default general parameters matching the boundary scenarios' "W=5,
/// H=288, default parameters" preamble.
pub fn default_params() -> GeneralParameters {
    GeneralParameters {
        solver: Solver { horizon: 288, interval_minutes: 5, dssr_iteration_cap: 50 },
        geometry: Geometry { speed_m_per_min: 500.0, battery_capacity_kwh: 60.0, consumption_kwh_per_km: 0.18 },
        utility: UtilityCoefficients {
            asc: [0.0; NUM_GROUPS],
            early: [0.0, -0.01, -0.01, -0.01, -0.01, -0.01, -0.01, -0.01, -0.01],
            late: [0.0, -0.02, -0.02, -0.02, -0.02, -0.02, -0.02, -0.02, -0.02],
            long: [0.0, -0.01, -0.01, -0.01, -0.01, -0.01, -0.01, -0.01, -0.01],
            short: [0.0, -0.02, -0.02, -0.02, -0.02, -0.02, -0.02, -0.02, -0.02],
            travel_time_penalty: 0.05,
            gamma_work: -0.1,
            gamma_home: -0.05,
            gamma_non_work: -0.15,
            theta_soc: -1.0,
            soc_threshold: 0.2,
            beta_delta_soc: 2.0,
            beta_cost: -1.0,
        },
        tou: TouWindows {
            peak: (17, 20),
            midpeak_a: (7, 9),
            midpeak_b: (20, 22),
            peak_factor: 3.0,
            midpeak_factor: 2.0,
            offpeak_factor: 1.0,
        },
        charger: ChargerRates {
            slow_power_kw: 7.2,
            fast_power_kw: 22.0,
            rapid_power_kw: 50.0,
            home_slow_price: 0.10,
            ac_price: 0.20,
            public_dc_price: 0.40,
        },
        logging: Logging { log_path: "/tmp/ev-scheduler-test.log".into(), log_level: LevelFilter::Info, log_to_stdout: false },
    }
}

pub fn home_at(id: usize, x: f64, y: f64, earliest: u32, latest: u32, min_d: u32, max_d: u32) -> Activity {
    Activity {
        id,
        x,
        y,
        group: 0,
        earliest_start: earliest,
        latest_start: latest,
        min_duration: min_d,
        max_duration: max_d,
        des_start_time: earliest,
        des_duration: min_d,
        charge_mode: ChargeMode::None,
        is_charging: false,
        is_service_station: false,
        memory: GroupMemory::new(),
    }
}

pub fn dawn() -> Activity {
    home_at(0, 454070.0, 382249.0, 0, 0, 1, 286)
}

pub fn dusk(id: usize, x: f64, y: f64) -> Activity {
    let mut a = home_at(id, x, y, 0, 287, 1, 288);
    a.des_start_time = 287;
    a.des_duration = 1;
    a
}

#[allow(clippy::too_many_arguments)]
pub fn activity(
    id: usize,
    x: f64,
    y: f64,
    group: u8,
    earliest: u32,
    latest: u32,
    min_d: u32,
    max_d: u32,
    des_start: u32,
    des_dur: u32,
    charge_mode: ChargeMode,
    is_charging: bool,
) -> Activity {
    Activity {
        id,
        x,
        y,
        group,
        earliest_start: earliest,
        latest_start: latest,
        min_duration: min_d,
        max_duration: max_d,
        des_start_time: des_start,
        des_duration: des_dur,
        charge_mode,
        is_charging,
        is_service_station: false,
        memory: GroupMemory::new(),
    }
}
