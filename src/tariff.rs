//! Tariff kernel: time-of-use factor by wall-clock hour, and charger
//! rate/price selection by charge mode and activity kind.

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ChargeMode};

/// Time-of-use bracket a wall-clock hour falls into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TouPeriod {
    Peak,
    MidPeak,
    OffPeak,
}

/// Configured TOU windows, expressed as half-open `[start, end)` hour ranges
/// in `0..24`. The two mid-peak windows and the peak window are expected to
/// be disjoint; this is validated by [`crate::config::GeneralParameters`]'s
/// loader, not re-checked per lookup.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct TouWindows {
    pub peak: (u32, u32),
    pub midpeak_a: (u32, u32),
    pub midpeak_b: (u32, u32),
    pub peak_factor: f64,
    pub midpeak_factor: f64,
    pub offpeak_factor: f64,
}

impl TouWindows {
    fn in_window(hour: u32, window: (u32, u32)) -> bool {
        hour >= window.0 && hour < window.1
    }

    /// Classifies an interval index into a TOU period using the configured
    /// windows. `t * interval_minutes / 60` gives the wall-clock hour.
    pub fn period(&self, t: u32, interval_minutes: u32) -> TouPeriod {
        let hour = (t * interval_minutes) / 60 % 24;
        if Self::in_window(hour, self.peak) {
            TouPeriod::Peak
        } else if Self::in_window(hour, self.midpeak_a) || Self::in_window(hour, self.midpeak_b) {
            TouPeriod::MidPeak
        } else {
            TouPeriod::OffPeak
        }
    }

    /// The multiplier applied to a charger's base price for the period the
    /// given interval index falls into.
    pub fn factor(&self, t: u32, interval_minutes: u32) -> f64 {
        match self.period(t, interval_minutes) {
            TouPeriod::Peak => self.peak_factor,
            TouPeriod::MidPeak => self.midpeak_factor,
            TouPeriod::OffPeak => self.offpeak_factor,
        }
    }
}

/// Charger power and per-kWh base prices, keyed by charge mode and whether
/// the activity charging is co-located with home.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct ChargerRates {
    pub slow_power_kw: f64,
    pub fast_power_kw: f64,
    pub rapid_power_kw: f64,
    pub home_slow_price: f64,
    pub ac_price: f64,
    pub public_dc_price: f64,
}

impl ChargerRates {
    /// Returns `(soc fraction added per interval, currency per kWh)` for an
    /// activity's charge mode. Price selection: home + slow ⇒ home_slow;
    /// non-home + slow ⇒ AC; fast ⇒ AC; rapid ⇒ public_dc.
    pub fn rate_and_price(
        &self,
        activity: &Activity,
        battery_capacity_kwh: f64,
        interval_minutes: u32,
    ) -> (f64, f64) {
        let (power_kw, price) = match activity.charge_mode {
            ChargeMode::None => (0.0, 0.0),
            ChargeMode::Slow if activity.group == 0 => (self.slow_power_kw, self.home_slow_price),
            ChargeMode::Slow => (self.slow_power_kw, self.ac_price),
            ChargeMode::Fast => (self.fast_power_kw, self.ac_price),
            ChargeMode::Rapid => (self.rapid_power_kw, self.public_dc_price),
        };
        let rate = power_kw / battery_capacity_kwh * (interval_minutes as f64 / 60.0);
        (rate, price)
    }
}
