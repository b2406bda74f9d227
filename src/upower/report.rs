use std::collections::HashMap;

use super::AcquisitionError;

/// One parsed `upower -i` report, values kept as the verbatim text after
/// the colon (`"40.59 Wh"`, `"5.8 hours"`, `"70%"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryReport {
    pub state: String,
    pub energy: String,
    pub energy_full: String,
    pub energy_full_design: String,
    pub energy_rate: String,
    pub voltage: String,
    pub time_remaining: String,
    pub percentage_remaining: String,
    pub design_capacity: String,
}

impl BatteryReport {
    /// Parse a full `upower -i` report.
    ///
    /// Every `key: value` line is collected into a map first and fields are
    /// looked up by key, so the parse does not depend on line positions,
    /// which shift between charge states.
    pub fn parse(text: &str) -> Result<Self, AcquisitionError> {
        let fields = key_value_lines(text);
        let get = |key: &'static str| -> Result<String, AcquisitionError> {
            fields
                .get(key)
                .map(|value| (*value).to_owned())
                .ok_or(AcquisitionError::MissingField { key })
        };

        // upower drops the time estimate entirely once the battery is full
        // and only the percentage remains, so a percent-shaped value is a
        // valid time_remaining (it reads 100% in that state).
        let time_remaining = get("time to empty")
            .or_else(|_| get("time to full"))
            .or_else(|_| get("percentage"))?;

        Ok(Self {
            state: get("state")?,
            energy: get("energy")?,
            energy_full: get("energy-full")?,
            energy_full_design: get("energy-full-design")?,
            energy_rate: get("energy-rate")?,
            voltage: get("voltage")?,
            time_remaining,
            percentage_remaining: get("percentage")?,
            design_capacity: get("capacity")?,
        })
    }
}

/// Collect every `key: value` line into a map, trimming both sides. Values
/// keep any later colons (the `updated` timestamp line has them).
fn key_value_lines(text: &str) -> HashMap<&str, &str> {
    text.lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISCHARGING: &str = "\
Device: /org/freedesktop/UPower/devices/battery_BAT0
  native-path:          BAT0
  vendor:               LGC
  model:                5B10W13933
  serial:               1204
  power supply:         yes
  updated:              Tue 26 Aug 2025 10:19:21 AM CEST (63 seconds ago)
  has history:          yes
  has statistics:       yes
  battery
    present:             yes
    rechargeable:        yes
    state:               discharging
    warning-level:       none
    energy:              40.59 Wh
    energy-empty:        0 Wh
    energy-full:         51.99 Wh
    energy-full-design:  57 Wh
    energy-rate:         7.006 W
    voltage:             11.712 V
    charge-cycles:       N/A
    time to empty:       5.8 hours
    percentage:          78%
    capacity:            91.2105%
    technology:          lithium-polymer
    icon-name:          'battery-full-symbolic'
  History (rate):
    1756203561\t7.006\tdischarging
";

    const CHARGING: &str = "\
Device: /org/freedesktop/UPower/devices/battery_BAT0
  native-path:          BAT0
  power supply:         yes
  updated:              Tue 26 Aug 2025 11:02:44 AM CEST (12 seconds ago)
  battery
    present:             yes
    state:               charging
    energy:              44.1 Wh
    energy-empty:        0 Wh
    energy-full:         51.99 Wh
    energy-full-design:  57 Wh
    energy-rate:         21.45 W
    voltage:             12.544 V
    time to full:        22.1 minutes
    percentage:          84%
    capacity:            91.2105%
";

    const FULLY_CHARGED: &str = "\
Device: /org/freedesktop/UPower/devices/battery_BAT0
  native-path:          BAT0
  power supply:         yes
  updated:              Tue 26 Aug 2025 12:40:03 PM CEST (5 seconds ago)
  battery
    present:             yes
    state:               fully-charged
    energy:              51.99 Wh
    energy-empty:        0 Wh
    energy-full:         51.99 Wh
    energy-full-design:  57 Wh
    energy-rate:         0 W
    voltage:             13.05 V
    percentage:          100%
    capacity:            91.2105%
";

    #[test]
    fn parses_discharging_report() {
        let report = BatteryReport::parse(DISCHARGING).unwrap();
        assert_eq!(report.state, "discharging");
        assert_eq!(report.energy, "40.59 Wh");
        assert_eq!(report.energy_full, "51.99 Wh");
        assert_eq!(report.energy_full_design, "57 Wh");
        assert_eq!(report.energy_rate, "7.006 W");
        assert_eq!(report.voltage, "11.712 V");
        assert_eq!(report.time_remaining, "5.8 hours");
        assert_eq!(report.percentage_remaining, "78%");
        assert_eq!(report.design_capacity, "91.2105%");
    }

    #[test]
    fn charging_report_uses_time_to_full() {
        let report = BatteryReport::parse(CHARGING).unwrap();
        assert_eq!(report.state, "charging");
        assert_eq!(report.time_remaining, "22.1 minutes");
    }

    #[test]
    fn full_report_falls_back_to_percentage() {
        let report = BatteryReport::parse(FULLY_CHARGED).unwrap();
        assert_eq!(report.state, "fully-charged");
        assert_eq!(report.time_remaining, "100%");
        assert_eq!(report.percentage_remaining, "100%");
    }

    #[test]
    fn missing_field_is_reported_by_key() {
        let truncated = "\
Device: /org/freedesktop/UPower/devices/battery_BAT0
  battery
    state:               discharging
    energy:              40.59 Wh
    time to empty:       5.8 hours
    percentage:          78%
";
        let err = BatteryReport::parse(truncated).unwrap_err();
        assert!(matches!(
            err,
            AcquisitionError::MissingField { key: "energy-full" }
        ));
    }

    #[test]
    fn report_without_any_time_or_percentage_errors() {
        let err = BatteryReport::parse("state: discharging\n").unwrap_err();
        assert!(matches!(err, AcquisitionError::MissingField { .. }));
    }

    #[test]
    fn values_keep_interior_colons() {
        let fields = key_value_lines(DISCHARGING);
        assert_eq!(
            fields["updated"],
            "Tue 26 Aug 2025 10:19:21 AM CEST (63 seconds ago)"
        );
    }
}
