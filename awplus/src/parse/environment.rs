//! Environmental state from `show cpu`, `show system environment` and
//! `show memory`.
//!
//! CPU usage is reported once per stack member; the sensor dump repeats per
//! stack member and, inside each, per resource. Only the first stack member's
//! resources feed the report, matching what the device considers primary.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::model::{CpuUsage, Environment, FanSensor, Memory, PowerSupply, TemperatureSensor};
use crate::parse::segment::segments;

/// PSU capacity is not reported in the environment dump; the platform's
/// supplies are rated 370 W.
const PSU_CAPACITY_WATTS: f64 = 370.0;

// The leading \s keeps "15 minutes:" from matching as "5 minutes:".
static CPU_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s5 minutes:\s+(\d+\.\d+)").expect("static regex"));

static STACK_MEMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Stack member \d+").expect("static regex"));

static RESOURCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^Resource ID:\s*\d+\s+Name:\s*(.+?)\s*$").expect("static regex")
});

static PSU_OUTPUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\d+\s+PSU Power Output\s+\S+\s+\S+\s+\S+\s+(\S+)\s*$")
        .expect("static regex")
});

static TEMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\d+\s+Temp:\s+(\S+)\s+\(Degrees C\)\s+(\d+)\s+\S+\s+\d+\s+(\S+)\s*$")
        .expect("static regex")
});

static FAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*\d+\s+Fan:\s+(\S+\s\d+)\s+\(Rpm\)\s+\S+\s+\S+\s+\S+\s+(\S+)\s*$")
        .expect("static regex")
});

static MEMORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)Stack member 1:\s*RAM total:\s*(\d+)\s*kB;?\s*used:\s*(\d+)\s*kB;?\s*free:\s*(\d+)\s*kB",
    )
    .expect("static regex")
});

/// Parse the environment report out of the three raw command responses.
///
/// A `show cpu` response with no five-minute figure at all is a parse
/// failure: the CPU map must always carry index 0. Missing sensor or memory
/// sections recover to empty maps / `None`.
pub fn parse_environment(
    show_cpu: &str,
    show_environment: &str,
    show_memory: &str,
) -> Result<Environment, ParseError> {
    let mut environment = Environment::default();

    // One five-minute load figure per stack member, first member first.
    let cpus: Vec<f64> = CPU_RE
        .captures_iter(show_cpu)
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse().ok()))
        .collect();
    if cpus.is_empty() {
        return Err(ParseError::missing_section("cpu"));
    }
    for (index, usage) in cpus.into_iter().enumerate() {
        environment.cpu.insert(index, CpuUsage { usage });
    }

    if let Some(first_stack) = segments(show_environment, &STACK_MEMBER_RE).first() {
        for resource in segments(first_stack.body(), &RESOURCE_RE) {
            let Some(name) = resource.capture(1) else { continue };
            if name.starts_with("PSU") {
                // PSU health rides on the power-output row's status column.
                let status = PSU_OUTPUT_RE
                    .captures(resource.body())
                    .and_then(|caps| caps.get(1))
                    .is_some_and(|m| m.as_str() == "Ok");
                environment.power.insert(
                    name.to_string(),
                    PowerSupply {
                        capacity: PSU_CAPACITY_WATTS,
                        output: 0.0,
                        status,
                    },
                );
            } else {
                for caps in TEMP_RE.captures_iter(resource.body()) {
                    let (Some(label), Some(value), Some(status)) =
                        (caps.get(1), caps.get(2), caps.get(3))
                    else {
                        continue;
                    };
                    // Inverted convention: anything other than Ok is an alarm.
                    environment.temperature.insert(
                        label.as_str().to_string(),
                        TemperatureSensor {
                            temperature: value.as_str().parse().unwrap_or(0.0),
                            is_alert: status.as_str() != "Ok",
                        },
                    );
                }
                for caps in FAN_RE.captures_iter(resource.body()) {
                    let (Some(label), Some(status)) = (caps.get(1), caps.get(2)) else {
                        continue;
                    };
                    environment.fans.insert(
                        label.as_str().to_string(),
                        FanSensor {
                            status: status.as_str() == "Ok",
                        },
                    );
                }
            }
        }
    }

    if let Some(caps) = MEMORY_RE.captures(show_memory) {
        let figure = |i: usize| {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<u64>().ok())
        };
        if let (Some(total), Some(free)) = (figure(1), figure(3)) {
            environment.memory = Some(Memory {
                used_ram: total.saturating_sub(free),
                available_ram: total,
            });
        }
    }

    Ok(environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW_CPU: &str = "\
Stack member 1

CPU averages:
  1 second: 4%, 20 seconds: 5%, 60 seconds: 5%
System load averages:
  1 minute: 0.03, 5 minutes: 3.35, 15 minutes: 0.01
Stack member 2

CPU averages:
  1 second: 2%, 20 seconds: 2%, 60 seconds: 3%
System load averages:
  1 minute: 0.01, 5 minutes: 1.20, 15 minutes: 0.00
";

    const SHOW_ENVIRONMENT: &str = "\
Environment Monitoring Status

Overall Status: Normal

Stack member 1

Resource ID: 1  Name: PE1 (Base)
ID  Sensor (Units)             Reading  Low Limit  High Limit  Status
1   Fan: Fan 1 (Rpm)              6893       4500           -  Ok
2   Voltage: 0.75 (Volts)        0.750      0.713       0.788  Ok
3   Temp: CPU (Degrees C)           39          -          90  Ok
4   Temp: System (Degrees C)        52          -          45  Failed

Resource ID: 2  Name: PSU A
ID  Sensor (Units)             Reading  Low Limit  High Limit  Status
1   PSU Power Output             92.0          -           -   Ok

Resource ID: 3  Name: PSU B
ID  Sensor (Units)             Reading  Low Limit  High Limit  Status
1   PSU Power Output              0.0          -           -   Failed

Stack member 2

Resource ID: 1  Name: PE1 (Base)
ID  Sensor (Units)             Reading  Low Limit  High Limit  Status
1   Fan: Fan 1 (Rpm)              7001       4500           -  Ok
";

    const SHOW_MEMORY: &str = "\
Stack member 1:

RAM total: 497892 kB; used: 169812 kB; free: 328080 kB
Slab: reclaimable: 18260 kB, unreclaimable: 6452 kB

Stack member 2:

RAM total: 497892 kB; used: 150000 kB; free: 347892 kB
";

    #[test]
    fn test_cpu_per_stack_member() {
        let env = parse_environment(SHOW_CPU, SHOW_ENVIRONMENT, SHOW_MEMORY).unwrap();
        assert_eq!(env.cpu.len(), 2);
        assert_eq!(env.cpu[&0].usage, 3.35);
        assert_eq!(env.cpu[&1].usage, 1.20);
    }

    #[test]
    fn test_single_cpu_lands_at_index_zero() {
        let single = "System load averages:\n  1 minute: 0.10, 5 minutes: 0.42, 15 minutes: 0.00\n";
        let env = parse_environment(single, "", "").unwrap();
        assert_eq!(env.cpu.len(), 1);
        assert_eq!(env.cpu[&0].usage, 0.42);
    }

    #[test]
    fn test_fifteen_minute_average_is_not_a_cpu_entry() {
        let env = parse_environment(SHOW_CPU, "", "").unwrap();
        assert_eq!(env.cpu.len(), 2);
        let figures: Vec<f64> = env.cpu.values().map(|c| c.usage).collect();
        assert!(!figures.contains(&0.01));
        assert!(!figures.contains(&0.00));
    }

    #[test]
    fn test_no_cpu_line_is_parse_error() {
        let err = parse_environment("nothing here", SHOW_ENVIRONMENT, SHOW_MEMORY).unwrap_err();
        assert_eq!(err, ParseError::missing_section("cpu"));
    }

    #[test]
    fn test_power_supply_health() {
        let env = parse_environment(SHOW_CPU, SHOW_ENVIRONMENT, SHOW_MEMORY).unwrap();
        assert_eq!(env.power.len(), 2);
        assert!(env.power["PSU A"].status);
        assert!(!env.power["PSU B"].status);
        assert_eq!(env.power["PSU A"].capacity, 370.0);
        assert_eq!(env.power["PSU A"].output, 0.0);
    }

    #[test]
    fn test_temperature_alert_is_inverted() {
        let env = parse_environment(SHOW_CPU, SHOW_ENVIRONMENT, SHOW_MEMORY).unwrap();
        assert!(!env.temperature["CPU"].is_alert);
        assert_eq!(env.temperature["CPU"].temperature, 39.0);
        assert!(env.temperature["System"].is_alert);
    }

    #[test]
    fn test_fans_first_stack_member_only() {
        let env = parse_environment(SHOW_CPU, SHOW_ENVIRONMENT, SHOW_MEMORY).unwrap();
        assert_eq!(env.fans.len(), 1);
        assert!(env.fans["Fan 1"].status);
    }

    #[test]
    fn test_memory_used_is_total_minus_free() {
        let env = parse_environment(SHOW_CPU, SHOW_ENVIRONMENT, SHOW_MEMORY).unwrap();
        let memory = env.memory.unwrap();
        assert_eq!(memory.available_ram, 497_892);
        assert_eq!(memory.used_ram, 497_892 - 328_080);
    }

    #[test]
    fn test_missing_sections_leave_empty_maps() {
        let env = parse_environment(SHOW_CPU, "", "").unwrap();
        assert!(env.temperature.is_empty());
        assert!(env.fans.is_empty());
        assert!(env.power.is_empty());
        assert!(env.memory.is_none());
    }
}
