/*!
 * Scheduler Types
 * Policy selection and aging configuration
 */

use crate::core::errors::{Result, SchedulerError};
use crate::core::types::SimTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Ticks a ready process must have waited between two priority decays
pub const DEFAULT_AGING_INTERVAL: SimTime = 2;

/// Scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-come-first-served, dispatching in input order
    Fcfs,
    /// Shortest-job-first, non-preemptive
    Sjf,
    /// Priority order with waiting-time decay against starvation
    PriorityAging(AgingInterval),
}

impl Policy {
    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fcfs" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::Sjf),
            "priority_aging" | "aging" => Ok(Self::PriorityAging(AgingInterval::default())),
            _ => Err(SchedulerError::InvalidPolicy(s.to_string())),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::PriorityAging(_) => "priority_aging",
        }
    }

    /// Section title used by the report
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS Scheduling",
            Self::Sjf => "SJF Scheduling",
            Self::PriorityAging(_) => "Priority Scheduling with Aging",
        }
    }
}

/// Aging interval configuration
///
/// Used as a modulus over a ready process's waiting time: whenever the
/// waiting time sits on a non-zero multiple of the interval at pick time,
/// the priority decays by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AgingInterval {
    ticks: SimTime,
}

impl AgingInterval {
    /// Create a new aging interval, rejecting zero
    pub fn new(ticks: SimTime) -> Result<Self> {
        if ticks == 0 {
            return Err(SchedulerError::InvalidAgingInterval(ticks));
        }
        Ok(Self { ticks })
    }

    /// Get ticks
    #[inline(always)]
    pub const fn as_ticks(&self) -> SimTime {
        self.ticks
    }
}

impl Default for AgingInterval {
    fn default() -> Self {
        Self {
            ticks: DEFAULT_AGING_INTERVAL,
        }
    }
}

impl<'de> Deserialize<'de> for AgingInterval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = SimTime::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!(Policy::parse("fcfs").unwrap(), Policy::Fcfs);
        assert_eq!(Policy::parse("SJF").unwrap(), Policy::Sjf);
        assert_eq!(
            Policy::parse("priority_aging").unwrap(),
            Policy::PriorityAging(AgingInterval::default())
        );
        assert!(matches!(
            Policy::parse("round_robin"),
            Err(SchedulerError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_policy_round_trip() {
        for s in ["fcfs", "sjf", "priority_aging"] {
            assert_eq!(Policy::parse(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn test_policy_display_names() {
        assert_eq!(Policy::Fcfs.display_name(), "FCFS Scheduling");
        assert_eq!(Policy::Sjf.display_name(), "SJF Scheduling");
        assert_eq!(
            Policy::PriorityAging(AgingInterval::default()).display_name(),
            "Priority Scheduling with Aging"
        );
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(serde_json::to_string(&Policy::Fcfs).unwrap(), "\"fcfs\"");
        let aging = Policy::PriorityAging(AgingInterval::new(3).unwrap());
        let json = serde_json::to_string(&aging).unwrap();
        assert_eq!(json, "{\"priority_aging\":3}");
        let deserialized: Policy = serde_json::from_str(&json).unwrap();
        assert_eq!(aging, deserialized);
    }

    #[test]
    fn test_aging_interval_validation() {
        assert!(AgingInterval::new(0).is_err());
        assert!(AgingInterval::new(1).is_ok());
        assert_eq!(AgingInterval::default().as_ticks(), DEFAULT_AGING_INTERVAL);
    }

    #[test]
    fn test_aging_interval_rejects_zero_on_deserialize() {
        let result: std::result::Result<AgingInterval, _> = serde_json::from_str("0");
        assert!(result.is_err());
        let interval: AgingInterval = serde_json::from_str("4").unwrap();
        assert_eq!(interval.as_ticks(), 4);
    }
}
