//! Per-area override configuration supplied by the operator.
//!
//! [`GeneratorConfig::default`] is the explicit empty configuration: no area
//! overrides and the default vacancy duration. Generators always receive a
//! fully-populated value and never check for absence themselves.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{AreaId, EntityId};

/// Vacancy duration used when an area sets none.
pub const DEFAULT_VACANCY_DURATION: VacancyDuration = VacancyDuration {
    hours: 0,
    minutes: 10,
    seconds: 0,
};

/// A `HH:MM:SS` duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VacancyDuration {
    hours: u32,
    minutes: u8,
    seconds: u8,
}

impl Default for VacancyDuration {
    fn default() -> Self {
        DEFAULT_VACANCY_DURATION
    }
}

impl FromStr for VacancyDuration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidDuration(s.to_string());
        let mut parts = s.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if [h, m, sec]
            .iter()
            .any(|p| p.len() < 2 || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(invalid());
        }
        let hours = h.parse().map_err(|_| invalid())?;
        let minutes: u8 = m.parse().map_err(|_| invalid())?;
        let seconds: u8 = sec.parse().map_err(|_| invalid())?;
        if minutes > 59 || seconds > 59 {
            return Err(invalid());
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }
}

impl TryFrom<String> for VacancyDuration {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VacancyDuration> for String {
    fn from(value: VacancyDuration) -> Self {
        value.to_string()
    }
}

impl fmt::Display for VacancyDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Overrides for a single area. Unset fields mean "no change".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaOverride {
    pub vacancy_timer_duration: Option<VacancyDuration>,
    /// Extra entities (typically switches driving lamps) to add to the light group.
    pub include_in_group: Vec<EntityId>,
    /// Entities to drop from the light group. Wins over `include_in_group`.
    pub exclude_from_group: Vec<EntityId>,
}

/// Generator configuration: default timer plus per-area overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub default_vacancy_duration: VacancyDuration,
    /// Keyed by area id. Ids not present in the inventory are ignored.
    pub areas: BTreeMap<AreaId, AreaOverride>,
}

impl GeneratorConfig {
    /// Overrides for `area`, or `None` when the operator set none.
    #[must_use]
    pub fn area(&self, area: &AreaId) -> Option<&AreaOverride> {
        self.areas.get(area)
    }

    /// Effective vacancy duration for `area`.
    #[must_use]
    pub fn vacancy_duration(&self, area: &AreaId) -> VacancyDuration {
        self.area(area)
            .and_then(|o| o.vacancy_timer_duration)
            .unwrap_or(self.default_vacancy_duration)
    }
}
