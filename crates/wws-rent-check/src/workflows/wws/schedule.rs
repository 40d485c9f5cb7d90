//! Dated point and rent schedules.
//!
//! The energy-label table, the WOZ rate and the social-sector rent formula are revised
//! periodically by the government. They are loaded as effective-dated versions so a revision
//! never touches the scoring code. The built-in version is provisional: it carries the values
//! the calculator has used so far and is not an official table.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::EnergyLabel;

const DEFAULT_LIBERALIZATION_THRESHOLD: f64 = 143.0;
const DEFAULT_WOZ_CAP_RATIO: f64 = 0.33;

/// Linear social-sector rent formula: `min(base_rent + points_rate × points, upper_bound)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentFormula {
    pub base_rent: f64,
    pub points_rate: f64,
    pub upper_bound: f64,
}

impl RentFormula {
    pub fn max_rent(&self, points: f64) -> f64 {
        (self.base_rent + self.points_rate * points).min(self.upper_bound)
    }
}

/// One version of the schedule, valid from `effective_from` until the next version starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentSchedule {
    pub effective_from: NaiveDate,
    pub label: String,
    pub energy_points: BTreeMap<EnergyLabel, f64>,
    /// Euros of assessed value per WOZ point.
    pub woz_rate_per_point: f64,
    pub rent_formula: RentFormula,
    #[serde(default = "default_liberalization_threshold")]
    pub liberalization_threshold: f64,
    #[serde(default = "default_woz_cap_ratio")]
    pub woz_cap_ratio: f64,
}

fn default_liberalization_threshold() -> f64 {
    DEFAULT_LIBERALIZATION_THRESHOLD
}

fn default_woz_cap_ratio() -> f64 {
    DEFAULT_WOZ_CAP_RATIO
}

impl RentSchedule {
    /// Values in use since 1 January 2025, pending the official tables. The energy table,
    /// WOZ rate and €900.07 ceiling are the calculator's published figures. The €6.29 per point
    /// rate is illustrative only: no official per-point price is available, so load a schedule
    /// file before relying on amounts below the ceiling.
    pub fn provisional_2025() -> Self {
        let energy_points = BTreeMap::from([
            (EnergyLabel::APlus4, 58.0),
            (EnergyLabel::APlus3, 52.0),
            (EnergyLabel::APlus2, 46.0),
            (EnergyLabel::APlus1, 40.0),
            (EnergyLabel::A, 34.0),
            (EnergyLabel::B, 28.0),
            (EnergyLabel::C, 22.0),
            (EnergyLabel::D, 12.0),
            (EnergyLabel::E, 0.0),
            (EnergyLabel::F, 0.0),
            (EnergyLabel::G, 0.0),
        ]);

        Self {
            effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            label: "provisional-2025".to_string(),
            energy_points,
            woz_rate_per_point: 14_146.0,
            rent_formula: RentFormula {
                base_rent: 0.0,
                points_rate: 6.29,
                upper_bound: 900.07,
            },
            liberalization_threshold: DEFAULT_LIBERALIZATION_THRESHOLD,
            woz_cap_ratio: DEFAULT_WOZ_CAP_RATIO,
        }
    }

    fn check(&self) -> Result<(), ConfigurationError> {
        if !(self.woz_rate_per_point.is_finite() && self.woz_rate_per_point > 0.0) {
            return Err(ConfigurationError::InvalidWozRate {
                effective_from: self.effective_from,
                value: self.woz_rate_per_point,
            });
        }

        let formula = &self.rent_formula;
        let finite = [
            formula.base_rent,
            formula.points_rate,
            formula.upper_bound,
            self.liberalization_threshold,
            self.woz_cap_ratio,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !finite || formula.upper_bound <= 0.0 || self.woz_cap_ratio < 0.0 {
            return Err(ConfigurationError::InvalidRentFormula {
                effective_from: self.effective_from,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    versions: Vec<RentSchedule>,
}

/// All known schedule versions, ordered by effective date.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleCatalog {
    versions: Vec<RentSchedule>,
}

impl ScheduleCatalog {
    pub fn new(mut versions: Vec<RentSchedule>) -> Result<Self, ConfigurationError> {
        if versions.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }

        let mut seen = BTreeSet::new();
        for version in &versions {
            version.check()?;
            if !seen.insert(version.effective_from) {
                return Err(ConfigurationError::DuplicateVersion {
                    effective_from: version.effective_from,
                });
            }
        }

        versions.sort_by_key(|version| version.effective_from);
        Ok(Self { versions })
    }

    pub fn provisional() -> Self {
        Self {
            versions: vec![RentSchedule::provisional_2025()],
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigurationError> {
        let document: CatalogDocument =
            serde_json::from_reader(reader).map_err(ConfigurationError::Parse)?;
        Self::new(document.versions)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// The latest version that has taken effect on `date`.
    pub fn effective_on(&self, date: NaiveDate) -> Result<&RentSchedule, ConfigurationError> {
        self.versions
            .iter()
            .rev()
            .find(|version| version.effective_from <= date)
            .ok_or(ConfigurationError::NoEffectiveSchedule { date })
    }

    pub fn versions(&self) -> &[RentSchedule] {
        &self.versions
    }
}

impl Default for ScheduleCatalog {
    fn default() -> Self {
        Self::provisional()
    }
}

/// A schedule needed for the computation is missing or unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no rent schedule is effective on {date}")]
    NoEffectiveSchedule { date: NaiveDate },
    #[error("rent schedule catalog contains no versions")]
    EmptyCatalog,
    #[error("rent schedule effective {effective_from} is listed more than once")]
    DuplicateVersion { effective_from: NaiveDate },
    #[error("rent schedule effective {effective_from} has invalid WOZ rate {value}")]
    InvalidWozRate {
        effective_from: NaiveDate,
        value: f64,
    },
    #[error("rent schedule effective {effective_from} has an invalid rent formula")]
    InvalidRentFormula { effective_from: NaiveDate },
    #[error("failed to read rent schedule {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rent schedule document: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn version(effective_from: NaiveDate, points_rate: f64) -> RentSchedule {
        RentSchedule {
            effective_from,
            label: format!("rate-{points_rate}"),
            rent_formula: RentFormula {
                base_rent: 0.0,
                points_rate,
                upper_bound: 900.07,
            },
            ..RentSchedule::provisional_2025()
        }
    }

    #[test]
    fn selects_latest_version_in_effect() {
        let catalog = ScheduleCatalog::new(vec![
            version(date(2025, 7, 1), 6.5),
            version(date(2025, 1, 1), 6.29),
        ])
        .expect("catalog builds");

        assert_eq!(
            catalog
                .effective_on(date(2025, 3, 1))
                .expect("schedule")
                .rent_formula
                .points_rate,
            6.29
        );
        assert_eq!(
            catalog
                .effective_on(date(2025, 7, 1))
                .expect("schedule")
                .rent_formula
                .points_rate,
            6.5
        );
    }

    #[test]
    fn dates_before_first_version_are_a_configuration_error() {
        let catalog = ScheduleCatalog::provisional();
        let err = catalog
            .effective_on(date(2024, 12, 31))
            .expect_err("no schedule before 2025");
        assert!(matches!(err, ConfigurationError::NoEffectiveSchedule { .. }));
    }

    #[test]
    fn rejects_unusable_catalogs() {
        assert!(matches!(
            ScheduleCatalog::new(Vec::new()),
            Err(ConfigurationError::EmptyCatalog)
        ));

        let duplicate = ScheduleCatalog::new(vec![
            version(date(2025, 1, 1), 6.0),
            version(date(2025, 1, 1), 6.5),
        ]);
        assert!(matches!(
            duplicate,
            Err(ConfigurationError::DuplicateVersion { .. })
        ));

        let mut zero_rate = RentSchedule::provisional_2025();
        zero_rate.woz_rate_per_point = 0.0;
        assert!(matches!(
            ScheduleCatalog::new(vec![zero_rate]),
            Err(ConfigurationError::InvalidWozRate { .. })
        ));
    }

    #[test]
    fn parses_json_documents_with_defaults() {
        let document = r#"{
            "versions": [{
                "effective_from": "2026-01-01",
                "label": "draft-2026",
                "energy_points": { "A++++": 60.0, "C": 23.0, "G": 0.0 },
                "woz_rate_per_point": 15000.0,
                "rent_formula": { "base_rent": 10.0, "points_rate": 6.4, "upper_bound": 932.93 }
            }]
        }"#;

        let catalog = ScheduleCatalog::from_reader(document.as_bytes()).expect("parses");
        let schedule = catalog
            .effective_on(date(2026, 6, 1))
            .expect("schedule in effect");

        assert_eq!(schedule.label, "draft-2026");
        assert_eq!(schedule.energy_points.get(&EnergyLabel::C), Some(&23.0));
        assert_eq!(schedule.liberalization_threshold, 143.0);
        assert_eq!(schedule.woz_cap_ratio, 0.33);
    }

    #[test]
    fn formula_is_clamped_to_upper_bound() {
        let formula = RentFormula {
            base_rent: 100.0,
            points_rate: 10.0,
            upper_bound: 900.0,
        };
        assert_eq!(formula.max_rent(50.0), 600.0);
        assert_eq!(formula.max_rent(142.0), 900.0);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ScheduleCatalog::from_path("/nonexistent/wws-schedule.json")
            .expect_err("file is missing");
        assert!(err.to_string().contains("/nonexistent/wws-schedule.json"));
    }
}
