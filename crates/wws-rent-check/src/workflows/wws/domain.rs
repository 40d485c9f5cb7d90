use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Discriminant that selects the rule branch for every section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HousingType {
    /// Self-contained dwelling with its own front door, kitchen and sanitary facilities.
    Independent,
    /// Room in shared housing; facilities may be divided among households.
    NonIndependent,
}

impl HousingType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "independent" | "zelfstandig" => Some(Self::Independent),
            "non-independent" | "non_independent" | "nonindependent" | "onzelfstandig"
            | "shared" => Some(Self::NonIndependent),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            HousingType::Independent => "independent",
            HousingType::NonIndependent => "non-independent",
        }
    }
}

/// Raw assessment input as received from a caller. Only `housing_type` is mandatory; every
/// other section falls back to an empty spec that contributes zero points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentRequest {
    pub housing_type: Option<String>,
    pub kitchen: KitchenSpec,
    pub sanitary: SanitarySpec,
    pub surface: SurfaceSpec,
    pub energy: EnergySpec,
    pub outdoor: OutdoorSpec,
    pub woz: WozSpec,
    pub current_rent: Option<f64>,
    /// Carried through for letter generation downstream; never scored.
    pub address: Option<String>,
}

/// Validated unit with a resolved housing type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingUnit {
    pub housing_type: HousingType,
    pub kitchen: KitchenSpec,
    pub sanitary: SanitarySpec,
    pub surface: SurfaceSpec,
    pub energy: EnergySpec,
    pub outdoor: OutdoorSpec,
    pub woz: WozSpec,
    pub current_rent: Option<f64>,
    pub address: Option<String>,
}

impl HousingUnit {
    pub fn new(housing_type: HousingType) -> Self {
        Self {
            housing_type,
            kitchen: KitchenSpec::default(),
            sanitary: SanitarySpec::default(),
            surface: SurfaceSpec::default(),
            energy: EnergySpec::default(),
            outdoor: OutdoorSpec::default(),
            woz: WozSpec::default(),
            current_rent: None,
            address: None,
        }
    }
}

/// Length of the kitchen counter including sink and hob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterLength {
    #[serde(rename = "<1m")]
    UnderOneMetre,
    #[serde(rename = "1-2m")]
    OneToTwoMetres,
    #[serde(rename = ">=2m", alias = "≥2m")]
    TwoMetresOrMore,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl CounterLength {
    pub fn from_metres(metres: f64) -> Self {
        if metres >= 2.0 {
            Self::TwoMetresOrMore
        } else if metres >= 1.0 {
            Self::OneToTwoMetres
        } else {
            Self::UnderOneMetre
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplianceKind {
    HobInduction,
    HobCeramic,
    HobGas,
    ExtractorHood,
    Fridge,
    Freezer,
    OvenElectric,
    OvenCombi,
    /// Counts only when built in.
    Dishwasher,
    #[serde(other)]
    Unknown,
}

impl ApplianceKind {
    pub const fn standard_points(self) -> f64 {
        match self {
            ApplianceKind::HobInduction => 1.75,
            ApplianceKind::HobCeramic => 1.0,
            ApplianceKind::HobGas => 0.5,
            ApplianceKind::ExtractorHood => 0.75,
            ApplianceKind::Fridge => 1.0,
            ApplianceKind::Freezer => 0.75,
            ApplianceKind::OvenElectric => 1.0,
            ApplianceKind::OvenCombi => 1.0,
            ApplianceKind::Dishwasher => 1.5,
            ApplianceKind::Unknown => 0.0,
        }
    }
}

/// Built-in kitchen appliance. `points` overrides the standard value for the kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub kind: ApplianceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

impl Appliance {
    pub fn standard(kind: ApplianceKind) -> Self {
        Self { kind, points: None }
    }

    pub fn points(&self) -> f64 {
        self.points.unwrap_or_else(|| self.kind.standard_points())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenSpec {
    pub counter_length: Option<CounterLength>,
    pub appliances: Vec<Appliance>,
    pub shared: bool,
    /// Households sharing the kitchen, including the tenant.
    #[serde(deserialize_with = "lenient_count")]
    pub sharer_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToiletType {
    Standard,
    /// Wall-hung toilet.
    Hanging,
    Sanibroyeur,
    #[serde(other)]
    Unknown,
}

impl ToiletType {
    pub const fn points(self) -> f64 {
        match self {
            ToiletType::Standard => 3.0,
            ToiletType::Hanging => 3.75,
            ToiletType::Sanibroyeur => 1.0,
            ToiletType::Unknown => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SanitaryFacilityKind {
    Washbasin,
    /// Two taps and wider than 70cm.
    MultiWashbasin,
    Shower,
    Bath,
    BathSeparateShower,
    #[serde(other)]
    Unknown,
}

impl SanitaryFacilityKind {
    pub const fn standard_points(self) -> f64 {
        match self {
            SanitaryFacilityKind::Washbasin => 1.0,
            SanitaryFacilityKind::MultiWashbasin => 1.5,
            SanitaryFacilityKind::Shower => 4.0,
            SanitaryFacilityKind::Bath => 6.0,
            SanitaryFacilityKind::BathSeparateShower => 7.0,
            SanitaryFacilityKind::Unknown => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SanitaryFacility {
    pub kind: SanitaryFacilityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
}

impl SanitaryFacility {
    pub fn standard(kind: SanitaryFacilityKind) -> Self {
        Self { kind, points: None }
    }

    pub fn points(&self) -> f64 {
        self.points.unwrap_or_else(|| self.kind.standard_points())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingType {
    #[serde(alias = "district")]
    Central,
    Gas,
    Electric,
    #[serde(alias = "none")]
    Unheated,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitarySpec {
    pub toilet: Option<ToiletType>,
    pub toilet_in_bathroom: bool,
    pub facilities: Vec<SanitaryFacility>,
    pub heating: Option<HeatingType>,
    #[serde(deserialize_with = "lenient_count_or_zero")]
    pub heated_rooms: u32,
    pub thermostat_valves: bool,
    #[serde(deserialize_with = "lenient_count_or_zero")]
    pub thermostat_valve_count: u32,
    pub shared: bool,
    #[serde(deserialize_with = "lenient_count")]
    pub sharer_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSpec {
    /// Private floor area in m².
    pub private_area: f64,
    /// Shared floor area in m²; only scored for non-independent units.
    pub shared_area: f64,
    /// Households sharing `shared_area`. When absent the kitchen or sanitary sharer count
    /// stands in for it.
    #[serde(deserialize_with = "lenient_count")]
    pub sharer_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergyLabel {
    #[serde(rename = "A++++")]
    APlus4,
    #[serde(rename = "A+++")]
    APlus3,
    #[serde(rename = "A++")]
    APlus2,
    #[serde(rename = "A+")]
    APlus1,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    /// Also catches labels outside the published scale.
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl EnergyLabel {
    pub const fn label(self) -> &'static str {
        match self {
            EnergyLabel::APlus4 => "A++++",
            EnergyLabel::APlus3 => "A+++",
            EnergyLabel::APlus2 => "A++",
            EnergyLabel::APlus1 => "A+",
            EnergyLabel::A => "A",
            EnergyLabel::B => "B",
            EnergyLabel::C => "C",
            EnergyLabel::D => "D",
            EnergyLabel::E => "E",
            EnergyLabel::F => "F",
            EnergyLabel::G => "G",
            EnergyLabel::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergySpec {
    pub label: Option<EnergyLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutdoorSpec {
    pub private_area: f64,
    pub shared_area: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub sharer_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WozSpec {
    /// Government-assessed property value in euros.
    pub assessed_value: Option<f64>,
}

/// Counts arrive from free-form forms; anything that is not a non-negative whole number reads
/// as absent so the section scores zero instead of rejecting the request.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(count_from_value))
}

fn lenient_count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_count(deserializer)?.unwrap_or(0))
}

fn count_from_value(value: &Value) -> Option<u32> {
    let whole = match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|float| *float >= 0.0 && float.fract() == 0.0)
                .map(|float| float as u64)
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(whole).ok()
}
