use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::io::atomic_write::write_atomically;
use crate::io::section::{render_document, AttributeMode, Section};
use crate::io::GenerationError;
use crate::math::Real;

/// The extension of simulation files.
pub const SIMX_EXTENSION: &str = "simx";

/// The format of revision dates in simulation files.
pub const SIMX_REVISION_DATE_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

const CELSIUS_TO_KELVIN: Real = 273.15;

/// Hourly air temperature and humidity forcing the boundaries of a simulation.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SimpleForcing {
    /// Air temperature series, in Kelvin.
    pub temperature: Vec<Real>,
    /// Relative humidity series, in percent.
    pub relative_humidity: Vec<Real>,
}

impl SimpleForcing {
    /// The number of forced hours.
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    /// Whether this forcing has no value.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}

/// The settings of an ENVI-met simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Name of the simulation, also the base name of the `.simx` file.
    pub sim_name: String,
    /// Path of the area input file to simulate.
    pub inx_file: PathBuf,
    /// Start date, `DD.MM.YYYY`.
    pub start_date: String,
    /// Start time, `hh:mm:ss`.
    pub start_time: String,
    /// Duration in hours. Superseded by the length of a forcing series.
    pub duration: u32,
    /// Wind speed 10 m above ground, in m/s.
    pub wind_speed: Real,
    /// Wind direction, in degrees (0 north, 90 east).
    pub wind_direction: Real,
    /// Roughness length at the reference point, in meters.
    pub roughness: Real,
    /// Initial air temperature, in Celsius.
    pub initial_temperature: Real,
    /// Specific humidity at 2500 m, in g/kg.
    pub specific_humidity: Real,
    /// Relative humidity at 2 m, in percent.
    pub relative_humidity: Real,
    /// Forcing series, if any.
    pub forcing: Option<SimpleForcing>,
    /// Whether the simulation uses every available CPU.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig::new(PathBuf::new())
    }
}

impl SimulationConfig {
    /// Default settings simulating the given area input file.
    pub fn new(inx_file: impl Into<PathBuf>) -> Self {
        SimulationConfig {
            sim_name: "DragonflyConfig".to_string(),
            inx_file: inx_file.into(),
            start_date: "21.06.2018".to_string(),
            start_time: "06:00:00".to_string(),
            duration: 24,
            wind_speed: 3.0,
            wind_direction: 0.0,
            roughness: 0.01,
            initial_temperature: 21.0,
            specific_humidity: 7.0,
            relative_humidity: 50.0,
            forcing: None,
            parallel: false,
        }
    }

    /// The path of the `.simx` file, next to the area input file.
    pub fn output_path(&self) -> PathBuf {
        let folder = self.inx_file.parent().unwrap_or_else(|| Path::new(""));
        folder.join(format!("{}.{SIMX_EXTENSION}", self.sim_name))
    }

    /// The simulated duration, in hours.
    pub fn effective_duration(&self) -> usize {
        match &self.forcing {
            Some(forcing) if !forcing.is_empty() => forcing.len(),
            _ => self.duration as usize,
        }
    }

    /// Renders the simulation file in memory.
    pub fn render(&self, revision_date: NaiveDateTime) -> String {
        let revision_date = revision_date.format(SIMX_REVISION_DATE_FORMAT).to_string();
        let mut sections = vec![
            Section::new("Header", AttributeMode::None)
                .with("filetype", "SIMX")
                .with("version", "1")
                .with("revisiondate", revision_date)
                .with("remark", "Created with envigrid")
                .with("encryptionlevel", "0"),
            Section::new("mainData", AttributeMode::None)
                .with("simName", self.sim_name.as_str())
                .with("INXFile", self.inx_file.display().to_string())
                .with("filebaseName", self.sim_name.as_str())
                .with("outDir", " ")
                .with("startDate", self.start_date.as_str())
                .with("startTime", self.start_time.as_str())
                .with("simDuration", self.effective_duration().to_string())
                .with("windSpeed", self.wind_speed.to_string())
                .with("windDir", self.wind_direction.to_string())
                .with("z0", self.roughness.to_string())
                .with(
                    "T_H",
                    (self.initial_temperature + CELSIUS_TO_KELVIN).to_string(),
                )
                .with("Q_H", self.specific_humidity.to_string())
                .with("Q_2m", self.relative_humidity.to_string()),
        ];

        if let Some(forcing) = self.forcing.as_ref().filter(|f| !f.is_empty()) {
            sections.push(
                Section::new("SimpleForcing", AttributeMode::None)
                    .with("TAir", join(&forcing.temperature))
                    .with("Qrel", join(&forcing.relative_humidity)),
            );
        }

        if self.parallel {
            sections.push(Section::new("Parallel", AttributeMode::None).with("CPUdemand", "ALL"));
        }

        render_document(&sections)
    }
}

fn join(values: &[Real]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Writes the `.simx` file of `config` next to its area input file.
///
/// The revision date is the current local time unless one is given.
pub fn write_simulation_file(
    config: &SimulationConfig,
    revision_date: Option<NaiveDateTime>,
) -> Result<PathBuf, GenerationError> {
    let path = config.output_path();
    match path.parent() {
        Some(folder) if !folder.as_os_str().is_empty() && !folder.is_dir() => {
            return Err(GenerationError::MissingFolder(folder.to_path_buf()));
        }
        _ => {}
    }

    let date = revision_date.unwrap_or_else(|| chrono::Local::now().naive_local());
    write_atomically(&path, config.render(date).as_bytes())?;
    log::debug!("simulation file written to {}", path.display());
    Ok(path)
}
