//! Public weather summary and the mapper that produces it.

use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamWeather;

/// Normalized weather summary returned by the API.
///
/// Field names and their order are what clients rely on: `ciudad`, `pais`,
/// `temperatura`, `descripcion`, `humedad`, `viento`, `direccionViento`,
/// `fechaActualizacion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimaInfo {
    pub ciudad: String,
    pub pais: String,
    /// Degrees Celsius.
    pub temperatura: f64,
    pub descripcion: String,
    /// Relative humidity, percent.
    pub humedad: i32,
    /// Wind speed, kph.
    pub viento: f64,
    pub direccion_viento: String,
    pub fecha_actualizacion: String,
}

/// Project an upstream payload onto [`ClimaInfo`]. Pure field selection.
pub fn to_clima_info(raw: &UpstreamWeather) -> ClimaInfo {
    ClimaInfo {
        ciudad: raw.location.name.clone(),
        pais: raw.location.country.clone(),
        temperatura: raw.current.temp_c,
        descripcion: raw.current.condition.text.clone(),
        humedad: raw.current.humidity,
        viento: raw.current.wind_kph,
        direccion_viento: raw.current.wind_dir.clone(),
        fecha_actualizacion: raw.current.last_updated.clone(),
    }
}

impl From<&UpstreamWeather> for ClimaInfo {
    fn from(raw: &UpstreamWeather) -> Self {
        to_clima_info(raw)
    }
}
