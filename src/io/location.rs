use crate::math::Real;

/// Errors raised while parsing a location descriptor.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum LocationError {
    /// The descriptor isn't a `Site:Location` object.
    #[error("expected a `Site:Location` object, found `{0}`")]
    UnexpectedObject(String),
    /// The descriptor has too few fields.
    #[error("a `Site:Location` object needs a name, a latitude, a longitude and a time zone, found {0} field(s)")]
    MissingFields(usize),
    /// A numeric field couldn't be parsed.
    #[error("invalid {field}: `{value}`")]
    InvalidNumber {
        /// The name of the field.
        field: &'static str,
        /// The text found in place of a number.
        value: String,
    },
}

/// The geographic location of a model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Location {
    /// Name of the site.
    pub name: String,
    /// Latitude, in degrees.
    pub latitude: Real,
    /// Longitude, in degrees.
    pub longitude: Real,
    /// Time zone, as written in the model (`UTC+n`, `UTC-n` or `GMT`).
    pub time_zone: String,
    /// Rotation of the model north, in degrees clockwise from the Y axis.
    pub model_rotation: Real,
}

impl Default for Location {
    fn default() -> Self {
        Location {
            name: "unknown_Location".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            time_zone: time_zone_name(0.0),
            model_rotation: 0.0,
        }
    }
}

impl Location {
    /// Parses an EnergyPlus `Site:Location` object.
    ///
    /// ```text
    /// Site:Location,
    /// Bologna_ITA,
    /// 44.53, !Latitude
    /// 11.30, !Longitude
    /// 1.0, !Time Zone
    /// 49.0; !Elevation
    /// ```
    ///
    /// Comments (after a `!`) are ignored. The elevation is optional.
    pub fn from_site_location(text: &str, model_rotation: Real) -> Result<Self, LocationError> {
        let stripped: String = text
            .lines()
            .map(|line| line.split('!').next().unwrap_or_default().trim())
            .collect::<Vec<_>>()
            .concat()
            .replace(';', "");
        let fields: Vec<&str> = stripped.split(',').map(str::trim).collect();

        if !fields[0].eq_ignore_ascii_case("Site:Location") {
            return Err(LocationError::UnexpectedObject(fields[0].to_string()));
        }

        if fields.len() < 5 {
            return Err(LocationError::MissingFields(fields.len() - 1));
        }

        let number = |field: &'static str, value: &str| {
            value
                .parse::<Real>()
                .map_err(|_| LocationError::InvalidNumber {
                    field,
                    value: value.to_string(),
                })
        };

        Ok(Location {
            name: fields[1].to_string(),
            latitude: number("latitude", fields[2])?,
            longitude: number("longitude", fields[3])?,
            time_zone: time_zone_name(number("time zone", fields[4])?),
            model_rotation,
        })
    }
}

/// The model name of a time zone given by its offset in hours.
///
/// Only the integer part of the offset is kept.
pub fn time_zone_name(offset: Real) -> String {
    let hours = offset.trunc() as i64;
    match hours {
        h if h > 0 => format!("UTC+{h}"),
        h if h < 0 => format!("UTC-{}", -h),
        _ => "GMT".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_site_location() {
        let text = "Site:Location,\nBologna_ITA,\n44.53, !Latitude\n11.30, !Longitude\n1.0, !Time Zone\n49.0; !Elevation\n";
        let location = Location::from_site_location(text, 15.0).unwrap();
        assert_eq!(location.name, "Bologna_ITA");
        assert_eq!(location.latitude, 44.53);
        assert_eq!(location.longitude, 11.30);
        assert_eq!(location.time_zone, "UTC+1");
        assert_eq!(location.model_rotation, 15.0);
    }

    #[test]
    fn time_zones() {
        assert_eq!(time_zone_name(5.5), "UTC+5");
        assert_eq!(time_zone_name(-8.0), "UTC-8");
        assert_eq!(time_zone_name(-0.5), "GMT");
        assert_eq!(time_zone_name(0.0), "GMT");
    }

    #[test]
    fn default_location_matches_empty_descriptor() {
        let text = "Site:Location,\nunknown_Location,\n0.0, !Latitude\n0.0, !Longitude\n0.0, !Time Zone\n0.0; !Elevation\n";
        assert_eq!(
            Location::from_site_location(text, 0.0).unwrap(),
            Location::default()
        );
    }

    #[test]
    fn malformed_descriptors() {
        assert_eq!(
            Location::from_site_location("Building,\nfoo;", 0.0),
            Err(LocationError::UnexpectedObject("Building".to_string()))
        );
        assert_eq!(
            Location::from_site_location("Site:Location, here, 1.0;", 0.0),
            Err(LocationError::MissingFields(2))
        );
        assert_eq!(
            Location::from_site_location("Site:Location, here, north, 1.0, 0.0;", 0.0),
            Err(LocationError::InvalidNumber {
                field: "latitude",
                value: "north".to_string()
            })
        );
    }
}
