// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `geo` namespace.

use crate::registry::{Entry, Stability::*};

/// Two-letter code representing continent’s name.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE: &str = "geo.continent.code";

/// Africa
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE_VALUE_AF: &str = "AF";

/// Antarctica
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE_VALUE_AN: &str = "AN";

/// Asia
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE_VALUE_AS: &str = "AS";

/// Europe
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE_VALUE_EU: &str = "EU";

/// North America
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE_VALUE_NA: &str = "NA";

/// Oceania
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE_VALUE_OC: &str = "OC";

/// South America
#[cfg(feature = "semconv_experimental")]
pub const GEO_CONTINENT_CODE_VALUE_SA: &str = "SA";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`GEO_CONTINENT_CODE`].
    GeoContinentCode for GEO_CONTINENT_CODE {
        /// Africa
        Af = "AF",
        /// Antarctica
        An = "AN",
        /// Asia
        As = "AS",
        /// Europe
        Eu = "EU",
        /// North America
        Na = "NA",
        /// Oceania
        Oc = "OC",
        /// South America
        Sa = "SA",
    }
}

/// Two-letter ISO Country Code (ISO 3166-1 alpha2).
///
/// Type: `string`. Examples: `"CA"`.
#[cfg(feature = "semconv_experimental")]
pub const GEO_COUNTRY_ISO_CODE: &str = "geo.country.iso_code";

/// Locality name. Represents the name of a city, town, village, or similar populated place.
///
/// Type: `string`. Examples: `"Montreal"`, `"Berlin"`.
#[cfg(feature = "semconv_experimental")]
pub const GEO_LOCALITY_NAME: &str = "geo.locality.name";

/// Latitude of the geo location in WGS84.
///
/// Type: `double`. Examples: `45.505918`.
#[cfg(feature = "semconv_experimental")]
pub const GEO_LOCATION_LAT: &str = "geo.location.lat";

/// Longitude of the geo location in WGS84.
///
/// Type: `double`. Examples: `-73.61483`.
#[cfg(feature = "semconv_experimental")]
pub const GEO_LOCATION_LON: &str = "geo.location.lon";

/// Postal code associated with the location. Values appropriate for this field may also be known as a postcode or ZIP code and will vary widely from country to country.
///
/// Type: `string`. Examples: `"94040"`.
#[cfg(feature = "semconv_experimental")]
pub const GEO_POSTAL_CODE: &str = "geo.postal_code";

/// Region ISO code (ISO 3166-2).
///
/// Type: `string`. Examples: `"CA-QC"`.
#[cfg(feature = "semconv_experimental")]
pub const GEO_REGION_ISO_CODE: &str = "geo.region.iso_code";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("GEO_CONTINENT_CODE", "geo.continent.code", Experimental),
    Entry::value("GEO_CONTINENT_CODE_VALUE_AF", "geo.continent.code", "AF", Experimental),
    Entry::value("GEO_CONTINENT_CODE_VALUE_AN", "geo.continent.code", "AN", Experimental),
    Entry::value("GEO_CONTINENT_CODE_VALUE_AS", "geo.continent.code", "AS", Experimental),
    Entry::value("GEO_CONTINENT_CODE_VALUE_EU", "geo.continent.code", "EU", Experimental),
    Entry::value("GEO_CONTINENT_CODE_VALUE_NA", "geo.continent.code", "NA", Experimental),
    Entry::value("GEO_CONTINENT_CODE_VALUE_OC", "geo.continent.code", "OC", Experimental),
    Entry::value("GEO_CONTINENT_CODE_VALUE_SA", "geo.continent.code", "SA", Experimental),
    Entry::attribute("GEO_COUNTRY_ISO_CODE", "geo.country.iso_code", Experimental),
    Entry::attribute("GEO_LOCALITY_NAME", "geo.locality.name", Experimental),
    Entry::attribute("GEO_LOCATION_LAT", "geo.location.lat", Experimental),
    Entry::attribute("GEO_LOCATION_LON", "geo.location.lon", Experimental),
    Entry::attribute("GEO_POSTAL_CODE", "geo.postal_code", Experimental),
    Entry::attribute("GEO_REGION_ISO_CODE", "geo.region.iso_code", Experimental),
];
