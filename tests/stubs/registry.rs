#![allow(dead_code)]
// Not every stub is used from every test binary

pub const VALID_DOC: &str = r#"
units:
  percent:
    symbol: "%"
    aliases: [pct, percent]
  celsius:
    symbol: "°C"
    aliases: [C, degC]
  hectopascal:
    symbol: hPa
    aliases: [mbar, millibar]

quantity_kinds:
  relative_humidity:
    label: Relative Humidity
    symbol: "%RH"
    default_unit: "%"
    uri: http://qudt.org/vocab/quantitykind/RelativeHumidity
    aliases: [humidity, RH]
    tags: [climate]
  temperature:
    label: Temperature
    symbol: "°C"
    default_unit: "°C"
    uri: http://qudt.org/vocab/quantitykind/Temperature
    aliases: [temp]
    tags: [climate]
  barometric_pressure:
    label: Barometric Pressure
    symbol: P
    default_unit: hPa
    aliases: [pressure]
    tags: [climate, weather]
"#;

pub const EMPTY_DOC: &str = "{}";

pub const BAD_DOC: &str = "units: [unbalanced: {\n";

// Loosely-typed entries the loader must coerce rather than reject
pub const COERCION_DOC: &str = r#"
quantity_kinds:
  oddball:
    default_unit: 42
    aliases:
    tags:
"#;
