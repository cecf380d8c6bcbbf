use std::f64::consts::PI;

/// Speed of light in vacuum [m/s] (definition).
pub const LIGHT_SPEED: f64 = 299_792_458.0;
/// Vacuum permeability [T.m/A] (definition).
pub const VACUUM_PERMEABILITY: f64 = 4.0 * PI * 1e-7;
/// Elementary charge [C] (CODATA, 2014-06-11).
pub const ELECTRON_CHARGE: f64 = 1.60217656535e-19;
/// Electron mass [kg] (CODATA, 2014-06-11).
pub const ELECTRON_MASS: f64 = 9.1093829140e-31;

/// Electron rest energy [J].
pub const ELECTRON_REST_ENERGY: f64 = ELECTRON_MASS * LIGHT_SPEED * LIGHT_SPEED;
/// Vacuum permittivity [F/m].
pub const VACUUM_PERMITTIVITY: f64 = 1.0 / (VACUUM_PERMEABILITY * LIGHT_SPEED * LIGHT_SPEED);
/// Electron rest energy [MeV].
pub const ELECTRON_REST_ENERGY_MEV: f64 = (ELECTRON_REST_ENERGY / ELECTRON_CHARGE) / 1e6;
/// Classical electron radius [m].
pub const ELECTRON_RADIUS: f64 = ELECTRON_CHARGE * ELECTRON_CHARGE
    / (4.0 * PI * VACUUM_PERMITTIVITY * ELECTRON_REST_ENERGY);
