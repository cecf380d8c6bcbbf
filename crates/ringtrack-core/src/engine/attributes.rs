use super::error::QueryError;
use crate::core::models::element::{Element, MAX_POLYNOM_ORDERS};

/// Capability to read one comparable attribute out of an [`Element`].
///
/// Searches are written once against this trait instead of once per attribute.
/// Comparison is exact `PartialEq`; floating-point attributes get no tolerance.
pub trait ElementAttribute {
    type Value: PartialEq + ?Sized;

    fn extract<'e>(&self, element: &'e Element) -> &'e Self::Value;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FamName;

#[derive(Debug, Clone, Copy, Default)]
pub struct Length;

#[derive(Debug, Clone, Copy, Default)]
pub struct Angle;

#[derive(Debug, Clone, Copy, Default)]
pub struct Frequency;

#[derive(Debug, Clone, Copy, Default)]
pub struct NrSteps;

/// The pass method, compared by canonical name rather than numeric code.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassMethodName;

/// One skew multipole coefficient slot.
#[derive(Debug, Clone, Copy)]
pub struct PolynomA {
    order: usize,
}

/// One normal multipole coefficient slot.
#[derive(Debug, Clone, Copy)]
pub struct PolynomB {
    order: usize,
}

fn check_order(order: usize) -> Result<usize, QueryError> {
    if order < MAX_POLYNOM_ORDERS {
        Ok(order)
    } else {
        Err(QueryError::PolynomOrderOutOfRange {
            order,
            max: MAX_POLYNOM_ORDERS,
        })
    }
}

impl PolynomA {
    pub fn new(order: usize) -> Result<Self, QueryError> {
        Ok(Self {
            order: check_order(order)?,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }
}

impl PolynomB {
    pub fn new(order: usize) -> Result<Self, QueryError> {
        Ok(Self {
            order: check_order(order)?,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }
}

impl ElementAttribute for FamName {
    type Value = str;

    fn extract<'e>(&self, element: &'e Element) -> &'e str {
        &element.fam_name
    }
}

impl ElementAttribute for Length {
    type Value = f64;

    fn extract<'e>(&self, element: &'e Element) -> &'e f64 {
        &element.length
    }
}

impl ElementAttribute for Angle {
    type Value = f64;

    fn extract<'e>(&self, element: &'e Element) -> &'e f64 {
        &element.angle
    }
}

impl ElementAttribute for Frequency {
    type Value = f64;

    fn extract<'e>(&self, element: &'e Element) -> &'e f64 {
        &element.frequency
    }
}

impl ElementAttribute for NrSteps {
    type Value = u32;

    fn extract<'e>(&self, element: &'e Element) -> &'e u32 {
        &element.nr_steps
    }
}

impl ElementAttribute for PassMethodName {
    type Value = str;

    fn extract<'e>(&self, element: &'e Element) -> &'e str {
        element.pass_method.name()
    }
}

impl ElementAttribute for PolynomA {
    type Value = f64;

    fn extract<'e>(&self, element: &'e Element) -> &'e f64 {
        &element.polynom_a[self.order]
    }
}

impl ElementAttribute for PolynomB {
    type Value = f64;

    fn extract<'e>(&self, element: &'e Element) -> &'e f64 {
        &element.polynom_b[self.order]
    }
}
