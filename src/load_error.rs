use thiserror::Error;

use crate::unit::Unit;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Target weight must be a finite, non-negative number, got {0}.")]
    InvalidTarget(f64),
    #[error("Bar weight must be a finite, non-negative number, got {0}.")]
    InvalidBar(f64),
    #[error("Plate weight must be a finite, positive number, got {0}.")]
    InvalidPlate(f64),
    #[error("Plate inventory must be strictly descending with no duplicate weights.")]
    UnsortedInventory,
    #[error("Cannot parse '{0}' as a weight.")]
    InvalidWeight(String),
    #[error("Unknown unit suffix in '{0}', expected 'lb', 'lbs' or 'kg'.")]
    UnknownUnit(String),
    #[error("Cannot load a {request} request from a {inventory} inventory.")]
    UnitMismatch { request: Unit, inventory: Unit },
}
