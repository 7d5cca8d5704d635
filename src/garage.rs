// Garage Registry - drivers and cars
//
// Registry B: drivers with a cash balance, cars owned by exactly one
// driver. Same design pattern as the league registry on different record
// shapes; the extra rules are monetary: a purchase debits the buyer only
// when the balance covers the price, a sale credits the stored price back
// and removes the car.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::store::{self, Identified, Store};

// ============================================================================
// DRIVER
// ============================================================================

/// A racing driver.
///
/// The cash balance is the only mutable attribute and is touched exclusively
/// by car purchase and sale; it never goes negative. Drivers are never
/// removed from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Externally assigned identifier - never changes
    pub id: u64,
    pub name: String,
    pub birth_date: NaiveDate,
    /// First day of the racing career; experience is measured from here
    pub career_start: NaiveDate,
    /// Cash balance, possibly fractional
    pub cash: f64,
}

impl Driver {
    pub fn new(
        id: u64,
        name: String,
        birth_date: NaiveDate,
        career_start: NaiveDate,
        cash: f64,
    ) -> Self {
        Driver {
            id,
            name,
            birth_date,
            career_start,
            cash,
        }
    }

    /// Debit a purchase from the balance. Caller has already verified
    /// the balance covers the amount.
    pub fn debit(&mut self, amount: f64) {
        self.cash -= amount;
    }

    /// Credit a sale back to the balance.
    pub fn credit(&mut self, amount: f64) {
        self.cash += amount;
    }
}

impl Identified for Driver {
    fn id(&self) -> u64 {
        self.id
    }
}

// ============================================================================
// CAR
// ============================================================================

/// A car in some driver's garage. The color is the only mutable attribute;
/// the price is fixed at purchase and credited back in full on sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Externally assigned identifier - never changes
    pub id: u64,
    /// Owning driver; resolved against the driver store at purchase time
    /// and never revalidated afterwards (drivers are never deleted)
    pub driver_id: u64,
    pub color: String,
    pub make: String,
    pub year: i32,
    /// Engine power rating
    pub power: u32,
    /// Purchase price, fixed at creation
    pub price: f64,
}

impl Car {
    pub fn new(
        id: u64,
        driver_id: u64,
        color: String,
        make: String,
        year: i32,
        power: u32,
        price: f64,
    ) -> Self {
        Car {
            id,
            driver_id,
            color,
            make,
            year,
            power,
            price,
        }
    }
}

impl Identified for Car {
    fn id(&self) -> u64 {
        self.id
    }
}

// ============================================================================
// GARAGE REGISTRY
// ============================================================================

/// Registry of all drivers and cars.
///
/// Owns both stores exclusively; cars hold a non-owning `driver_id` link
/// resolved through the driver store. All state is process-lifetime only.
#[derive(Debug, Serialize)]
pub struct GarageRegistry {
    drivers: Store<Driver>,
    cars: Store<Car>,
}

impl GarageRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        GarageRegistry {
            drivers: Store::new(),
            cars: Store::new(),
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Register a new driver. The identifier must be unused.
    pub fn add_driver(
        &mut self,
        id: u64,
        name: &str,
        birth_date: NaiveDate,
        career_start: NaiveDate,
        cash: f64,
    ) -> Result<()> {
        self.drivers.insert(Driver::new(
            id,
            name.to_string(),
            birth_date,
            career_start,
            cash,
        ))
    }

    /// Buy a car for a driver.
    ///
    /// Check order: duplicate identifier, owner reference, then funds.
    /// Either every check passes and the debit + insert both apply, or
    /// nothing is mutated.
    #[allow(clippy::too_many_arguments)]
    pub fn buy_car(
        &mut self,
        id: u64,
        driver_id: u64,
        color: &str,
        make: &str,
        year: i32,
        power: u32,
        price: f64,
    ) -> Result<()> {
        if self.cars.contains(id) {
            return Err(RegistryError::IdentifierInUse(id));
        }
        let driver = self
            .drivers
            .find_mut(driver_id)
            .ok_or(RegistryError::DriverNotFound)?;
        if driver.cash < price {
            return Err(RegistryError::InsufficientFunds {
                price,
                balance: driver.cash,
            });
        }

        driver.debit(price);
        self.cars.insert(Car::new(
            id,
            driver_id,
            color.to_string(),
            make.to_string(),
            year,
            power,
            price,
        ))
    }

    /// Sell a car: credit its stored price back to the owning driver and
    /// remove it. The identifier is simply absent from later lookups.
    pub fn sell_car(&mut self, car_id: u64) -> Result<()> {
        let car = self.cars.find(car_id).ok_or(RegistryError::CarNotFound)?;
        let (driver_id, price) = (car.driver_id, car.price);

        let driver = self
            .drivers
            .find_mut(driver_id)
            .ok_or(RegistryError::DriverNotFound)?;
        driver.credit(price);
        self.cars.remove(car_id);
        Ok(())
    }

    /// Repaint a car, overwriting its color unconditionally.
    pub fn repaint_car(&mut self, car_id: u64, color: &str) -> Result<()> {
        let car = self
            .cars
            .find_mut(car_id)
            .ok_or(RegistryError::CarNotFound)?;
        car.color = color.to_string();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn driver_name(&self, driver_id: u64) -> Result<String> {
        self.drivers
            .find(driver_id)
            .map(|d| d.name.clone())
            .ok_or(RegistryError::DriverNotFound)
    }

    /// Current cash balance of the driver.
    pub fn balance(&self, driver_id: u64) -> Result<f64> {
        self.drivers
            .find(driver_id)
            .map(|d| d.cash)
            .ok_or(RegistryError::DriverNotFound)
    }

    pub fn car_color(&self, car_id: u64) -> Result<String> {
        self.cars
            .find(car_id)
            .map(|c| c.color.clone())
            .ok_or(RegistryError::CarNotFound)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All driver identifiers, ascending.
    pub fn drivers(&self) -> Vec<u64> {
        store::sorted_ids(self.drivers.iter())
    }

    /// Identifiers of the driver's cars, ascending. A driver with no cars
    /// yields an empty list, not an error.
    pub fn driver_cars(&self, driver_id: u64) -> Result<Vec<u64>> {
        if !self.drivers.contains(driver_id) {
            return Err(RegistryError::DriverNotFound);
        }
        Ok(store::sorted_ids(self.cars_of(driver_id)))
    }

    /// Driver with the earliest career start, ties resolved to the lowest
    /// id. An empty registry has no answer rather than an error.
    pub fn most_experienced(&self) -> Option<u64> {
        store::min_id_by(self.drivers.iter(), |a, b| {
            a.career_start.cmp(&b.career_start)
        })
    }

    /// Driver with the latest career start, ties resolved to the lowest id.
    pub fn least_experienced(&self) -> Option<u64> {
        store::max_id_by(self.drivers.iter(), |a, b| {
            a.career_start.cmp(&b.career_start)
        })
    }

    /// Highest-priced car across all garages, ties resolved to the lowest
    /// id. Fails when no cars exist.
    pub fn most_expensive_car(&self) -> Result<u64> {
        store::max_id_by(self.cars.iter(), |a, b| a.price.total_cmp(&b.price))
            .ok_or(RegistryError::CarNotFound)
    }

    /// Highest-powered car across all garages, ties resolved to the lowest
    /// id. Fails when no cars exist.
    pub fn most_powerful_car(&self) -> Result<u64> {
        store::max_id_by(self.cars.iter(), |a, b| a.power.cmp(&b.power))
            .ok_or(RegistryError::CarNotFound)
    }

    /// Identifiers of all cars of the given make, ascending.
    /// Brand matching is case-insensitive.
    pub fn cars_by_brand(&self, brand: &str) -> Vec<u64> {
        let wanted = brand.to_lowercase();
        store::sorted_ids(
            self.cars
                .iter()
                .filter(|c| c.make.to_lowercase() == wanted),
        )
    }

    /// All distinct makes in first-seen order, duplicates removed.
    /// The only listing with no identifier to sort by.
    pub fn brands(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for car in self.cars.iter() {
            if !seen.iter().any(|b| b == &car.make) {
                seen.push(car.make.clone());
            }
        }
        seen
    }

    /// Combined price of everything in the driver's garage, zero when the
    /// garage is empty.
    pub fn net_worth(&self, driver_id: u64) -> Result<f64> {
        if !self.drivers.contains(driver_id) {
            return Err(RegistryError::DriverNotFound);
        }
        Ok(self.cars_of(driver_id).map(|c| c.price).sum())
    }

    /// Count registered drivers
    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    /// Count cars currently held
    pub fn car_count(&self) -> usize {
        self.cars.len()
    }

    fn cars_of(&self, driver_id: u64) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(move |c| c.driver_id == driver_id)
    }
}

impl Default for GarageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
