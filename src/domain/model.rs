use crate::utils::error::{BookingError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency amount in cents.
///
/// Parsed from the decimal strings the backend and the page emit (`"45.00"`, `"45"`,
/// `"45.5"`) and displayed as `$45.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price {
    cents: u64,
}

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    /// Decimal form without the currency sign, e.g. `45.00`.
    pub fn amount(&self) -> String {
        format!("{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl FromStr for Price {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BookingError::InvalidPrice {
            value: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('$');
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        if whole.is_empty()
            || fraction.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Price::from_cents)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Price {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Price> for String {
    fn from(price: Price) -> Self {
        price.amount()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount())
    }
}

/// Something that can be offered as an entry of a selection control.
pub trait Selectable {
    fn id(&self) -> u64;
    fn option_label(&self) -> String;
}

/// A bookable offering from the page's service list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub price: Price,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Selectable for Service {
    fn id(&self) -> u64 {
        self.id
    }

    fn option_label(&self) -> String {
        format!("{} - {}", self.name, self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: u64,
    pub name: String,
    pub specialization: String,
}

impl Selectable for StaffMember {
    fn id(&self) -> u64 {
        self.id
    }

    fn option_label(&self) -> String {
        format!("{} - {}", self.name, self.specialization)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: u64,
    pub date: NaiveDate,
    pub time_slot: String,
}

impl Selectable for ScheduleSlot {
    fn id(&self) -> u64 {
        self.id
    }

    fn option_label(&self) -> String {
        format!("{} - {}", self.date.format("%Y-%m-%d"), self.time_slot)
    }
}

/// The page's pre-rendered service options, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn get(&self, id: u64) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
