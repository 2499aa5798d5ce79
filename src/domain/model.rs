use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const VOTING_AGE: u8 = 18;
const RETIREMENT_AGE: u8 = 65;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeStage {
    Child,
    Teenager,
    Adult,
    Senior,
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LifeStage::Child => "Child",
            LifeStage::Teenager => "Teenager",
            LifeStage::Adult => "Adult",
            LifeStage::Senior => "Senior",
        };
        write!(f, "{}", label)
    }
}

impl Person {
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn is_adult(&self) -> bool {
        self.age >= VOTING_AGE
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}", self.name)
    }

    pub fn celebrate_birthday(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn life_stage(&self) -> LifeStage {
        if self.age < 13 {
            LifeStage::Child
        } else if self.age < 20 {
            LifeStage::Teenager
        } else if self.age < RETIREMENT_AGE {
            LifeStage::Adult
        } else {
            LifeStage::Senior
        }
    }

    pub fn can_vote(&self) -> bool {
        self.age >= VOTING_AGE
    }

    pub fn can_retire(&self) -> bool {
        self.age >= RETIREMENT_AGE
    }

    pub fn years_to_retirement(&self) -> u8 {
        RETIREMENT_AGE.saturating_sub(self.age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: Option<String>,
    pub value: i64,
}

impl Measurement {
    pub fn new(name: Option<String>, value: i64) -> Self {
        Self { name, value }
    }

    /// Valid when a name is present and the value is positive.
    pub fn is_valid(&self) -> bool {
        self.name.is_some() && self.value > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub customer: String,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    pub order_id: u64,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: u64,
    pub fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleSet {
    pub persons: Vec<Person>,
    pub measurements: Vec<Measurement>,
}

impl SampleSet {
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.measurements.is_empty()
    }
}

/// One exported line per person, with the derived columns filled in.
#[derive(Debug, Clone, Serialize)]
pub struct PersonRow {
    pub name: String,
    pub age: u8,
    pub life_stage: LifeStage,
    pub adult: bool,
    pub can_vote: bool,
    pub can_retire: bool,
    pub years_to_retirement: u8,
}

impl From<&Person> for PersonRow {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name.clone(),
            age: person.age,
            life_stage: person.life_stage(),
            adult: person.is_adult(),
            can_vote: person.can_vote(),
            can_retire: person.can_retire(),
            years_to_retirement: person.years_to_retirement(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub rows: Vec<PersonRow>,
    pub csv_output: String,
    pub tsv_output: String,
    pub invalid_measurements: Vec<Measurement>,
}
