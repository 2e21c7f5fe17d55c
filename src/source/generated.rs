//! Seeded sample-user generator.

use crate::model::error::LoadError;
use crate::model::User;
use crate::source::DataProvider;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Beatriz", "Chen", "Dmitri", "Elena", "Farah", "Grace", "Hiro",
    "Ines", "Jonas", "Kwame", "Lena", "Mateo", "Nadia", "Oscar", "Priya", "Quinn", "Rosa",
    "Sven", "Tariq", "Uma", "Viktor", "Wen", "Yara", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Brennan", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hopper",
    "Ivanova", "Jensen", "Kowalski", "Lovelace", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rossi", "Silva", "Turing", "Urquhart", "Varga", "Weber", "Xu", "Yilmaz",
    "Zimmermann",
];

const CITIES: &[&str] = &[
    "Amsterdam", "Berlin", "Cairo", "Denver", "Edinburgh", "Florence", "Geneva", "Helsinki",
    "Istanbul", "Jakarta", "Kyoto", "Lisbon", "Montreal", "Nairobi", "Oslo", "Porto", "Quito",
    "Reykjavik", "Seoul", "Toronto", "Utrecht", "Valencia", "Warsaw", "Zagreb",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "inbox.test"];

/// Registration dates fall within this many days before the reference instant.
pub const REGISTRATION_WINDOW_DAYS: i64 = 2 * 365;

/// Provider that generates `count` users from a seed.
///
/// The same seed and reference instant always produce the same users.
#[derive(Debug, Clone)]
pub struct GeneratedProvider {
    count: usize,
    seed: u64,
    reference: DateTime<Utc>,
}

impl GeneratedProvider {
    /// Generator with registration dates relative to now.
    pub fn new(count: usize, seed: u64) -> Self {
        Self::with_reference(count, seed, Utc::now())
    }

    /// Generator with registration dates relative to `reference`.
    pub fn with_reference(count: usize, seed: u64, reference: DateTime<Utc>) -> Self {
        Self {
            count,
            seed,
            reference,
        }
    }

    /// Number of users produced.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Produce the users. Never fails.
    pub fn generate(&self) -> Vec<User> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let window_secs = REGISTRATION_WINDOW_DAYS * 24 * 60 * 60;

        (1..=self.count as u64)
            .map(|id| {
                let first_name = pick(&mut rng, FIRST_NAMES);
                let last_name = pick(&mut rng, LAST_NAMES);
                let city = pick(&mut rng, CITIES);
                let domain = pick(&mut rng, EMAIL_DOMAINS);
                let age_secs = rng.random_range(0..window_secs);

                User {
                    id,
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    email: format!(
                        "{}.{}{}@{}",
                        first_name.to_lowercase(),
                        last_name.to_lowercase(),
                        id,
                        domain
                    ),
                    city: city.to_string(),
                    registered_date: self.reference - Duration::seconds(age_secs),
                }
            })
            .collect()
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

impl DataProvider for GeneratedProvider {
    fn get_records(&self) -> Result<Vec<User>, LoadError> {
        let users = self.generate();
        info!(count = users.len(), seed = self.seed, "Generated users");
        Ok(users)
    }
}
