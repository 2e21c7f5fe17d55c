//! Sample user records and the column schema shown by the application.

use crate::model::error::SchemaError;
use crate::model::schema::{ColumnDescriptor, Schema};
use crate::model::table::Record;
use crate::model::value::CellValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user id.
    pub id: u64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact address.
    pub email: String,
    /// Home city.
    pub city: String,
    /// Registration instant.
    pub registered_date: DateTime<Utc>,
}

impl Record for User {
    fn key(&self) -> u64 {
        self.id
    }
}

/// Display format of registration dates, e.g. `Mar 09, 2024`.
pub const REGISTERED_DATE_FORMAT: &str = "%b %d, %Y";

/// Build the user table schema.
///
/// Columns, in declaration order: `id`, `firstName`, `lastName`,
/// `fullName`, `email`, `city`, `registeredDate`, `dsr`.
///
/// `today` is the reference instant for the derived days-since-registration
/// column. It is captured here once so every projection sees the same value.
///
/// # Errors
///
/// Returns the [`SchemaError`] from [`Schema::new`]; the declared ids are
/// unique so this only fails if the declaration above is edited badly.
pub fn user_schema(today: DateTime<Utc>) -> Result<Schema<User>, SchemaError> {
    let columns = vec![
        ColumnDescriptor::field("id", "ID", |u: &User| id_value(u.id)),
        ColumnDescriptor::field("firstName", "First Name", |u: &User| {
            CellValue::from(u.first_name.as_str())
        }),
        ColumnDescriptor::field("lastName", "Last Name", |u: &User| {
            CellValue::from(u.last_name.as_str())
        }),
        ColumnDescriptor::field("fullName", "Full Name", |u: &User| {
            CellValue::Text(format!("{} {}", u.first_name, u.last_name))
        }),
        ColumnDescriptor::field("email", "Email", |u: &User| CellValue::from(u.email.as_str())),
        ColumnDescriptor::field("city", "City", |u: &User| CellValue::from(u.city.as_str())),
        ColumnDescriptor::field("registeredDate", "Registered Date", |u: &User| {
            CellValue::Date(u.registered_date)
        })
        .with_formatter(|v| match v.as_date() {
            Some(date) => date.format(REGISTERED_DATE_FORMAT).to_string(),
            None => v.to_string(),
        })
        .with_comparator(|a, b| {
            let a = a.as_date().map(|d| d.timestamp_millis());
            let b = b.as_date().map(|d| d.timestamp_millis());
            a.cmp(&b)
        }),
        ColumnDescriptor::field("dsr", "DSR", move |u: &User| days_since(u.registered_date, today))
            .with_formatter(|v| format!("{v} days"))
            .with_comparator(|a, b| a.as_int().cmp(&b.as_int())),
    ];

    Schema::new(columns)
}

fn id_value(id: u64) -> CellValue {
    CellValue::Int(i64::try_from(id).unwrap_or(i64::MAX))
}

/// Whole days elapsed from `registered` to `today`, truncated toward zero.
///
/// A registration after `today` gives zero or a negative count.
fn days_since(registered: DateTime<Utc>, today: DateTime<Utc>) -> CellValue {
    CellValue::Int((today - registered).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::ColumnId;
    use crate::model::table::Table;
    use chrono::TimeZone;

    fn sample_user() -> User {
        User {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            city: "London".to_string(),
            registered_date: Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap(),
        }
    }

    fn today() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 19, 10, 0, 0).unwrap()
    }

    #[test]
    fn schema_declares_columns_in_display_order() {
        let ids: Vec<String> = user_schema(today())
            .unwrap()
            .ids()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(
            ids,
            vec![
                "id",
                "firstName",
                "lastName",
                "fullName",
                "email",
                "city",
                "registeredDate",
                "dsr"
            ]
        );
    }

    #[test]
    fn derived_columns_are_computed_from_fields() {
        let schema = user_schema(today()).unwrap();
        let user = sample_user();

        let full_name = schema.get(&ColumnId::from("fullName")).unwrap();
        assert_eq!(
            full_name.access(&user).unwrap(),
            CellValue::from("Ada Lovelace")
        );

        let dsr = schema.get(&ColumnId::from("dsr")).unwrap();
        let value = dsr.access(&user).unwrap();
        assert_eq!(value, CellValue::Int(9));
        assert_eq!(dsr.format(&value), "9 days");
    }

    #[test]
    fn registered_date_formats_as_month_day_year() {
        let schema = user_schema(today()).unwrap();
        let column = schema.get(&ColumnId::from("registeredDate")).unwrap();
        let value = column.access(&sample_user()).unwrap();
        assert_eq!(column.format(&value), "Mar 09, 2024");
    }

    #[test]
    fn future_registration_counts_negative_days() {
        let schema = user_schema(today()).unwrap();
        let dsr = schema.get(&ColumnId::from("dsr")).unwrap();

        let mut later_today = sample_user();
        later_today.registered_date = today() + chrono::Duration::hours(2);
        let value = dsr.access(&later_today).unwrap();
        assert_eq!(value, CellValue::Int(0));

        let mut in_two_days = sample_user();
        in_two_days.registered_date = today() + chrono::Duration::days(2);
        let value = dsr.access(&in_two_days).unwrap();
        assert_eq!(value, CellValue::Int(-2));
        assert_eq!(dsr.format(&value), "-2 days");
    }

    #[test]
    fn future_registration_still_builds_a_table() {
        let mut user = sample_user();
        user.registered_date = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let table = Table::new(user_schema(today()).unwrap(), vec![user]);
        assert!(table.is_ok());
    }

    #[test]
    fn user_json_uses_camel_case_fields() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"registeredDate\":"));

        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_user());
    }
}
