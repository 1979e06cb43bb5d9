use chrono::Datelike;
use ldap3::SearchEntry;

use crate::utils::datetime::{calculate_age, parse_birthday_string};

/// A member entry as returned by the directory
///
/// Attributes the directory omits map to empty collections or `None`;
/// "no value" is a valid state, not an error.
#[derive(Clone, Debug, Default)]
pub struct MemberRecord {
    pub display_names: Vec<String>,
    pub common_name: Option<String>,
    pub birthday_raw: Vec<String>,
}

impl MemberRecord {
    /// Build a record from a directory search entry
    pub fn from_search_entry(mut entry: SearchEntry) -> Self {
        Self {
            display_names: entry.attrs.remove("displayName").unwrap_or_default(),
            common_name: entry
                .attrs
                .remove("cn")
                .and_then(|values| values.into_iter().next()),
            birthday_raw: entry.attrs.remove("birthday").unwrap_or_default(),
        }
    }

    /// Extract the member's birthday from the stored attribute
    ///
    /// Returns `Ok(None)` when the attribute is missing or empty. A present
    /// but malformed value is an error that ends the run.
    pub fn birthdate(&self) -> Result<Option<Birthday>, Error> {
        let Some(raw) = self.birthday_raw.first() else {
            return Ok(None);
        };
        let date = parse_birthday_string(raw)?;
        Ok(Some(Birthday {
            month: date.month(),
            day: date.day(),
            year: date.year(),
        }))
    }

    /// First character of the first display name, if any
    pub fn display_initial(&self) -> Option<char> {
        self.display_names.first().and_then(|name| name.chars().next())
    }
}

/// A member's birthday; the year is kept only for age computation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Birthday {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl Birthday {
    /// Age reached on the birthday in the given year
    pub fn age_in_year(&self, year: i32) -> i32 {
        calculate_age(self.year, year)
    }
}

/// A composed post, ready for WebNews
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub subject: String,
    pub body: String,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn search_entry(attrs: &[(&str, &[&str])]) -> SearchEntry {
        SearchEntry {
            dn: "uid=test,ou=Users,dc=csh,dc=rit,dc=edu".to_string(),
            attrs: attrs
                .iter()
                .map(|(name, values)| {
                    (
                        name.to_string(),
                        values.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
            bin_attrs: HashMap::new(),
        }
    }

    #[test]
    fn test_from_search_entry_maps_attributes() {
        let member = MemberRecord::from_search_entry(search_entry(&[
            ("displayName", &["Jane Doe"]),
            ("cn", &["jane"]),
            ("birthday", &["19900615000000Z"]),
        ]));

        assert_eq!(member.display_names, vec!["Jane Doe"]);
        assert_eq!(member.common_name, Some("jane".to_string()));
        assert_eq!(member.birthday_raw, vec!["19900615000000Z"]);
    }

    #[test]
    fn test_from_search_entry_missing_attributes() {
        let member = MemberRecord::from_search_entry(search_entry(&[("cn", &["jane"])]));

        assert!(member.display_names.is_empty());
        assert!(member.birthday_raw.is_empty());
    }

    #[test]
    fn test_birthdate_missing_attribute_is_none() {
        let member = MemberRecord::default();
        assert_eq!(member.birthdate().unwrap(), None);
    }

    #[test]
    fn test_birthdate_parses_stored_value() {
        let member = MemberRecord {
            birthday_raw: vec!["19900615000000Z".to_string()],
            ..Default::default()
        };

        assert_eq!(
            member.birthdate().unwrap(),
            Some(Birthday {
                month: 6,
                day: 15,
                year: 1990,
            })
        );
    }

    #[test]
    fn test_birthdate_malformed_value_is_error() {
        let member = MemberRecord {
            birthday_raw: vec!["next tuesday".to_string()],
            ..Default::default()
        };

        assert!(member.birthdate().is_err());
    }

    #[test]
    fn test_display_initial() {
        let member = MemberRecord {
            display_names: vec!["Jane Doe".to_string()],
            ..Default::default()
        };
        assert_eq!(member.display_initial(), Some('J'));

        assert_eq!(MemberRecord::default().display_initial(), None);

        let empty_name = MemberRecord {
            display_names: vec![String::new()],
            ..Default::default()
        };
        assert_eq!(empty_name.display_initial(), None);
    }

    #[test]
    fn test_age_in_year() {
        let birthday = Birthday {
            month: 6,
            day: 15,
            year: 1990,
        };

        assert_eq!(birthday.age_in_year(2026), 36);
        assert_eq!(birthday.age_in_year(1990), 0);
    }
}
