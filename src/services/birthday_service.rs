/// Birthday service - finds the members whose birthday falls on a date
use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::directory::Directory;
use crate::models::{Announcement, Error, MemberRecord};
use crate::utils::datetime::matches_birthday;
use crate::utils::message_formatter::compose_announcement;

/// Find all active members and strip those without a birthday
///
/// Members with an empty or missing displayName are kept here; only the
/// composer cares about names. Directory order is preserved.
pub async fn all_members_with_birthdays(
    directory: &mut Directory,
) -> Result<Vec<MemberRecord>, Error> {
    let active_members = directory.search_active_members().await?;

    let mut members = Vec::new();
    for member in active_members {
        if member.birthdate()?.is_none() {
            continue;
        }
        members.push(member);
    }
    Ok(members)
}

/// Find all members whose birthday falls on the given date
pub async fn members_with_birthdays_on_date(
    directory: &mut Directory,
    date: NaiveDate,
) -> Result<Vec<MemberRecord>, Error> {
    let all_members = all_members_with_birthdays(directory).await?;
    filter_birthdays_on(all_members, date.month(), date.day())
}

/// Keep the members whose extracted birthday matches month and day
///
/// Years are ignored on both sides; input order is preserved.
pub fn filter_birthdays_on(
    members: Vec<MemberRecord>,
    month: u32,
    day: u32,
) -> Result<Vec<MemberRecord>, Error> {
    let mut matching = Vec::new();
    for member in members {
        let Some(birthday) = member.birthdate()? else {
            continue;
        };
        if !matches_birthday(birthday.month, birthday.day, month, day) {
            continue;
        }
        matching.push(member);
    }
    Ok(matching)
}

/// Compose the announcement for the given date, if anyone has a birthday
pub async fn birthday_message(
    directory: &mut Directory,
    today: NaiveDate,
) -> Result<Option<Announcement>, Error> {
    let birthdays = members_with_birthdays_on_date(directory, today).await?;
    info!("Found {} birthday(s) on {}", birthdays.len(), today);
    compose_announcement(&birthdays, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, birthdays: &[&str]) -> MemberRecord {
        MemberRecord {
            display_names: vec![name.to_string()],
            common_name: Some(name.to_lowercase()),
            birthday_raw: birthdays.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_filter_keeps_matching_members_in_order() {
        let members = vec![
            member("Alice", &["19900615000000Z"]),
            member("Bob", &["19851224000000Z"]),
            member("Carol", &["20010615000000Z"]),
        ];

        let matching = filter_birthdays_on(members, 6, 15).unwrap();

        let names: Vec<_> = matching
            .iter()
            .map(|m| m.display_names[0].as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_filter_empty_collection() {
        let matching = filter_birthdays_on(Vec::new(), 6, 15).unwrap();
        assert!(matching.is_empty());
    }

    #[test]
    fn test_filter_no_matches() {
        let members = vec![member("Alice", &["19900615000000Z"])];

        let matching = filter_birthdays_on(members, 1, 1).unwrap();
        assert!(matching.is_empty());
    }

    #[test]
    fn test_filter_skips_members_without_birthday() {
        let members = vec![member("Alice", &[]), member("Bob", &["19900615000000Z"])];

        let matching = filter_birthdays_on(members, 6, 15).unwrap();

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].display_names[0], "Bob");
    }

    #[test]
    fn test_filter_propagates_malformed_birthday() {
        let members = vec![member("Alice", &["not-a-date"])];

        assert!(filter_birthdays_on(members, 6, 15).is_err());
    }
}
