/// Pure functions composing the announcement text
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::constants::{MESSAGE_FOOTER, MULTI_BIRTHDAY_SUBJECT};
use crate::models::{Announcement, Error, MemberRecord};

/// Compose the announcement for the given matching members
///
/// Returns `Ok(None)` when there is nothing to announce.
pub fn compose_announcement(
    members: &[MemberRecord],
    target: NaiveDate,
) -> Result<Option<Announcement>, Error> {
    if members.is_empty() {
        return Ok(None);
    }

    let subject = build_subject(members)?;
    let body = build_body(members, target.year())?;

    Ok(Some(Announcement { subject, body }))
}

/// Subject line for one or several birthdays
fn build_subject(members: &[MemberRecord]) -> Result<String, Error> {
    if members.len() > 1 {
        return Ok(MULTI_BIRTHDAY_SUBJECT.to_string());
    }

    let initial = members[0]
        .display_initial()
        .ok_or("sole birthday member has no display name")?;
    Ok(format!("{}'s Birthday", initial))
}

/// One line per named member, in input order, then the fixed closing text
fn build_body(members: &[MemberRecord], target_year: i32) -> Result<String, Error> {
    let mut body = String::new();
    for member in members {
        let Some(birthday) = member.birthdate()? else {
            continue;
        };
        let Some(initial) = member.display_initial() else {
            debug!(
                "Skipping member without a display name: {:?}",
                member.common_name
            );
            continue;
        };
        let age = birthday.age_in_year(target_year);
        body.push_str(&format!("{} is {} years old.\n", initial, age));
    }
    body.push_str(MESSAGE_FOOTER);
    Ok(body)
}
