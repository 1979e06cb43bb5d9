use ldap3::{Ldap, LdapConnAsync, Scope, SearchEntry};
use tracing::info;

use crate::models::{Error, MemberRecord};

/// Attributes fetched for every member entry
const MEMBER_ATTRS: [&str; 3] = ["displayName", "cn", "birthday"];

/// Filter selecting members flagged active
const ACTIVE_FILTER: &str = "(active=1)";

/// Directory connection wrapper
///
/// Handles the LDAP side of a run: one bind as the invoking user, one
/// search for active members.
pub struct Directory {
    ldap: Ldap,
    search_base: String,
}

impl Directory {
    /// Connect to the directory and bind as the given user
    pub async fn bind(
        url: &str,
        search_base: &str,
        user: &str,
        password: &str,
    ) -> Result<Self, Error> {
        let (conn, mut ldap) = LdapConnAsync::new(url).await?;
        ldap3::drive!(conn);

        let bind_dn = format!("uid={},{}", user, search_base);
        ldap.simple_bind(&bind_dn, password).await?.success()?;
        info!("Bound to directory as {}", bind_dn);

        Ok(Self {
            ldap,
            search_base: search_base.to_string(),
        })
    }

    /// Search for all active members, in the order the directory returns them
    pub async fn search_active_members(&mut self) -> Result<Vec<MemberRecord>, Error> {
        let (entries, _result) = self
            .ldap
            .search(
                &self.search_base,
                Scope::Subtree,
                ACTIVE_FILTER,
                MEMBER_ATTRS,
            )
            .await?
            .success()?;

        info!("Directory returned {} active member(s)", entries.len());

        Ok(entries
            .into_iter()
            .map(|entry| MemberRecord::from_search_entry(SearchEntry::construct(entry)))
            .collect())
    }
}
