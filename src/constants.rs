/// Newsgroup that receives production announcements
pub const PRODUCTION_NEWSGROUP: &str = "csh.noise";

/// Newsgroup used when running with --test
pub const TEST_NEWSGROUP: &str = "csh.test";

/// Posting-agent identity sent with every WebNews request
pub const API_AGENT: &str = "WebNews Birthday Bot";

/// Subject used when more than one member has a birthday.
/// The missing apostrophe is historical; posts must match earlier runs exactly.
pub const MULTI_BIRTHDAY_SUBJECT: &str = "Todays Birthdays";

/// Closing text appended to every announcement body
pub const MESSAGE_FOOTER: &str =
    "\nShower on sight!\n\n(This post was automatically generated by the WebNews Birthday Bot.)";

/// Default LDAP server
pub const DEFAULT_LDAP_URL: &str = "ldaps://ldap.csh.rit.edu";

/// Default search base for member entries
pub const DEFAULT_SEARCH_BASE: &str = "ou=Users,dc=csh,dc=rit,dc=edu";

/// Default WebNews endpoint
pub const DEFAULT_WEBNEWS_URL: &str = "https://webnews.csh.rit.edu";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthday_bot=info";
