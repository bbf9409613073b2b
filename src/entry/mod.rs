//! Entry module — the KeePass row built from one decrypted secret.
//!
//! The layout of a `pass` secret is a convention, not a format: the first
//! line is the password and the rest is free text. A few `key: value` lines
//! are lifted into their own columns; everything else ends up in Notes.

pub mod lines;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::store::SecretId;

use lines::split_lines;

/// One row of the KeePass 2 CSV import file.
///
/// Field order here is the column order in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    #[serde(rename = "Group")]
    pub group: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl Entry {
    /// Header row, matching the serde names of the fields above.
    pub const FIELDS: [&'static str; 6] = ["Group", "Title", "Username", "Password", "URL", "Notes"];

    /// Parse the plaintext of a secret into a row.
    ///
    /// Username takes the text between the first and second colon of a
    /// `username:`/`user:` line, untrimmed. URL removes every `"URL: "` from
    /// the line. Existing exports depend on both, keep them as they are.
    pub fn parse(id: &SecretId, plaintext: &str) -> Self {
        let mut entry = Entry {
            group: id.group.clone(),
            title: id.title.clone(),
            username: String::new(),
            password: String::new(),
            url: String::new(),
            notes: String::new(),
        };

        let mut lines = split_lines(plaintext).into_iter();
        let Some(password) = lines.next() else {
            return entry;
        };
        entry.password = password.to_string();

        let mut notes = Vec::new();
        for line in lines {
            let lowered = line.to_lowercase();
            if lowered.starts_with("username:") || lowered.starts_with("user:") {
                entry.username = line.split(':').nth(1).unwrap_or_default().to_string();
                continue;
            }
            if line.starts_with("URL:") {
                entry.url = line.replace("URL: ", "");
                continue;
            }
            notes.push(line);
        }
        entry.notes = notes.join("\n");

        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> SecretId {
        SecretId::new("personal", "email")
    }

    #[test]
    fn empty_secret_only_has_group_and_title() {
        let entry = Entry::parse(&id(), "");
        assert_eq!(entry.group, "personal");
        assert_eq!(entry.title, "email");
        assert_eq!(entry.username, "");
        assert_eq!(entry.password, "");
        assert_eq!(entry.url, "");
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn first_line_is_password() {
        let entry = Entry::parse(&id(), "hunter2\n");
        assert_eq!(entry.password, "hunter2");
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn password_keeps_surrounding_whitespace() {
        let entry = Entry::parse(&id(), "  spaced out \nnote");
        assert_eq!(entry.password, "  spaced out ");
    }

    #[test]
    fn single_blank_line_gives_empty_password() {
        let entry = Entry::parse(&id(), "\n");
        assert_eq!(entry.password, "");
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn username_keeps_leading_space() {
        let entry = Entry::parse(&id(), "pw\nUsername: alice");
        assert_eq!(entry.username, " alice");
    }

    #[test]
    fn user_prefix_is_case_insensitive() {
        assert_eq!(Entry::parse(&id(), "pw\nUser: bob").username, " bob");
        assert_eq!(Entry::parse(&id(), "pw\nUSERNAME:carol").username, "carol");
        assert_eq!(Entry::parse(&id(), "pw\nuser:  dave ").username, "  dave ");
    }

    #[test]
    fn username_stops_at_second_colon() {
        let entry = Entry::parse(&id(), "pw\nusername: domain:alice");
        assert_eq!(entry.username, " domain");
    }

    #[test]
    fn username_like_words_without_colon_go_to_notes() {
        let entry = Entry::parse(&id(), "pw\nusernames are case sensitive");
        assert_eq!(entry.username, "");
        assert_eq!(entry.notes, "usernames are case sensitive");
    }

    #[test]
    fn last_username_line_wins() {
        let entry = Entry::parse(&id(), "pw\nuser: first\nusername: second");
        assert_eq!(entry.username, " second");
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn url_prefix_is_removed() {
        let entry = Entry::parse(&id(), "pw\nURL: http://example.com");
        assert_eq!(entry.url, "http://example.com");
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn url_removes_every_occurrence_of_prefix() {
        let entry = Entry::parse(&id(), "pw\nURL: http://a.com/URL: b");
        assert_eq!(entry.url, "http://a.com/b");
    }

    #[test]
    fn url_without_space_keeps_the_prefix() {
        let entry = Entry::parse(&id(), "pw\nURL:http://example.com");
        assert_eq!(entry.url, "URL:http://example.com");
    }

    #[test]
    fn url_prefix_is_case_sensitive() {
        let entry = Entry::parse(&id(), "pw\nurl: http://example.com");
        assert_eq!(entry.url, "");
        assert_eq!(entry.notes, "url: http://example.com");
    }

    #[test]
    fn username_check_wins_over_url_check() {
        // A line can only land in one column; username is tested first.
        let entry = Entry::parse(&id(), "pw\nuser:URL: x");
        assert_eq!(entry.username, "URL");
        assert_eq!(entry.url, "");
    }

    #[test]
    fn other_lines_become_notes_in_order() {
        let entry = Entry::parse(&id(), "pw\nfirst\nUsername: u\n\nsecond\nURL: x\nthird\n");
        assert_eq!(entry.notes, "first\n\nsecond\nthird");
    }

    #[test]
    fn crlf_secrets_are_split_cleanly() {
        let entry = Entry::parse(&id(), "pw\r\nUsername: jdoe\r\nnote\r\n");
        assert_eq!(entry.password, "pw");
        assert_eq!(entry.username, " jdoe");
        assert_eq!(entry.notes, "note");
    }

    #[test]
    fn full_secret_parses_into_all_columns() {
        let plaintext = "mypassword\nUsername: jdoe\nURL: http://mail.example.com\nsome note";
        let entry = Entry::parse(&id(), plaintext);
        assert_eq!(
            entry,
            Entry {
                group: "personal".into(),
                title: "email".into(),
                username: " jdoe".into(),
                password: "mypassword".into(),
                url: "http://mail.example.com".into(),
                notes: "some note".into(),
            }
        );
    }
}
