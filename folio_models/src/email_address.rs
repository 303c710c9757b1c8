use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// Whether the address stays within the common form `user@host.tld`.
    ///
    /// The local part may only contain ASCII letters, digits and `_'+-.`
    /// without leading or doubled dots. The domain needs at least two labels
    /// of letters, digits and inner hyphens, ending in an alphabetic top
    /// level domain of two or more letters. Quoted local parts and IP
    /// literals are rejected.
    pub fn is_common_form(&self) -> bool {
        is_common_user(self.0.user()) && is_common_domain(self.0.domain())
    }

    pub fn with_name(self, name: String) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox {
            name: Some(name),
            email: self.0,
        })
    }
}

fn is_common_user(user: &str) -> bool {
    !user.is_empty()
        && !user.starts_with('.')
        && !user.contains("..")
        && user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
        && user
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || "_+-".contains(c))
}

fn is_common_domain(domain: &str) -> bool {
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let label = |label: &str| {
        label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) && host.split('.').all(label)
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for (input, ok) in [
            ("jane@example.com", true),
            ("max.mustermann@example.de", true),
            ("not-an-email", false),
            ("@example.com", false),
            ("jane@", false),
            ("", false),
        ] {
            assert_eq!(input.parse::<EmailAddress>().is_ok(), ok, "{input}");
        }
    }

    #[test]
    fn common_form() {
        for (input, ok) in [
            ("jane@example.com", true),
            ("jane.doe+news@mail.example.co.uk", true),
            ("o'brien@example.ie", true),
            ("jane@ex-ample.de", true),
            ("jane@example", false),
            ("jane@localhost", false),
            ("jane@[127.0.0.1]", false),
            ("\"jane doe\"@example.com", false),
            ("jane@exa_mple.com", false),
            ("jane@example.c", false),
            ("jane@example.c0m", false),
            ("jane@-example.com", false),
            ("jane!@example.com", false),
            ("jane.@example.com", false),
        ] {
            let common = input
                .parse::<EmailAddress>()
                .is_ok_and(|address| address.is_common_form());
            assert_eq!(common, ok, "{input}");
        }
    }

    #[test]
    fn with_name() {
        let address = "jane@example.com".parse::<EmailAddress>().unwrap();
        let with_name = address.clone().with_name("Jane Doe".into());
        assert_eq!(with_name.0.name.as_deref(), Some("Jane Doe"));
        assert_eq!(with_name.0.email, address.0);
    }
}
