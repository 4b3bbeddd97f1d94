//! Disallowed-domain matching for principal identifiers.

use std::collections::BTreeSet;

/// Extract the domain portion of a `<type>:<value>` principal identifier,
/// e.g. `gmail.com` from `user:tom@gmail.com`.
///
/// Returns `None` for identifiers without an `@` or with nothing after it.
pub fn principal_domain(principal: &str) -> Option<&str> {
    let value = principal
        .split_once(':')
        .map_or(principal, |(_, value)| value);

    value
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
}

/// True iff the principal's domain is configured as disallowed.
///
/// Comparison is exact and case-sensitive. Malformed principals never
/// match: an identity the engine cannot attribute to a domain is never
/// auto-revoked.
pub fn is_disallowed(principal: &str, domains: &BTreeSet<String>) -> bool {
    principal_domain(principal).map_or(false, |domain| domains.contains(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_disallowed_domain_matches() {
        let configured = domains(&["andrew.cmu.edu", "gmail.com"]);
        assert!(is_disallowed("user:tom@gmail.com", &configured));
        assert!(is_disallowed("user:someone@andrew.cmu.edu", &configured));
    }

    #[test]
    fn test_other_domain_does_not_match() {
        let configured = domains(&["andrew.cmu.edu", "gmail.com"]);
        assert!(!is_disallowed("user:tom@foo.com", &configured));
    }

    #[test]
    fn test_principal_without_at_is_never_disallowed() {
        let configured = domains(&["gmail.com"]);
        assert!(!is_disallowed("serviceAccount:gmail.com", &configured));
        assert!(!is_disallowed("allUsers", &configured));
    }

    #[test]
    fn test_empty_domain_is_never_disallowed() {
        assert!(!is_disallowed("user:tom@", &domains(&["gmail.com", ""])));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!is_disallowed("user:tom@Gmail.com", &domains(&["gmail.com"])));
    }

    #[test]
    fn test_domain_of_service_account() {
        assert_eq!(
            principal_domain("serviceAccount:sa@project.iam.gserviceaccount.com"),
            Some("project.iam.gserviceaccount.com")
        );
    }
}
