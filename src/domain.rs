//! Splitting of domain names into the parts the API addresses them by.

/// A domain name split at its public suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts<'a> {
    /// Everything before the public suffix, e.g. `sub.example` for `sub.example.co.uk`.
    pub sld: &'a str,
    /// The public suffix, e.g. `co.uk`.
    pub tld: &'a str,
}

fn get_domain(s: &str) -> &str {
    s.strip_suffix('.').unwrap_or(s)
}

/// Splits `domain` into its SLD and public suffix using the public suffix list.
///
/// If no suffix can be found, the suffix is left empty and the whole domain
/// becomes the SLD. The API then rejects the request itself.
pub fn split_domain(domain: &str) -> DomainParts<'_> {
    let domain = get_domain(domain);

    let tld = match psl::suffix_str(domain) {
        Some(suffix) => suffix,
        None => {
            log::warn!("no public suffix found for {domain:?}, using an empty TLD");
            ""
        }
    };

    let sld = domain
        .strip_suffix(tld)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(domain);

    DomainParts { sld, tld }
}
