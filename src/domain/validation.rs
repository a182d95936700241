// Credential format rules shared by sign-in and sign-up.

// Minimum password length for new accounts, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

// Characters that may never appear unquoted in the local part.
const LOCAL_PART_SPECIALS: &[char] = &[
    '<', '>', '(', ')', '[', ']', '\\', '.', ',', ';', ':', '@', '"',
];

// Accepts local-part@domain where the domain is either dotted labels ending in an
// alphabetic TLD of at least two letters, or a bracketed IPv4 literal.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

pub fn meets_password_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

fn is_valid_local_part(local: &str) -> bool {
    if is_quoted(local) {
        return true;
    }

    // Splitting on '.' yields an empty atom for leading, trailing or doubled dots.
    !local.is_empty() && local.split('.').all(is_valid_atom)
}

fn is_quoted(local: &str) -> bool {
    local.len() >= 3 && local.starts_with('"') && local.ends_with('"')
}

fn is_valid_atom(atom: &str) -> bool {
    !atom.is_empty()
        && atom
            .chars()
            .all(|c| !c.is_whitespace() && !LOCAL_PART_SPECIALS.contains(&c))
}

fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return is_ipv4_literal(literal);
    }

    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let labels_ok = labels.split('.').all(|label| {
        !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    labels_ok && tld_ok
}

fn is_ipv4_literal(literal: &str) -> bool {
    let octets: Vec<&str> = literal.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            (1..=3).contains(&octet.len())
                && octet.chars().all(|c| c.is_ascii_digit())
                && octet.parse::<u8>().is_ok()
        })
}
