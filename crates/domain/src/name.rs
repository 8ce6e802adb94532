//! Domain-name helpers shared by the record builders and the backend adapters.
//!
//! Names handed around the crate are absolute (trailing dot). Comparisons
//! are ASCII case-insensitive.

/// Append the trailing dot when missing.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Lowercased absolute form, used as the key for every name comparison.
pub fn normalize(name: &str) -> String {
    fqdn(name).to_ascii_lowercase()
}

pub fn names_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether `name` is `zone` itself or lies below it, on label boundaries.
pub fn is_subdomain(zone: &str, name: &str) -> bool {
    let zone = normalize(zone);
    let name = normalize(name);

    if zone == "." || zone == name {
        return true;
    }
    name.strip_suffix(zone.as_str())
        .is_some_and(|prefix| prefix.ends_with('.'))
}

fn labels(name: &str) -> impl DoubleEndedIterator<Item = &str> {
    name.split('.').filter(|label| !label.is_empty())
}

/// Turn a backend key into the domain it describes.
///
/// The first path segment is the store prefix and is dropped:
/// `/skydns/local/skydns/x` becomes `x.skydns.local.`.
pub fn domain_from_key(key: &str) -> String {
    let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).skip(1).collect();
    let reversed: Vec<&str> = segments.into_iter().rev().collect();
    fqdn(&reversed.join("."))
}

/// Inverse of [`domain_from_key`]: `x.skydns.local.` under prefix `skydns`
/// becomes `/skydns/local/skydns/x`.
pub fn path_from_name(name: &str, prefix: &str) -> String {
    let mut path = format!("/{}", prefix.trim_matches('/'));
    for label in labels(name).rev() {
        path.push('/');
        path.push_str(&label.to_ascii_lowercase());
    }
    path
}

/// Drop `count` leading labels from `name`, always keeping the last one.
pub fn target_strip(name: &str, count: usize) -> String {
    if count == 0 {
        return name.to_string();
    }
    let all: Vec<&str> = labels(name).collect();
    let skip = count.min(all.len().saturating_sub(1));
    fqdn(&all[skip..].join("."))
}

/// Split text into DNS character-strings of at most 255 bytes, never cutting
/// a UTF-8 sequence in half.
pub fn split_txt(text: &str) -> Vec<String> {
    const MAX_CHUNK: usize = 255;

    let mut chunks = Vec::new();
    let mut rest = text;
    while rest.len() > MAX_CHUNK {
        let mut cut = MAX_CHUNK;
        while !rest.is_char_boundary(cut) {
            cut -= 1;
        }
        let (head, tail) = rest.split_at(cut);
        chunks.push(head.to_string());
        rest = tail;
    }
    chunks.push(rest.to_string());
    chunks
}
