use url::Url;

const PROVIDER_HOST: &str = "github.com";
const HOST_PREFIXES: [&str; 3] = ["https://github.com/", "http://github.com/", "github.com/"];

/// Extracts the provider username from a profile URL or bare handle.
///
/// Returns `None` when the result cannot name a user: empty, containing a
/// dot, or equal to the provider host itself.
pub fn extract_username(reference: &str) -> Option<String> {
    let reference = reference.trim();
    let candidate = match Url::parse(reference) {
        Ok(url) => {
            let path = url.path();
            first_segment(path.strip_prefix('/').unwrap_or(path))
        }
        Err(_) => {
            let stripped = HOST_PREFIXES
                .iter()
                .fold(reference.to_string(), |acc, prefix| acc.replacen(prefix, "", 1));
            first_segment(&stripped)
        }
    };

    if candidate.is_empty()
        || candidate.contains('.')
        || candidate.eq_ignore_ascii_case(PROVIDER_HOST)
    {
        return None;
    }
    Some(candidate)
}

fn first_segment(path: &str) -> String {
    path.split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
