//! Icon reference normalization.
//!
//! `href` values pulled from icon link declarations arrive in four shapes:
//! absolute, protocol-relative, root-relative, and bare. Classification is
//! by string prefix with first match winning, so `//cdn...` is caught
//! before the bare `/` rule gets a look.

type Transform = fn(&str, &str) -> String;

/// Prefix rules evaluated in order. Anything that matches none of them is
/// treated as origin-relative.
const RULES: &[(&str, Transform)] = &[
    ("http", keep_absolute),
    ("//", inherit_scheme),
    ("/", join_from_root),
];

/// Normalize a raw icon reference against the page origin.
///
/// The output is not validated; a malformed reference yields a malformed
/// URL that simply fails verification later.
pub fn normalize(origin: &str, href: &str) -> String {
    for (prefix, transform) in RULES {
        if href.starts_with(prefix) {
            return transform(origin, href);
        }
    }
    join_relative(origin, href)
}

fn keep_absolute(_origin: &str, href: &str) -> String {
    href.to_string()
}

/// `//cdn.example.com/icon.png` inherits the origin's scheme.
fn inherit_scheme(origin: &str, href: &str) -> String {
    let scheme = origin.split_once("//").map_or(origin, |(scheme, _)| scheme);
    format!("{scheme}{href}")
}

fn join_from_root(origin: &str, href: &str) -> String {
    format!("{origin}{href}")
}

fn join_relative(origin: &str, href: &str) -> String {
    format!("{origin}/{href}")
}
