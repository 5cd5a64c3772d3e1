//! `Cache-Control` header values.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Builder for a `Cache-Control` value.
///
/// Directives always render in the same order regardless of the order the
/// builder methods were called in:
///
/// ```
/// use notionkit::utils::CacheControl;
///
/// let value = CacheControl::new()
///     .stale_while_revalidate(86400)
///     .s_maxage(300)
///     .max_age(60);
/// assert_eq!(
///     value.to_string(),
///     "public, max-age=60, s-maxage=300, stale-while-revalidate=86400"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CacheControl {
    visibility: Visibility,
    no_cache: bool,
    no_store: bool,
    max_age: Option<u32>,
    s_maxage: Option<u32>,
    stale_while_revalidate: Option<u32>,
    stale_if_error: Option<u32>,
    must_revalidate: bool,
    immutable: bool,
}

impl CacheControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    pub fn no_cache(mut self) -> Self {
        self.no_cache = true;
        self
    }

    pub fn no_store(mut self) -> Self {
        self.no_store = true;
        self
    }

    pub fn max_age(mut self, seconds: u32) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn s_maxage(mut self, seconds: u32) -> Self {
        self.s_maxage = Some(seconds);
        self
    }

    pub fn stale_while_revalidate(mut self, seconds: u32) -> Self {
        self.stale_while_revalidate = Some(seconds);
        self
    }

    pub fn stale_if_error(mut self, seconds: u32) -> Self {
        self.stale_if_error = Some(seconds);
        self
    }

    pub fn must_revalidate(mut self) -> Self {
        self.must_revalidate = true;
        self
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut directives = vec![match self.visibility {
            Visibility::Public => "public".to_string(),
            Visibility::Private => "private".to_string(),
        }];

        if self.no_cache {
            directives.push("no-cache".to_string());
        }
        if self.no_store {
            directives.push("no-store".to_string());
        }
        let timed = [
            ("max-age", self.max_age),
            ("s-maxage", self.s_maxage),
            ("stale-while-revalidate", self.stale_while_revalidate),
            ("stale-if-error", self.stale_if_error),
        ];
        for (name, seconds) in timed {
            if let Some(seconds) = seconds {
                directives.push(format!("{}={}", name, seconds));
            }
        }
        if self.must_revalidate {
            directives.push("must-revalidate".to_string());
        }
        if self.immutable {
            directives.push("immutable".to_string());
        }

        write!(f, "{}", directives.join(", "))
    }
}
