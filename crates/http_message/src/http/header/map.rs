use super::{HeaderName, HeaderValue};

/// An ordered, case-insensitive multi-map of headers
///
/// Entries keep the position of their first insertion. [`HeaderMap::insert`] stores the new
/// name spelling, [`HeaderMap::append`] keeps the existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(size: usize) -> Self {
        Self {
            entries: Vec::with_capacity(size),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n.is(name))
    }

    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Replaces the values of `name`, keeping its position when it is already present
    pub fn insert(&mut self, name: impl Into<HeaderName>, value: HeaderValue) {
        let name = name.into();
        match self.position(name.as_str()) {
            Some(idx) => self.entries[idx] = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    /// Like [`HeaderMap::insert`], but a new entry goes to the front
    pub fn insert_first(&mut self, name: impl Into<HeaderName>, value: HeaderValue) {
        let name = name.into();
        match self.position(name.as_str()) {
            Some(idx) => self.entries[idx] = (name, value),
            None => self.entries.insert(0, (name, value)),
        }
    }

    /// Adds values to `name`, creating the entry when missing
    ///
    /// An existing entry keeps its name spelling.
    pub fn append(&mut self, name: impl Into<HeaderName>, values: impl IntoIterator<Item = String>) {
        let name = name.into();
        match self.position(name.as_str()) {
            Some(idx) => self.entries[idx].1.extend(values),
            None => self.entries.push((name, values.into_iter().collect())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<HeaderValue> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderMap
where
    N: Into<HeaderName>,
    V: uhsapi::http::IntoHeaderValues,
{
    /// Repeated names are combined into the first entry
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = HeaderMap::new();
        for (name, values) in iter {
            map.append(name, values.into_header_values());
        }
        map
    }
}
