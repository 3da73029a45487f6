//! Fixed-capacity sets of property keys.
//!
//! A [`PropertyKeySet`] records which properties of a component are dirty, i.e. changed since
//! the last sync with the host. Membership is one bit per code, so every operation is a few
//! word operations and the set is `Copy`. Iteration order is ascending code order, which is
//! the order the wire encoding emits.

use std::{fmt, iter::FusedIterator, marker::PhantomData};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::tables::KeyTable;

const WORDS: usize = 3;

/// Number of distinct codes a [`PropertyKeySet`] can hold. Every table version is checked
/// against this at compile time.
pub const CAPACITY: usize = WORDS * 64;

/// A set of keys of one table version.
///
/// ```rust
/// use propkeys::{keyset::PropertyKeySet, tables::current::PropertyKey};
///
/// let mut dirty = PropertyKeySet::new();
/// dirty.insert(PropertyKey::Opacity);
/// dirty.insert(PropertyKey::Bounds);
///
/// assert!(dirty.contains(PropertyKey::Opacity));
/// assert_eq!(dirty.iter().collect::<Vec<_>>(), [PropertyKey::Bounds, PropertyKey::Opacity]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyKeySet<K: KeyTable> {
    bits: [u64; WORDS],
    _marker: PhantomData<K>,
}

impl<K: KeyTable> PropertyKeySet<K> {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        PropertyKeySet {
            bits: [0; WORDS],
            _marker: PhantomData,
        }
    }

    /// A set holding every key of the version.
    #[must_use]
    pub fn all() -> Self {
        K::iter().collect()
    }

    fn slot(key: K) -> (usize, u64) {
        let code = usize::from(key.code());
        (code / 64, 1u64 << (code % 64))
    }

    /// Add `key`. Returns true if it was not already present.
    pub fn insert(&mut self, key: K) -> bool {
        let (word, mask) = Self::slot(key);
        let fresh = self.bits[word] & mask == 0;
        self.bits[word] |= mask;
        fresh
    }

    /// Remove `key`. Returns true if it was present.
    pub fn remove(&mut self, key: K) -> bool {
        let (word, mask) = Self::slot(key);
        let present = self.bits[word] & mask != 0;
        self.bits[word] &= !mask;
        present
    }

    /// Returns true if `key` is in the set.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        let (word, mask) = Self::slot(key);
        self.bits[word] & mask != 0
    }

    /// Number of keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if the set holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|w| *w == 0)
    }

    /// Remove all keys.
    pub fn clear(&mut self) {
        self.bits = [0; WORDS];
    }

    /// Keys present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        for (dst, src) in out.bits.iter_mut().zip(other.bits.iter()) {
            *dst |= *src;
        }
        out
    }

    /// Keys present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = *self;
        for (dst, src) in out.bits.iter_mut().zip(other.bits.iter()) {
            *dst &= *src;
        }
        out
    }

    /// Iterate keys in ascending code order.
    #[must_use]
    pub fn iter(&self) -> Iter<K> {
        Iter {
            bits: self.bits,
            word: 0,
            _marker: PhantomData,
        }
    }
}

impl<K: KeyTable> Default for PropertyKeySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyTable> fmt::Debug for PropertyKeySet<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(KeyTable::name)).finish()
    }
}

impl<K: KeyTable> FromIterator<K> for PropertyKeySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: KeyTable> Extend<K> for PropertyKeySet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: KeyTable> IntoIterator for PropertyKeySet<K> {
    type Item = K;
    type IntoIter = Iter<K>;

    fn into_iter(self) -> Iter<K> {
        self.iter()
    }
}

impl<K: KeyTable> IntoIterator for &PropertyKeySet<K> {
    type Item = K;
    type IntoIter = Iter<K>;

    fn into_iter(self) -> Iter<K> {
        self.iter()
    }
}

/// Serializes as an array of codes, ascending.
impl<K: KeyTable> Serialize for PropertyKeySet<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(KeyTable::code))
    }
}

impl<'de, K: KeyTable> Deserialize<'de> for PropertyKeySet<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<K>::deserialize(deserializer)?.into_iter().collect())
    }
}

/// Iterator over the keys of a [`PropertyKeySet`].
#[derive(Clone)]
pub struct Iter<K: KeyTable> {
    bits: [u64; WORDS],
    word: usize,
    _marker: PhantomData<K>,
}

impl<K: KeyTable> Iterator for Iter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while self.word < WORDS {
            let bits = self.bits[self.word];
            if bits == 0 {
                self.word += 1;
                continue;
            }

            let bit = bits.trailing_zeros() as usize;
            self.bits[self.word] &= bits - 1;

            // Bits only ever come from keys of K, so this always resolves
            if let Some(key) = u16::try_from(self.word * 64 + bit)
                .ok()
                .and_then(K::from_code)
            {
                return Some(key);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits[self.word.min(WORDS)..]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        (remaining, Some(remaining))
    }
}

impl<K: KeyTable> ExactSizeIterator for Iter<K> {}

impl<K: KeyTable> FusedIterator for Iter<K> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{current, legacy};

    #[test]
    fn test_insert_remove() {
        let mut set = PropertyKeySet::<current::PropertyKey>::new();
        assert!(set.is_empty());

        assert!(set.insert(current::PropertyKey::Wrap));
        assert!(!set.insert(current::PropertyKey::Wrap));
        assert!(set.insert(current::PropertyKey::ScrollDirection));
        assert_eq!(set.len(), 2);
        assert!(set.contains(current::PropertyKey::Wrap));
        assert!(!set.contains(current::PropertyKey::Opacity));

        assert!(set.remove(current::PropertyKey::Wrap));
        assert!(!set.remove(current::PropertyKey::Wrap));
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_iter_order_across_words() {
        use current::PropertyKey as A;

        let set: PropertyKeySet<A> = [A::Wrap, A::Graphic, A::Opacity, A::ScrollDirection, A::Position]
            .into_iter()
            .collect();

        let keys: Vec<A> = set.iter().collect();
        assert_eq!(
            keys,
            [A::ScrollDirection, A::Graphic, A::Opacity, A::Position, A::Wrap]
        );
        assert_eq!(set.iter().len(), 5);
    }

    #[test]
    fn test_all() {
        let all = PropertyKeySet::<legacy::PropertyKey>::all();
        assert_eq!(all.len(), 175);
        assert_eq!(all.iter().last(), Some(legacy::PropertyKey::Wrap));
    }

    #[test]
    fn test_union_intersection() {
        use current::PropertyKey as A;

        let left: PropertyKeySet<A> = [A::Color, A::Text].into_iter().collect();
        let right: PropertyKeySet<A> = [A::Text, A::Width].into_iter().collect();

        let union = left.union(&right);
        assert_eq!(union.len(), 3);

        let both = left.intersection(&right);
        assert_eq!(both.iter().collect::<Vec<_>>(), [A::Text]);
    }

    #[test]
    fn test_serde_codes() {
        use current::PropertyKey as A;

        let set: PropertyKeySet<A> = [A::Width, A::Color].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[29,175]");

        let back: PropertyKeySet<A> = serde_json::from_str("[175,29,29]").unwrap();
        assert_eq!(back, set);

        assert!(serde_json::from_str::<PropertyKeySet<legacy::PropertyKey>>("[175]").is_err());
    }

    #[test]
    fn test_debug_names() {
        let mut set = PropertyKeySet::new();
        set.insert(legacy::PropertyKey::Opacity);
        assert_eq!(format!("{:?}", set), "{\"kPropertyOpacity\"}");
    }
}
