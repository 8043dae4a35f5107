use core::fmt;

/// A concatenation of multiple borrowed strings with fixed size storage.
///
/// Conjugated forms are assembled out of a handful of borrowed pieces
/// (stem, vowel-row prefix, suffix literal), so they can be built and
/// compared without allocating until the final result is materialized.
#[derive(Clone, Copy)]
pub struct Concat<'a, const N: usize> {
    storage: [&'a str; N],
    len: usize,
}

impl<'a, const N: usize> Concat<'a, N> {
    /// An empty concatenation.
    pub const fn empty() -> Concat<'a, N> {
        Concat {
            storage: [""; N],
            len: 0,
        }
    }

    /// Push the given string onto storage.
    ///
    /// Empty strings are skipped so that optional pieces such as a
    /// compound prefix can be pushed unconditionally.
    pub fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            assert!(self.len < N, "Capacity overflow");
            self.storage[self.len] = string;
            self.len += 1;
        }
    }

    /// Access the stored fragments.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.storage[..self.len]
    }

    /// Iterate over characters in the composite string.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.as_slice().iter().flat_map(|s| s.chars())
    }

    /// Test if the concatenation is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for Concat<'_, N> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, const N: usize> FromIterator<&'a str> for Concat<'a, N> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut this = Self::empty();

        for string in iter {
            this.push(string);
        }

        this
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in self.as_slice() {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
