use core::fmt::Debug;
use core::ops::Index;
use core::ops::IndexMut;

use crate::compare::Comparator;
use crate::hash_table::HashTable;
use crate::hash_table::Iter;
use crate::size_policy::SizePolicy;

#[cfg(feature = "foldhash")]
use crate::compare::DefaultComparator;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// A key-value map over the double-hashing [`HashTable`].
        ///
        /// `HashMap<K, V, KC, VC>` wraps the core table with the map/unmap
        /// surface. The key comparator `KC` supplies hashing, equality, and
        /// the empty-slot sentinel for keys; the value comparator `VC`
        /// supplies equality for values (used by the overwrite no-op check
        /// and [`contains_value`](HashMap::contains_value)).
        ///
        /// A key equal to the comparator's sentinel (`K::default()` under
        /// [`DefaultComparator`]) can never be stored; mapping it fails
        /// rather than panicking. See [`Comparator`].
        ///
        /// # Examples
        ///
        /// ```rust
        /// use jump_hash::HashMap;
        ///
        /// let mut map = HashMap::new(8);
        /// assert!(map.map("fef", "bub"));
        /// assert_eq!(map.find(&"fef"), Some(&"bub"));
        /// assert!(map.unmap(&"fef"));
        /// assert_eq!(map.find(&"fef"), None);
        /// ```
        #[derive(Clone)]
        pub struct HashMap<K, V, KC = DefaultComparator, VC = DefaultComparator> {
            table: HashTable<K, V, KC, VC>,
        }
    } else {
        /// A key-value map over the double-hashing [`HashTable`].
        ///
        /// `HashMap<K, V, KC, VC>` wraps the core table with the map/unmap
        /// surface. The key comparator `KC` supplies hashing, equality, and
        /// the empty-slot sentinel for keys; the value comparator `VC`
        /// supplies equality for values (used by the overwrite no-op check
        /// and [`contains_value`](HashMap::contains_value)).
        ///
        /// A key equal to the comparator's sentinel can never be stored;
        /// mapping it fails rather than panicking. See [`Comparator`].
        #[derive(Clone)]
        pub struct HashMap<K, V, KC, VC> {
            table: HashTable<K, V, KC, VC>,
        }
    }
}

#[cfg(feature = "foldhash")]
impl<K, V> HashMap<K, V>
where
    K: core::hash::Hash + Ord + Default,
    V: core::hash::Hash + Ord + Default,
{
    /// Creates a map sized to hold `initial_capacity` entries before
    /// growing, using the default comparators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jump_hash::HashMap;
    ///
    /// let map: HashMap<u64, u64> = HashMap::new(100);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_comparators(
            initial_capacity,
            DefaultComparator::new(),
            DefaultComparator::new(),
        )
    }

    /// Creates a fixed-size map: growth is disabled, and mapping into a
    /// full table fails instead of reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jump_hash::HashMap;
    ///
    /// let mut map = HashMap::new_fixed(4, 1.0);
    /// let capacity = map.capacity();
    /// for key in 1..=capacity as u64 {
    ///     assert!(map.map(key, key));
    /// }
    /// assert!(!map.map(9999, 9999));
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    pub fn new_fixed(capacity: usize, load_factor: f32) -> Self {
        Self::with_policy(
            capacity,
            SizePolicy::fixed(load_factor),
            DefaultComparator::new(),
            DefaultComparator::new(),
        )
    }
}

#[cfg(feature = "foldhash")]
impl<K, V> Default for HashMap<K, V>
where
    K: core::hash::Hash + Ord + Default,
    V: core::hash::Hash + Ord + Default,
{
    fn default() -> Self {
        Self::new(0)
    }
}

impl<K, V, KC, VC> HashMap<K, V, KC, VC>
where
    K: Default,
    V: Default,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    /// Creates a map with explicit comparators and the default sizing
    /// policy.
    pub fn with_comparators(capacity: usize, key_cmp: KC, value_cmp: VC) -> Self {
        Self {
            table: HashTable::with_comparators(capacity, key_cmp, value_cmp),
        }
    }

    /// Creates a map with explicit comparators and sizing policy.
    pub fn with_policy(capacity: usize, policy: SizePolicy, key_cmp: KC, value_cmp: VC) -> Self {
        Self {
            table: HashTable::with_policy(capacity, policy, key_cmp, value_cmp),
        }
    }

    /// Maps `key` to `value`, overwriting any existing value.
    ///
    /// Returns `true` if the map changed; `false` for a sentinel key, a
    /// full non-growable table, or a value equal to the one already stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jump_hash::HashMap;
    ///
    /// let mut map = HashMap::new(8);
    /// assert!(map.map("a", 1));
    /// assert!(map.map("a", 2));
    /// assert_eq!(map.find(&"a"), Some(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn map(&mut self, key: K, value: V) -> bool {
        self.table.insert(key, value, true)
    }

    /// Maps `key` to `value`, distinguishing rejection from a no-op.
    ///
    /// Returns `None` if `key` is the sentinel, `Some(true)` if the map
    /// changed, and `Some(false)` for a no-op (value already equal, or a
    /// full non-growable table).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jump_hash::HashMap;
    ///
    /// let mut map = HashMap::new(8);
    /// assert_eq!(map.try_map(0u64, 1u64), None); // 0 is the sentinel
    /// assert_eq!(map.try_map(5, 1), Some(true));
    /// assert_eq!(map.try_map(5, 1), Some(false));
    /// assert_eq!(map.try_map(5, 2), Some(true));
    /// ```
    pub fn try_map(&mut self, key: K, value: V) -> Option<bool> {
        if self.table.key_comparator().is_none(&key) {
            return None;
        }
        Some(self.table.insert(key, value, true))
    }

    /// Replaces the value mapped to `key`, inserting if absent.
    ///
    /// Equivalent to [`map`](HashMap::map); provided for callers that mean
    /// "update" rather than "insert".
    pub fn remap(&mut self, key: K, value: V) -> bool {
        self.map(key, value)
    }

    /// Removes `key`. Returns `true` if it was mapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jump_hash::HashMap;
    ///
    /// let mut map = HashMap::new(8);
    /// map.map(1u64, 10u64);
    /// assert!(map.unmap(&1));
    /// assert!(!map.unmap(&1));
    /// ```
    pub fn unmap(&mut self, key: &K) -> bool {
        self.table.remove(key).is_some()
    }

    /// Removes `key`, returning its value if it was mapped.
    pub fn take(&mut self, key: &K) -> Option<V> {
        self.table.remove(key)
    }

    /// Returns a reference to the value mapped to `key`.
    pub fn find(&self, key: &K) -> Option<&V> {
        self.table.find(key)
    }

    /// Returns a mutable reference to the value mapped to `key`.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        self.table.find_mut(key)
    }

    /// Returns `true` if `key` is mapped.
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }

    /// Returns `true` if any entry holds `value`. Linear scan.
    pub fn contains_value(&self, value: &V) -> bool {
        self.table.contains_value(value)
    }

    /// Removes every entry. Reallocates the backing array, so no
    /// tombstones survive.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Removes every entry in place, without reallocating.
    pub fn clear_no_alloc(&mut self) {
        self.table.clear_no_alloc();
    }

    /// Pre-sizes the map so `capacity` entries fit without implicit
    /// growth. See [`HashTable::ensure_capacity`].
    pub fn ensure_capacity(&mut self, capacity: usize) -> bool {
        self.table.ensure_capacity(capacity)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the physical size of the backing array.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Collision count since the last rehash or clear. Diagnostic.
    pub fn collisions(&self) -> usize {
        self.table.collisions()
    }

    /// Longest insert probe chain since the last rehash or clear.
    /// Diagnostic.
    pub fn longest_chain(&self) -> usize {
        self.table.longest_chain()
    }

    /// Lifetime count of backing-array allocations. Diagnostic.
    pub fn lifetime_allocations(&self) -> usize {
        self.table.lifetime_allocations()
    }

    /// Returns an iterator over `(&K, &V)` pairs in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jump_hash::HashMap;
    ///
    /// let mut map = HashMap::new(8);
    /// map.map(1u64, 10u64);
    /// map.map(2, 20);
    ///
    /// let total: u64 = map.iter().map(|(_, value)| value).sum();
    /// assert_eq!(total, 30);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, KC, VC> {
        self.table.iter()
    }

    /// Returns a read-only view over the keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jump_hash::HashMap;
    ///
    /// let mut map = HashMap::new(8);
    /// map.map("a", 1);
    /// map.map("b", 2);
    ///
    /// let mut keys: Vec<&str> = map.keys().copied().collect();
    /// keys.sort();
    /// assert_eq!(keys, ["a", "b"]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V, KC, VC> {
        Keys { inner: self.iter() }
    }

    /// Returns a read-only view over the values.
    pub fn values(&self) -> Values<'_, K, V, KC, VC> {
        Values { inner: self.iter() }
    }

    /// Creates a detached cursor; see [`crate::hash_table::Cursor`].
    ///
    /// Unlike [`iter`](HashMap::iter), a cursor does not borrow the map, so
    /// mutation between steps compiles; it is caught at the next
    /// [`Cursor::next`] call via the version stamp.
    pub fn cursor(&self) -> Cursor {
        Cursor {
            inner: self.table.cursor(),
        }
    }
}

impl<K, V, KC, VC> Debug for HashMap<K, V, KC, VC>
where
    K: Debug + Default,
    V: Debug + Default,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            map.entry(key, value);
        }
        map.finish()
    }
}

impl<K, V, KC, VC> Index<&K> for HashMap<K, V, KC, VC>
where
    K: Default,
    V: Default,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    type Output = V;

    /// Returns the value mapped to `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not mapped.
    fn index(&self, key: &K) -> &V {
        self.find(key).expect("no entry found for key")
    }
}

impl<K, V, KC, VC> IndexMut<&K> for HashMap<K, V, KC, VC>
where
    K: Default,
    V: Default,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    /// Returns a mutable reference to the value mapped to `key`, for
    /// index-style assignment to an existing entry.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not mapped.
    fn index_mut(&mut self, key: &K) -> &mut V {
        self.find_mut(key).expect("no entry found for key")
    }
}

/// A read-only view over the keys of a [`HashMap`].
pub struct Keys<'a, K, V, KC, VC> {
    inner: Iter<'a, K, V, KC, VC>,
}

impl<'a, K, V, KC, VC> Iterator for Keys<'a, K, V, KC, VC>
where
    K: Default,
    V: Default,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// A read-only view over the values of a [`HashMap`].
pub struct Values<'a, K, V, KC, VC> {
    inner: Iter<'a, K, V, KC, VC>,
}

impl<'a, K, V, KC, VC> Iterator for Values<'a, K, V, KC, VC>
where
    K: Default,
    V: Default,
    KC: Comparator<K>,
    VC: Comparator<V>,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }
}

/// A detached cursor over a [`HashMap`].
///
/// # Panics
///
/// [`next`](Cursor::next) panics if the map was structurally mutated since
/// the cursor was created.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    inner: crate::hash_table::Cursor,
}

impl Cursor {
    /// Advances to the next entry of `map`.
    pub fn next<'a, K, V, KC, VC>(
        &mut self,
        map: &'a HashMap<K, V, KC, VC>,
    ) -> Option<(&'a K, &'a V)>
    where
        K: Default,
        V: Default,
        KC: Comparator<K>,
        VC: Comparator<V>,
    {
        self.inner.next(&map.table)
    }
}
