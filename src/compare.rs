use core::cmp::Ordering;
use core::hash::BuildHasher;
use core::hash::Hash;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder behind the zero-argument comparator
        /// constructors.
        ///
        /// A fixed-seed foldhash state: fast, `no_std`-friendly, and
        /// deterministic across runs. Callers that want keyed hashing can
        /// supply any [`BuildHasher`] via
        /// [`DefaultComparator::with_hasher`].
        pub type DefaultHashBuilder = foldhash::fast::FixedState;
    }
}

/// Hashing, equality, ordering, and sentinel policy for a single type.
///
/// A comparator bundles everything the table needs to know about a key type
/// (and, independently, a value type): how to hash it, how to compare two
/// instances, and which value is reserved as the "empty slot" sentinel.
/// Comparators are plain values passed at construction time; there are no
/// process-wide singletons.
///
/// # Sentinel limitation
///
/// The table never stores a key for which [`is_none`](Comparator::is_none)
/// is true. A key that legitimately equals the sentinel (e.g. `0` or `""`
/// under [`DefaultComparator`]) can never be mapped; insert operations on it
/// fail with a `false`/`None` result rather than panicking. This is a
/// documented property of the sentinel-based slot encoding, not an error
/// condition.
pub trait Comparator<T> {
    /// Hashes `value`. The table uses only the low 31 bits.
    fn hash(&self, value: &T) -> u32;

    /// Returns `true` if `a` and `b` are equal.
    fn eq(&self, a: &T, b: &T) -> bool;

    /// Total order over `T`.
    ///
    /// Provided for callers that need ordering; the table itself never
    /// sorts.
    fn cmp(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `value` is the reserved empty-slot sentinel.
    fn is_none(&self, value: &T) -> bool;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The standard comparator: a type's own default value is the
        /// sentinel.
        ///
        /// Hashing is delegated to an `S: BuildHasher`; equality and
        /// ordering come from the type's `Ord` implementation.
        ///
        /// # Examples
        ///
        /// ```rust
        /// use jump_hash::Comparator;
        /// use jump_hash::DefaultComparator;
        ///
        /// let cmp = DefaultComparator::new();
        /// assert!(cmp.is_none(&0u32));
        /// assert!(!cmp.is_none(&7u32));
        /// assert!(cmp.eq(&"a", &"a"));
        /// ```
        #[derive(Clone, Debug, Default)]
        pub struct DefaultComparator<S = DefaultHashBuilder> {
            hash_builder: S,
        }
    } else {
        /// The standard comparator: a type's own default value is the
        /// sentinel.
        ///
        /// Hashing is delegated to an `S: BuildHasher`; equality and
        /// ordering come from the type's `Ord` implementation. Without the
        /// `foldhash` feature there is no defaulted hasher; construct via
        /// [`DefaultComparator::with_hasher`].
        #[derive(Clone, Debug, Default)]
        pub struct DefaultComparator<S> {
            hash_builder: S,
        }
    }
}

#[cfg(feature = "foldhash")]
impl DefaultComparator {
    /// Creates a comparator using the default hash function.
    pub fn new() -> Self {
        Self {
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<S> DefaultComparator<S> {
    /// Creates a comparator hashing with the given builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }
}

impl<T, S> Comparator<T> for DefaultComparator<S>
where
    T: Hash + Ord + Default,
    S: BuildHasher,
{
    fn hash(&self, value: &T) -> u32 {
        fold_hash(self.hash_builder.hash_one(value))
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn is_none(&self, value: &T) -> bool {
        *value == T::default()
    }
}

/// A handle to an object owned by a host runtime.
///
/// Host-managed objects can be destroyed out from under a handle that is
/// still referenced. [`HostComparator`] uses this trait to treat such
/// handles as sentinels: a destroyed-but-still-referenced handle reads back
/// as "no value" instead of corrupting the table's free/occupied
/// bookkeeping.
pub trait HostHandle {
    /// Returns `true` if this handle never referred to a host object.
    fn is_null(&self) -> bool;

    /// Returns `true` if the host has destroyed the referenced object.
    fn is_destroyed(&self) -> bool;
}

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// A comparator for host-managed object handles.
        ///
        /// Identical to [`DefaultComparator`] except for the sentinel test:
        /// a handle is "none" when it is null **or** when the host has
        /// invalidated it ([`HostHandle::is_destroyed`]).
        #[derive(Clone, Debug, Default)]
        pub struct HostComparator<S = DefaultHashBuilder> {
            hash_builder: S,
        }
    } else {
        /// A comparator for host-managed object handles.
        ///
        /// Identical to [`DefaultComparator`] except for the sentinel test:
        /// a handle is "none" when it is null **or** when the host has
        /// invalidated it ([`HostHandle::is_destroyed`]).
        #[derive(Clone, Debug, Default)]
        pub struct HostComparator<S> {
            hash_builder: S,
        }
    }
}

#[cfg(feature = "foldhash")]
impl HostComparator {
    /// Creates a host-handle comparator using the default hash function.
    pub fn new() -> Self {
        Self {
            hash_builder: DefaultHashBuilder::default(),
        }
    }
}

impl<S> HostComparator<S> {
    /// Creates a host-handle comparator hashing with the given builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }
}

impl<T, S> Comparator<T> for HostComparator<S>
where
    T: HostHandle + Hash + Ord,
    S: BuildHasher,
{
    fn hash(&self, value: &T) -> u32 {
        fold_hash(self.hash_builder.hash_one(value))
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn cmp(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn is_none(&self, value: &T) -> bool {
        value.is_null() || value.is_destroyed()
    }
}

#[inline(always)]
fn fold_hash(hash: u64) -> u32 {
    (hash ^ (hash >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::string::ToString;
    use core::cell::Cell;

    use super::*;

    #[test]
    fn default_sentinel_is_the_default_value() {
        let cmp = DefaultComparator::new();
        assert!(cmp.is_none(&0u64));
        assert!(!cmp.is_none(&1u64));

        let cmp = DefaultComparator::new();
        assert!(cmp.is_none(&String::new()));
        assert!(!cmp.is_none(&"x".to_string()));
    }

    #[test]
    fn default_eq_and_cmp_follow_ord() {
        let cmp = DefaultComparator::new();
        assert!(cmp.eq(&3u32, &3u32));
        assert!(!cmp.eq(&3u32, &4u32));
        assert_eq!(cmp.cmp(&3u32, &4u32), Ordering::Less);
        assert_eq!(cmp.cmp(&4u32, &3u32), Ordering::Greater);
        assert_eq!(cmp.cmp(&4u32, &4u32), Ordering::Equal);
    }

    #[test]
    fn hash_is_stable_per_comparator() {
        let cmp = DefaultComparator::new();
        let a = cmp.hash(&12345u64);
        let b = cmp.hash(&12345u64);
        assert_eq!(a, b);
    }

    #[derive(Clone, Debug)]
    struct Handle {
        id: u64,
        alive: Option<Rc<Cell<bool>>>,
    }

    impl Handle {
        fn new(id: u64, alive: &Rc<Cell<bool>>) -> Self {
            Handle {
                id,
                alive: Some(Rc::clone(alive)),
            }
        }
    }

    impl Default for Handle {
        fn default() -> Self {
            Handle { id: 0, alive: None }
        }
    }

    impl PartialEq for Handle {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Handle {}

    impl PartialOrd for Handle {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(Ord::cmp(self, other))
        }
    }

    impl Ord for Handle {
        fn cmp(&self, other: &Self) -> Ordering {
            self.id.cmp(&other.id)
        }
    }

    impl Hash for Handle {
        fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
            self.id.hash(state);
        }
    }

    impl HostHandle for Handle {
        fn is_null(&self) -> bool {
            self.id == 0
        }

        fn is_destroyed(&self) -> bool {
            self.alive.as_ref().is_some_and(|flag| !flag.get())
        }
    }

    #[test]
    fn host_sentinel_covers_null_and_destroyed() {
        let cmp = HostComparator::new();
        let alive = Rc::new(Cell::new(true));
        let handle = Handle::new(1, &alive);

        assert!(cmp.is_none(&Handle::default()));
        assert!(!cmp.is_none(&handle));

        alive.set(false);
        assert!(cmp.is_none(&handle));
    }
}
