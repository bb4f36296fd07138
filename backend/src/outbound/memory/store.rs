//! Shared in-memory entity store.
//!
//! One [`MemoryStore`] holds the user, course and enrollment tables. It is
//! cheap to clone; every clone refers to the same tables. Each table sits
//! behind its own `RwLock`, so a mutation is atomic for one entity kind and
//! there are no transactions spanning kinds.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{Course, CourseId, Email, Enrollment, EnrollmentId, User, UserId};

use super::id_allocator::IdentityAllocator;

/// Keyed collection for one entity kind.
///
/// Keys are allocated in increasing order, so iterating by key is insertion
/// order.
#[derive(Debug)]
pub struct EntityTable<K, V> {
    rows: BTreeMap<K, V>,
}

impl<K, V> Default for EntityTable<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy, V> EntityTable<K, V> {
    pub fn get(&self, id: K) -> Option<&V> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: K) -> Option<&mut V> {
        self.rows.get_mut(&id)
    }

    pub fn put(&mut self, id: K, entity: V) {
        self.rows.insert(id, entity);
    }

    /// Entities in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.rows.values()
    }
}

/// Users plus the email index.
#[derive(Debug, Default)]
pub struct UserTable {
    pub rows: EntityTable<UserId, User>,
    pub by_email: HashMap<Email, UserId>,
}

/// Enrollments plus the `(user, course)` index.
#[derive(Debug, Default)]
pub struct EnrollmentTable {
    pub rows: EntityTable<EnrollmentId, Enrollment>,
    pub by_pair: HashMap<(UserId, CourseId), EnrollmentId>,
}

#[derive(Debug, Default)]
struct StoreInner {
    ids: IdentityAllocator,
    users: RwLock<UserTable>,
    courses: RwLock<EntityTable<CourseId, Course>>,
    enrollments: RwLock<EnrollmentTable>,
}

/// Handle to the process-wide entity store.
///
/// Build one at startup and hand clones to each repository adapter.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<StoreInner>,
}

// Every mutation finishes its writes before releasing the guard, so a
// poisoned lock still holds consistent rows and is safe to keep using.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn ids(&self) -> &IdentityAllocator {
        &self.inner.ids
    }

    pub(super) fn users(&self) -> RwLockReadGuard<'_, UserTable> {
        read(&self.inner.users)
    }

    pub(super) fn users_mut(&self) -> RwLockWriteGuard<'_, UserTable> {
        write(&self.inner.users)
    }

    pub(super) fn courses(&self) -> RwLockReadGuard<'_, EntityTable<CourseId, Course>> {
        read(&self.inner.courses)
    }

    pub(super) fn courses_mut(&self) -> RwLockWriteGuard<'_, EntityTable<CourseId, Course>> {
        write(&self.inner.courses)
    }

    pub(super) fn enrollments(&self) -> RwLockReadGuard<'_, EnrollmentTable> {
        read(&self.inner.enrollments)
    }

    pub(super) fn enrollments_mut(&self) -> RwLockWriteGuard<'_, EnrollmentTable> {
        write(&self.inner.enrollments)
    }
}
