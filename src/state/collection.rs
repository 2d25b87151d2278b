//! Replace-by-key operations shared by the mentor and student reducers.
//!
//! Both collections follow the same update rule: swap exactly the entry
//! whose key matches, leave every other entry untouched, preserve order.

/// An entity with a stable identity within its collection.
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

/// Returns a new collection with the entry whose key matches
/// `replacement` swapped out for it.
///
/// No-op when no entry matches: the collection is returned unchanged.
pub fn replace_by_key<T: Keyed>(items: Vec<T>, replacement: T) -> Vec<T> {
    let key = replacement.key();
    let mut replacement = Some(replacement);
    items
        .into_iter()
        .map(|item| {
            if item.key() == key {
                replacement.take().unwrap_or(item)
            } else {
                item
            }
        })
        .collect()
}

/// Returns a new collection with `f` applied to the entry whose key
/// matches. No-op when no entry matches.
pub fn update_by_key<T, F>(items: Vec<T>, key: T::Key, f: F) -> Vec<T>
where
    T: Keyed,
    F: FnOnce(T) -> T,
{
    let mut f = Some(f);
    items
        .into_iter()
        .map(|item| {
            if item.key() == key {
                match f.take() {
                    Some(f) => f(item),
                    None => item,
                }
            } else {
                item
            }
        })
        .collect()
}
