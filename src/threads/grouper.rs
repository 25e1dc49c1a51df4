//! Partition a page of casts into root-keyed thread groups

use std::collections::HashMap;
use std::collections::HashSet;

use crate::models::Cast;
use crate::threads::resolver::resolve_thread_root;

/// One author-rooted thread: the root cast plus every page member that chains
/// back to it, in source-page order.
#[derive(Debug, Clone)]
pub struct ThreadGroup<'a> {
    pub root: &'a Cast,
    pub members: Vec<&'a Cast>,
}

impl ThreadGroup<'_> {
    /// Member count minus the root; never underflows since the root is always
    /// a member of its own group.
    #[must_use]
    pub fn reply_count(&self) -> u64 {
        (self.members.len() as u64).saturating_sub(1)
    }
}

/// Group casts into threads keyed by resolved root hash.
///
/// Groups appear in the order their thread was first encountered in the source
/// list; members keep source order as well. Groups whose root is itself a
/// reply to a different author are dropped entirely: that content belongs to
/// someone else's thread and is not attributed to any of this author's
/// threads. The parent reference carries the parent author's FID, so the check
/// holds even when the parent record is absent from the page.
#[must_use]
pub fn group_into_threads<'a>(
    casts: &'a [Cast],
    index: &HashMap<&str, &'a Cast>,
    author_fid: u64,
) -> Vec<ThreadGroup<'a>> {
    let mut groups: Vec<ThreadGroup<'a>> = Vec::new();
    let mut group_by_root: HashMap<&'a str, usize> = HashMap::new();
    let mut assigned: HashSet<&'a str> = HashSet::new();

    for cast in casts {
        // Later copies of a duplicated hash were dropped from the index and
        // must not be double-counted
        if !assigned.insert(cast.hash.as_str()) {
            continue;
        }

        let root = resolve_thread_root(cast, index, author_fid);
        match group_by_root.get(root.hash.as_str()) {
            Some(&position) => groups[position].members.push(cast),
            None => {
                group_by_root.insert(root.hash.as_str(), groups.len());
                groups.push(ThreadGroup {
                    root,
                    members: vec![cast],
                });
            }
        }
    }

    groups
        .into_iter()
        .filter(|group| !group.root.replies_to_other_author(author_fid))
        .collect()
}
